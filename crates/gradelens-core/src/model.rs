//! Core data model types for gradelens.
//!
//! These are the fundamental types the whole system uses to represent
//! graded quiz records and the dataset they form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Number of questions in every quiz record.
pub const QUESTION_COUNT: usize = 10;

/// A validated 1-based question number in `1..=10`.
///
/// Out-of-range indices are rejected at construction, so every accessor
/// taking a `QuestionId` is total and no analysis needs a fallback branch
/// or a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(u8);

impl QuestionId {
    /// Validate a 1-based question number.
    pub fn new(number: u8) -> Result<Self, AnalysisError> {
        if (1..=QUESTION_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(AnalysisError::InvalidQuestion(number.to_string()))
        }
    }

    /// The 1-based question number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The 0-based index into a record's answer array.
    pub fn index(self) -> usize {
        usize::from(self.0) - 1
    }

    /// The question label, e.g. `"q3"`.
    pub fn label(self) -> String {
        format!("q{}", self.0)
    }

    /// All question ids in question order.
    pub fn all() -> impl Iterator<Item = QuestionId> {
        (1..=QUESTION_COUNT as u8).map(QuestionId)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = AnalysisError;

    /// Parse a question label of the form `"q3"` (or `"Q3"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('q')
            .or_else(|| s.strip_prefix('Q'))
            .ok_or_else(|| AnalysisError::InvalidQuestion(s.to_string()))?;
        let number: u8 = digits
            .parse()
            .map_err(|_| AnalysisError::InvalidQuestion(s.to_string()))?;
        Self::new(number).map_err(|_| AnalysisError::InvalidQuestion(s.to_string()))
    }
}

/// One respondent's graded quiz outcomes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedRecord {
    /// 1-based identifier assigned by ingestion order.
    pub student_id: u32,
    /// Binary outcome per question; question `k` lives at index `k - 1`.
    pub answers: [u8; QUESTION_COUNT],
    /// Stored total score. Trusted as supplied and exposed independently of
    /// `answers`; `parser::validate_dataset` warns on mismatches.
    pub total: i64,
}

impl GradedRecord {
    /// The binary outcome for one question.
    ///
    /// This is the single column accessor every analysis goes through.
    pub fn answer(&self, question: QuestionId) -> u8 {
        self.answers[question.index()]
    }

    /// Sum of the per-question outcomes.
    pub fn answer_sum(&self) -> i64 {
        self.answers.iter().map(|&a| i64::from(a)).sum()
    }
}

/// An ordered, immutable sequence of graded records.
///
/// Created once at startup and shared read-only by every analysis; the core
/// has no insert, update, or delete operations. An empty dataset is valid
/// but degenerate, and each analysis handles it explicitly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<GradedRecord>,
}

impl Dataset {
    pub fn new(records: Vec<GradedRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GradedRecord] {
        &self.records
    }

    /// The stored total of every record, in dataset order.
    pub fn totals(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.total).collect()
    }

    /// One question's outcomes as a numeric column, in dataset order.
    pub fn column(&self, question: QuestionId) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| f64::from(r.answer(question)))
            .collect()
    }

    /// How many records answered the question correctly.
    pub fn correct_count(&self, question: QuestionId) -> usize {
        self.records
            .iter()
            .filter(|r| r.answer(question) == 1)
            .count()
    }
}
