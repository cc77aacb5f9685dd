//! Descriptive statistics over total scores and question columns.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::model::{Dataset, QuestionId};

/// Summary statistics over a dataset's total scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreStatistics {
    /// Arithmetic mean of the totals.
    pub mean: f64,
    /// Upper-middle element of the sorted totals. For even counts this is
    /// the higher of the two middle elements, not their average.
    pub median: f64,
    /// Population variance, computed as `E[x²] − E[x]²`.
    pub variance: f64,
    /// Square root of the population variance.
    pub std_dev: f64,
    /// Smallest total.
    pub min: i64,
    /// Largest total.
    pub max: i64,
    /// Correct-rate per question, in question order.
    pub question_stats: Vec<QuestionStat>,
}

/// Correct-rate for a single question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionStat {
    /// Question label, `"q1"`..`"q10"`.
    pub question: String,
    /// Fraction of respondents answering the question correctly.
    pub correct_rate: f64,
}

/// Compute descriptive statistics over the dataset's total scores.
///
/// Requires a non-empty dataset; this is the one analysis that fails on an
/// empty one rather than degrading to a defined value.
pub fn score_statistics(dataset: &Dataset) -> Result<ScoreStatistics, AnalysisError> {
    let records = dataset.records();
    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let n = records.len() as f64;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    let mut min = records[0].total;
    let mut max = records[0].total;

    for record in records {
        let total = record.total as f64;
        sum += total;
        sum_sq += total * total;
        min = min.min(record.total);
        max = max.max(record.total);
    }

    let mean = sum / n;
    let variance = sum_sq / n - mean * mean;
    let std_dev = if variance > 0.0 { variance.sqrt() } else { 0.0 };

    let mut sorted = dataset.totals();
    sorted.sort_unstable();
    let median = sorted[sorted.len() / 2] as f64;

    Ok(ScoreStatistics {
        mean,
        median,
        variance,
        std_dev,
        min,
        max,
        question_stats: question_correct_rates(dataset),
    })
}

/// Correct-rate for every question, in question order.
pub fn question_correct_rates(dataset: &Dataset) -> Vec<QuestionStat> {
    let n = dataset.len() as f64;
    QuestionId::all()
        .map(|q| QuestionStat {
            question: q.label(),
            correct_rate: if dataset.is_empty() {
                0.0
            } else {
                dataset.correct_count(q) as f64 / n
            },
        })
        .collect()
}
