//! Analysis error types.
//!
//! These are recoverable per-call failures reported to the caller, never
//! fatal to the process. Defined in `gradelens-core` so the CLI can downcast
//! and map errors to exit codes without string matching.
//!
//! Zero denominators inside the probability and correlation analyses are
//! deliberately *not* errors; each analysis documents the defined value it
//! degrades to instead.

use thiserror::Error;

/// Errors that can occur when running an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The dataset has zero records and the analysis requires at least one.
    #[error("no records in dataset")]
    EmptyDataset,

    /// A question index outside `1..=10`, or a label that does not parse
    /// to one.
    #[error("invalid question '{0}' (must be q1-q10)")]
    InvalidQuestion(String),

    /// A required scalar argument was absent at the boundary.
    #[error("missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

impl AnalysisError {
    /// Returns `true` if the failure was caused by the caller's arguments
    /// rather than by the dataset or process state.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidQuestion(_) | AnalysisError::MissingParameter(_)
        )
    }
}
