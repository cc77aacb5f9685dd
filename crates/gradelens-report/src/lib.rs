//! gradelens-report — report rendering for gradelens.
//!
//! Renders an [`gradelens_core::report::AnalysisReport`] as a self-contained
//! HTML dashboard.

pub mod html;
