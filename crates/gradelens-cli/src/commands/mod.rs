//! CLI subcommand implementations.

pub mod bayes;
pub mod conditional;
pub mod correlation;
pub mod init;
pub mod records;
pub mod report;
pub mod stats;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use gradelens_core::model::Dataset;
use gradelens_core::parser;

use crate::config::GradelensConfig;

/// Resolve the dataset path (flag beats config) and load it.
pub(crate) fn load_dataset(
    dataset_flag: Option<PathBuf>,
    config: &GradelensConfig,
) -> Result<(Dataset, PathBuf)> {
    let path = dataset_flag.unwrap_or_else(|| config.dataset.clone());
    let dataset = parser::parse_dataset(&path)?;
    tracing::info!("loaded {} records from {}", dataset.len(), path.display());
    Ok((dataset, path))
}

/// Pick the output format: flag beats the configured default.
pub(crate) fn resolve_format(flag: Option<String>, config: &GradelensConfig) -> String {
    flag.unwrap_or_else(|| config.default_format.clone())
}
