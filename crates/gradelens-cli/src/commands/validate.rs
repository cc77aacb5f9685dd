//! The `gradelens validate` command.

use std::path::PathBuf;

use anyhow::Result;

use gradelens_core::parser::validate_dataset;

use crate::config::load_config_from;

pub fn execute(dataset: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let (data, path) = super::load_dataset(dataset, &config)?;

    println!("Dataset: {} ({} records)", path.display(), data.len());

    let warnings = validate_dataset(&data);
    for w in &warnings {
        let prefix = w
            .student_id
            .map(|id| format!("  [student {id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Dataset valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
