//! The `gradelens correlation` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use gradelens_core::correlation::{correlation_matrix, pearson};
use gradelens_core::error::AnalysisError;
use gradelens_core::model::QuestionId;

use crate::config::load_config_from;

/// Single-pair result payload for JSON output.
#[derive(Serialize)]
struct PairCorrelation {
    given_question: u8,
    target_question: u8,
    correlation: f64,
}

pub fn execute(
    dataset: Option<PathBuf>,
    config_path: Option<PathBuf>,
    given: Option<u8>,
    target: Option<u8>,
    format: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let format = super::resolve_format(format, &config);

    match (given, target) {
        (Some(given), Some(target)) => {
            let given = QuestionId::new(given)?;
            let target = QuestionId::new(target)?;
            let (data, _) = super::load_dataset(dataset, &config)?;

            let result = PairCorrelation {
                given_question: given.number(),
                target_question: target.number(),
                correlation: pearson(&data, given, target),
            };

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&result)?),
                _ => println!(
                    "correlation({}, {}) = {:.4}",
                    given, target, result.correlation
                ),
            }
        }
        (None, None) => {
            let (data, _) = super::load_dataset(dataset, &config)?;
            let matrix = correlation_matrix(&data);

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&matrix)?),
                _ => {
                    let mut table = Table::new();
                    let mut header = vec![Cell::new("")];
                    header.extend(matrix.question_labels.iter().map(Cell::new));
                    table.set_header(header);

                    for (label, row) in matrix.question_labels.iter().zip(&matrix.matrix) {
                        let mut cells = vec![Cell::new(label)];
                        cells.extend(row.iter().map(|v| Cell::new(format!("{v:.2}"))));
                        table.add_row(cells);
                    }
                    println!("{table}");
                }
            }
        }
        (Some(_), None) => return Err(AnalysisError::MissingParameter("target").into()),
        (None, Some(_)) => return Err(AnalysisError::MissingParameter("given").into()),
    }

    Ok(())
}
