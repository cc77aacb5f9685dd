//! The `gradelens conditional` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradelens_core::model::QuestionId;
use gradelens_core::probability::conditional;

use crate::config::load_config_from;

pub fn execute(
    dataset: Option<PathBuf>,
    config_path: Option<PathBuf>,
    given: u8,
    target: u8,
    format: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    // Validate the question numbers before touching the dataset.
    let given = QuestionId::new(given)?;
    let target = QuestionId::new(target)?;

    let (data, _) = super::load_dataset(dataset, &config)?;
    let result = conditional(&data, given, target);

    match super::resolve_format(format, &config).as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Metric", "Value"]);
            table.add_row(vec![
                format!("P({target} correct | {given} correct)"),
                format!("{:.4}", result.probability),
            ]);
            table.add_row(vec![
                "Both correct".to_string(),
                result.both_correct_count.to_string(),
            ]);
            table.add_row(vec![
                format!("{given} correct"),
                result.given_correct_count.to_string(),
            ]);
            println!("{table}");
        }
    }

    Ok(())
}
