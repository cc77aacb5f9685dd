//! The `gradelens bayes` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradelens_core::model::QuestionId;
use gradelens_core::probability::posterior;

use crate::config::load_config_from;

pub fn execute(
    dataset: Option<PathBuf>,
    config_path: Option<PathBuf>,
    condition: String,
    value: u8,
    threshold: i64,
    format: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    // Validate the condition label before touching the dataset.
    let question: QuestionId = condition.parse()?;

    let (data, _) = super::load_dataset(dataset, &config)?;
    let result = posterior(&data, question, value, threshold);

    match super::resolve_format(format, &config).as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Metric", "Value"]);
            table.add_row(vec![
                format!("P(total >= {threshold} | {question} = {value})"),
                format!("{:.4}", result.posterior_probability),
            ]);
            table.add_row(vec![
                format!("Prior P(total >= {threshold})"),
                format!("{:.4}", result.prior_probability),
            ]);
            table.add_row(vec![
                format!("Likelihood P({question} = {value} | total >= {threshold})"),
                format!("{:.4}", result.likelihood_probability),
            ]);
            table.add_row(vec![
                "Condition met".to_string(),
                result.condition_met_count.to_string(),
            ]);
            table.add_row(vec![
                "Both conditions met".to_string(),
                result.both_conditions_met_count.to_string(),
            ]);
            table.add_row(vec![
                "Threshold met".to_string(),
                result.threshold_met_count.to_string(),
            ]);
            println!("{table}");
        }
    }

    Ok(())
}
