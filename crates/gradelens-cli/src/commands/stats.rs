//! The `gradelens stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradelens_core::statistics::score_statistics;

use crate::config::load_config_from;

pub fn execute(
    dataset: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let (data, _) = super::load_dataset(dataset, &config)?;

    let stats = score_statistics(&data)?;

    match super::resolve_format(format, &config).as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            let mut table = Table::new();
            table.set_header(vec!["Metric", "Value"]);
            table.add_row(vec!["Records".to_string(), data.len().to_string()]);
            table.add_row(vec!["Mean".to_string(), format!("{:.3}", stats.mean)]);
            table.add_row(vec!["Median".to_string(), format!("{:.1}", stats.median)]);
            table.add_row(vec!["Std Dev".to_string(), format!("{:.3}", stats.std_dev)]);
            table.add_row(vec![
                "Variance".to_string(),
                format!("{:.3}", stats.variance),
            ]);
            table.add_row(vec!["Min".to_string(), stats.min.to_string()]);
            table.add_row(vec!["Max".to_string(), stats.max.to_string()]);
            println!("{table}");

            let mut questions = Table::new();
            questions.set_header(vec!["Question", "Correct Rate"]);
            for q in &stats.question_stats {
                questions.add_row(vec![
                    q.question.clone(),
                    format!("{:.1}%", q.correct_rate * 100.0),
                ]);
            }
            println!("{questions}");
        }
    }

    Ok(())
}
