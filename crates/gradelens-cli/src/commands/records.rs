//! The `gradelens records` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use crate::config::load_config_from;

pub fn execute(
    dataset: Option<PathBuf>,
    config_path: Option<PathBuf>,
    format: Option<String>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let (data, _) = super::load_dataset(dataset, &config)?;

    match super::resolve_format(format, &config).as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(data.records())?),
        _ => {
            let mut table = Table::new();
            let mut header = vec!["Student".to_string()];
            header.extend((1..=10).map(|q| format!("q{q}")));
            header.push("Total".to_string());
            table.set_header(header);

            for record in data.records() {
                let mut row = vec![record.student_id.to_string()];
                row.extend(record.answers.iter().map(u8::to_string));
                row.push(record.total.to_string());
                table.add_row(row);
            }
            println!("{table}");
        }
    }

    Ok(())
}
