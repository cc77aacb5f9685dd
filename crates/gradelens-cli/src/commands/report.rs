//! The `gradelens report` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use gradelens_core::report::AnalysisReport;
use gradelens_report::html::write_html_report;

use crate::config::load_config_from;

pub fn execute(
    dataset: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let (data, path) = super::load_dataset(dataset, &config)?;

    let report = AnalysisReport::build(&data, &path.display().to_string())?;
    print_summary(&report);

    let output = output.unwrap_or_else(|| config.output_dir.clone());
    std::fs::create_dir_all(&output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "html"]
    } else {
        format.split(',').collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(&report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    let stats = &report.statistics;

    let mut table = Table::new();
    table.set_header(vec!["Records", "Mean", "Median", "Std Dev", "Min", "Max"]);
    table.add_row(vec![
        report.dataset.record_count.to_string(),
        format!("{:.3}", stats.mean),
        format!("{:.1}", stats.median),
        format!("{:.3}", stats.std_dev),
        stats.min.to_string(),
        stats.max.to_string(),
    ]);

    eprintln!("\n{table}");
}
