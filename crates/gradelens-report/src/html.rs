//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use gradelens_core::report::AnalysisReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML page from an analysis report.
pub fn generate_html(report: &AnalysisReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>gradelens report — {}</title>\n",
        html_escape(&report.dataset.source)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>gradelens report</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Dataset: <strong>{}</strong> | {} records | {}</p>\n",
        html_escape(&report.dataset.source),
        report.dataset.record_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Score summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Score Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str(
        "<thead><tr><th>Mean</th><th>Median</th><th>Std Dev</th><th>Variance</th><th>Min</th><th>Max</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    let stats = &report.statistics;
    html.push_str(&format!(
        "<tr><td>{:.3}</td><td>{:.1}</td><td>{:.3}</td><td>{:.3}</td><td>{}</td><td>{}</td></tr>\n",
        stats.mean, stats.median, stats.std_dev, stats.variance, stats.min, stats.max,
    ));
    html.push_str("</tbody></table>\n");

    // Per-question correct rates
    html.push_str("<h2>Correct Rate per Question</h2>\n");
    html.push_str(&generate_bar_chart(report));
    html.push_str("</section>\n");

    // Correlation heatmap
    html.push_str("<section class=\"correlation\">\n");
    html.push_str("<h2>Correlation Matrix</h2>\n");
    html.push_str(&generate_heatmap(report));
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

fn generate_bar_chart(report: &AnalysisReport) -> String {
    let bar_height = 22;
    let max_width = 400;
    let padding = 8;
    let label_width = 60;

    let stats = &report.statistics.question_stats;
    let total_height = stats.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, stat) in stats.iter().enumerate() {
        let y = i * (bar_height + padding) + padding;
        let width = (stat.correct_rate * max_width as f64) as usize;

        let color = if stat.correct_rate >= 0.8 {
            "#22c55e"
        } else if stat.correct_rate >= 0.5 {
            "#eab308"
        } else {
            "#ef4444"
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            html_escape(&stat.question)
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{:.1}%</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            stat.correct_rate * 100.0
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn generate_heatmap(report: &AnalysisReport) -> String {
    let labels = &report.correlation.question_labels;
    let mut table = String::from("<table class=\"heatmap\">\n<thead><tr><th></th>");
    for label in labels {
        table.push_str(&format!("<th>{}</th>", html_escape(label)));
    }
    table.push_str("</tr></thead>\n<tbody>\n");

    for (i, row) in report.correlation.matrix.iter().enumerate() {
        table.push_str(&format!("<tr><th>{}</th>", html_escape(&labels[i])));
        for &value in row {
            // Positive correlations shade green, negative red.
            let alpha = value.abs().min(1.0);
            let color = if value >= 0.0 {
                format!("rgba(34, 197, 94, {alpha:.2})")
            } else {
                format!("rgba(239, 68, 68, {alpha:.2})")
            };
            table.push_str(&format!(
                "<td style=\"background: {color}\">{value:.2}</td>"
            ));
        }
        table.push_str("</tr>\n");
    }

    table.push_str("</tbody></table>\n");
    table
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.heatmap td { text-align: right; font-variant-numeric: tabular-nums; }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;
