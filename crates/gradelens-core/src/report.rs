//! Analysis report assembly with JSON persistence.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::correlation::{correlation_matrix, CorrelationMatrix};
use crate::error::AnalysisError;
use crate::model::Dataset;
use crate::statistics::{score_statistics, ScoreStatistics};

/// A complete analysis report over one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the dataset analyzed.
    pub dataset: DatasetSummary,
    /// Descriptive statistics over the total scores.
    pub statistics: ScoreStatistics,
    /// Correlation matrix over all question pairs.
    pub correlation: CorrelationMatrix,
    /// Wall-clock duration of the analysis in milliseconds.
    pub duration_ms: u64,
}

/// Summary of the dataset (without the full records).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub source: String,
    pub record_count: usize,
}

impl AnalysisReport {
    /// Run every bulk analysis over the dataset and assemble a report.
    ///
    /// Fails with [`AnalysisError::EmptyDataset`] when the dataset has no
    /// records, like the descriptive statistics it embeds.
    pub fn build(dataset: &Dataset, source: &str) -> Result<Self, AnalysisError> {
        let start = Instant::now();
        let statistics = score_statistics(dataset)?;
        let correlation = correlation_matrix(dataset);

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            dataset: DatasetSummary {
                source: source.to_string(),
                record_count: dataset.len(),
            },
            statistics,
            correlation,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradedRecord, QUESTION_COUNT};

    fn make_dataset() -> Dataset {
        let rows: [[u8; QUESTION_COUNT]; 4] = [
            [1, 1, 0, 1, 0, 1, 1, 1, 1, 0],
            [0, 1, 1, 1, 0, 1, 0, 1, 1, 0],
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            [1, 0, 0, 1, 0, 0, 0, 1, 0, 0],
        ];
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, answers)| GradedRecord {
                student_id: i as u32 + 1,
                answers: *answers,
                total: answers.iter().map(|&a| i64::from(a)).sum(),
            })
            .collect();
        Dataset::new(records)
    }

    #[test]
    fn build_assembles_all_analyses() {
        let dataset = make_dataset();
        let report = AnalysisReport::build(&dataset, "grades.csv").unwrap();

        assert_eq!(report.dataset.source, "grades.csv");
        assert_eq!(report.dataset.record_count, 4);
        assert_eq!(report.correlation.matrix.len(), QUESTION_COUNT);
        assert_eq!(report.statistics.question_stats.len(), QUESTION_COUNT);
        assert!(report.statistics.min <= report.statistics.max);
    }

    #[test]
    fn build_rejects_empty_dataset() {
        let err = AnalysisReport::build(&Dataset::default(), "empty.csv").unwrap_err();
        assert_eq!(err, AnalysisError::EmptyDataset);
    }

    #[test]
    fn json_roundtrip() {
        let report = AnalysisReport::build(&make_dataset(), "grades.csv").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = AnalysisReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.dataset.record_count, 4);
        assert_eq!(loaded.statistics.mean, report.statistics.mean);
        assert_eq!(loaded.correlation.matrix, report.correlation.matrix);
    }
}
