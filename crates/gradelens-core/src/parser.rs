//! CSV dataset parser.
//!
//! Loads graded records from the fixed-column CSV layout (`Q1..Q10,Total`)
//! and lints datasets for internal consistency.

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{Dataset, GradedRecord, QUESTION_COUNT};

/// Parse a dataset from a CSV file.
pub fn parse_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file: {}", path.display()))?;

    let dataset = parse_dataset_str(&content, path)?;
    tracing::debug!("parsed {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse CSV content into a `Dataset` (useful for testing).
///
/// The first row is a header and is skipped. Every data row must carry
/// exactly eleven numeric fields: the ten answers in question order, then
/// the stored total. Student IDs are assigned by row position, 1-based.
/// Blank lines are ignored; malformed rows fail with a row-numbered error.
pub fn parse_dataset_str(content: &str, source_path: &Path) -> Result<Dataset> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = index + 1;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != QUESTION_COUNT + 1 {
            anyhow::bail!(
                "{}:{}: expected {} fields, found {}",
                source_path.display(),
                row,
                QUESTION_COUNT + 1,
                fields.len()
            );
        }

        let mut answers = [0u8; QUESTION_COUNT];
        for (slot, field) in answers.iter_mut().zip(&fields) {
            *slot = field.parse().with_context(|| {
                format!(
                    "{}:{}: invalid answer value '{field}'",
                    source_path.display(),
                    row
                )
            })?;
        }

        let total = fields[QUESTION_COUNT].parse().with_context(|| {
            format!(
                "{}:{}: invalid total '{}'",
                source_path.display(),
                row,
                fields[QUESTION_COUNT]
            )
        })?;

        records.push(GradedRecord {
            student_id: records.len() as u32 + 1,
            answers,
            total,
        });
    }

    Ok(Dataset::new(records))
}

/// A warning from dataset validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The offending record (if applicable).
    pub student_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Lint a dataset for common issues.
///
/// Warnings are advisory: the engine trusts stored totals and answer values
/// as supplied, so inconsistencies surface here rather than failing an
/// analysis midway.
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if dataset.is_empty() {
        warnings.push(ValidationWarning {
            student_id: None,
            message: "dataset has no records".into(),
        });
    }

    for record in dataset.records() {
        for (i, &answer) in record.answers.iter().enumerate() {
            if answer > 1 {
                warnings.push(ValidationWarning {
                    student_id: Some(record.student_id),
                    message: format!("q{} has non-binary value {answer}", i + 1),
                });
            }
        }

        let sum = record.answer_sum();
        if record.total != sum {
            warnings.push(ValidationWarning {
                student_id: Some(record.student_id),
                message: format!(
                    "stored total {} does not match answer sum {sum}",
                    record.total
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_CSV: &str = "\
Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total
1,1,0,1,0,1,1,1,1,0,7
0,1,1,1,0,1,0,1,1,0,6
1,1,1,1,1,1,1,1,1,1,10
";

    #[test]
    fn parse_valid_csv() {
        let dataset = parse_dataset_str(VALID_CSV, &PathBuf::from("grades.csv")).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records()[0].student_id, 1);
        assert_eq!(dataset.records()[2].student_id, 3);
        assert_eq!(dataset.records()[0].total, 7);
        assert_eq!(dataset.records()[2].answers, [1; 10]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let csv = "Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total\n\n1,0,0,0,0,0,0,0,0,0,1\n\n";
        let dataset = parse_dataset_str(csv, &PathBuf::from("grades.csv")).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn parse_header_only_is_empty() {
        let dataset = parse_dataset_str(
            "Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total\n",
            &PathBuf::from("grades.csv"),
        )
        .unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn parse_wrong_field_count() {
        let csv = "Q1,Q2,Total\n1,0,1\n";
        let err = parse_dataset_str(csv, &PathBuf::from("grades.csv")).unwrap_err();
        assert!(err.to_string().contains("expected 11 fields"));
        assert!(err.to_string().contains("grades.csv:2"));
    }

    #[test]
    fn parse_non_numeric_field() {
        let csv = "Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total\n1,0,x,0,0,0,0,0,0,0,1\n";
        let err = parse_dataset_str(csv, &PathBuf::from("grades.csv")).unwrap_err();
        assert!(format!("{err:#}").contains("invalid answer value 'x'"));
    }

    #[test]
    fn parse_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.csv");
        std::fs::write(&path, VALID_CSV).unwrap();

        let dataset = parse_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn parse_missing_file() {
        let err = parse_dataset(&PathBuf::from("no_such_file.csv")).unwrap_err();
        assert!(err.to_string().contains("failed to read dataset file"));
    }

    #[test]
    fn validate_total_mismatch() {
        let csv = "Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total\n1,1,0,0,0,0,0,0,0,0,5\n";
        let dataset = parse_dataset_str(csv, &PathBuf::from("grades.csv")).unwrap();
        let warnings = validate_dataset(&dataset);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].student_id, Some(1));
        assert!(warnings[0].message.contains("does not match answer sum 2"));
    }

    #[test]
    fn validate_non_binary_answer() {
        let csv = "Q1,Q2,Q3,Q4,Q5,Q6,Q7,Q8,Q9,Q10,Total\n2,0,0,0,0,0,0,0,0,0,2\n";
        let dataset = parse_dataset_str(csv, &PathBuf::from("grades.csv")).unwrap();
        let warnings = validate_dataset(&dataset);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("non-binary value 2")));
    }

    #[test]
    fn validate_empty_dataset() {
        let warnings = validate_dataset(&Dataset::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("no records"));
    }

    #[test]
    fn validate_clean_dataset() {
        let dataset = parse_dataset_str(VALID_CSV, &PathBuf::from("grades.csv")).unwrap();
        assert!(validate_dataset(&dataset).is_empty());
    }
}
