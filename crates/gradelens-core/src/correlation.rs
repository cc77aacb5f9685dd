//! Pearson correlation between question columns.

use serde::{Deserialize, Serialize};

use crate::model::{Dataset, QuestionId, QUESTION_COUNT};

/// Full correlation matrix over all question pairs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// `matrix[i][j]` is the correlation between questions `i + 1` and
    /// `j + 1`. Symmetric, with an exact `1.0` diagonal.
    pub matrix: Vec<Vec<f64>>,
    /// Question labels in matrix order.
    pub question_labels: Vec<String>,
}

/// Pearson correlation coefficient between two question columns.
///
/// Self-correlation is defined as exactly `1.0` without running the
/// algorithm. An empty dataset yields `0.0` rather than an error, so matrix
/// construction never aborts on partial degeneracy.
pub fn pearson(dataset: &Dataset, a: QuestionId, b: QuestionId) -> f64 {
    if a == b {
        return 1.0;
    }
    pearson_columns(&dataset.column(a), &dataset.column(b))
}

/// Pearson correlation over two equal-length numeric columns.
///
/// Zero variance in either column yields `1.0`: the coefficient is
/// mathematically undefined there, and this engine treats the degenerate
/// case as perfectly correlated rather than returning `NaN`.
fn pearson_columns(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut denom_x = 0.0;
    let mut denom_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        numerator += dx * dy;
        denom_x += dx * dx;
        denom_y += dy * dy;
    }

    if denom_x == 0.0 || denom_y == 0.0 {
        return 1.0;
    }

    numerator / newton_sqrt(denom_x * denom_y)
}

/// Square root via fixed-iteration Newton-Raphson refinement.
///
/// Twenty iterations from an initial guess equal to the operand itself.
/// The operand must be positive; callers guard the zero case.
pub fn newton_sqrt(value: f64) -> f64 {
    let mut estimate = value;
    for _ in 0..20 {
        estimate = (estimate + value / estimate) / 2.0;
    }
    estimate
}

/// Build the full symmetric matrix over every question pair.
pub fn correlation_matrix(dataset: &Dataset) -> CorrelationMatrix {
    let mut matrix = vec![vec![0.0; QUESTION_COUNT]; QUESTION_COUNT];
    for a in QuestionId::all() {
        for b in QuestionId::all() {
            matrix[a.index()][b.index()] = pearson(dataset, a, b);
        }
    }

    CorrelationMatrix {
        matrix,
        question_labels: QuestionId::all().map(|q| q.label()).collect(),
    }
}
