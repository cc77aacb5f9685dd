//! Conditional probability and Bayesian posterior analyses.

use serde::{Deserialize, Serialize};

use crate::model::{Dataset, QuestionId};

/// Result of `P(target correct | given correct)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalProbability {
    /// The conditioning question number.
    pub given_question: u8,
    /// The target question number.
    pub target_question: u8,
    /// `both_correct_count / given_correct_count`, or `0.0` when the
    /// denominator is zero.
    pub probability: f64,
    /// Records answering both questions correctly.
    pub both_correct_count: usize,
    /// Records answering the given question correctly.
    pub given_correct_count: usize,
}

/// Probability that the target question is correct given the conditioning
/// question is correct.
///
/// A zero `given_correct_count` yields probability `0.0` by policy, never an
/// error; the raw counts are returned alongside the ratio for auditability.
pub fn conditional(
    dataset: &Dataset,
    given: QuestionId,
    target: QuestionId,
) -> ConditionalProbability {
    let mut given_correct_count = 0;
    let mut both_correct_count = 0;

    for record in dataset.records() {
        if record.answer(given) == 1 {
            given_correct_count += 1;
            if record.answer(target) == 1 {
                both_correct_count += 1;
            }
        }
    }

    let probability = if given_correct_count > 0 {
        both_correct_count as f64 / given_correct_count as f64
    } else {
        0.0
    };

    ConditionalProbability {
        given_question: given.number(),
        target_question: target.number(),
        probability,
        both_correct_count,
        given_correct_count,
    }
}

/// Result of `P(total >= threshold | question == value)` with its
/// supporting prior and likelihood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosteriorAnalysis {
    /// The conditioning question label, e.g. `"q3"`.
    pub condition: String,
    /// The expected answer value for the conditioning question.
    pub condition_value: u8,
    /// The total-score threshold.
    pub threshold: i64,
    /// `P(total >= threshold | answer == value)`.
    pub posterior_probability: f64,
    /// `P(total >= threshold)` over the whole dataset.
    pub prior_probability: f64,
    /// `P(answer == value | total >= threshold)`.
    pub likelihood_probability: f64,
    /// Records matching the answer condition.
    pub condition_met_count: usize,
    /// Records matching both the answer condition and the threshold.
    pub both_conditions_met_count: usize,
    /// Records meeting the threshold, independent of the question.
    pub threshold_met_count: usize,
}

/// Bayesian posterior relating a question outcome to a total-score threshold.
///
/// The posterior, prior, and likelihood are derived independently in a
/// single pass; each zero denominator yields `0.0` by the same policy as
/// [`conditional`]. `value` is the expected binary outcome and is not
/// range-restricted by the engine.
pub fn posterior(
    dataset: &Dataset,
    question: QuestionId,
    value: u8,
    threshold: i64,
) -> PosteriorAnalysis {
    let mut condition_met_count = 0;
    let mut both_conditions_met_count = 0;
    let mut threshold_met_count = 0;

    for record in dataset.records() {
        let threshold_met = record.total >= threshold;
        if threshold_met {
            threshold_met_count += 1;
        }
        if record.answer(question) == value {
            condition_met_count += 1;
            if threshold_met {
                both_conditions_met_count += 1;
            }
        }
    }

    let ratio = |numerator: usize, denominator: usize| {
        if denominator > 0 {
            numerator as f64 / denominator as f64
        } else {
            0.0
        }
    };

    PosteriorAnalysis {
        condition: question.label(),
        condition_value: value,
        threshold,
        posterior_probability: ratio(both_conditions_met_count, condition_met_count),
        prior_probability: ratio(threshold_met_count, dataset.len()),
        likelihood_probability: ratio(both_conditions_met_count, threshold_met_count),
        condition_met_count,
        both_conditions_met_count,
        threshold_met_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GradedRecord, QUESTION_COUNT};

    fn record(student_id: u32, answers: [u8; QUESTION_COUNT]) -> GradedRecord {
        let total = answers.iter().map(|&a| i64::from(a)).sum();
        GradedRecord {
            student_id,
            answers,
            total,
        }
    }

    fn q(n: u8) -> QuestionId {
        QuestionId::new(n).unwrap()
    }

    #[test]
    fn conditional_certain() {
        // q1 and q2 both correct for students 1 and 2, both incorrect for 3.
        let dataset = Dataset::new(vec![
            record(1, [1, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
            record(2, [1, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
            record(3, [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        let result = conditional(&dataset, q(1), q(2));
        assert_eq!(result.probability, 1.0);
        assert_eq!(result.both_correct_count, 2);
        assert_eq!(result.given_correct_count, 2);
    }

    #[test]
    fn conditional_two_thirds() {
        // q1 correct for three of four records; q2 also correct for two.
        let dataset = Dataset::new(vec![
            record(1, [1, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
            record(2, [1, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
            record(3, [1, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
            record(4, [0, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        let result = conditional(&dataset, q(1), q(2));
        assert!((result.probability - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.both_correct_count, 2);
        assert_eq!(result.given_correct_count, 3);
    }

    #[test]
    fn conditional_zero_division_is_zero() {
        // Nobody answered q1 correctly; defined as 0.0, not an error.
        let dataset = Dataset::new(vec![
            record(1, [0, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
            record(2, [0, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
        ]);
        let result = conditional(&dataset, q(1), q(2));
        assert_eq!(result.probability, 0.0);
        assert_eq!(result.given_correct_count, 0);
        assert_eq!(result.both_correct_count, 0);
    }

    #[test]
    fn conditional_on_empty_dataset() {
        let result = conditional(&Dataset::default(), q(1), q(2));
        assert_eq!(result.probability, 0.0);
        assert_eq!(result.given_correct_count, 0);
    }

    #[test]
    fn posterior_counts_and_probabilities() {
        let dataset = Dataset::new(vec![
            record(1, [1, 1, 1, 1, 1, 1, 1, 1, 0, 0]), // total 8
            record(2, [1, 1, 1, 1, 1, 1, 0, 0, 0, 0]), // total 6
            record(3, [1, 1, 1, 0, 0, 0, 0, 0, 0, 0]), // total 3
            record(4, [0, 1, 1, 1, 1, 1, 1, 1, 1, 0]), // total 8
        ]);
        let result = posterior(&dataset, q(1), 1, 7);

        assert_eq!(result.condition, "q1");
        assert_eq!(result.condition_met_count, 3);
        assert_eq!(result.both_conditions_met_count, 1);
        assert_eq!(result.threshold_met_count, 2);
        assert!((result.posterior_probability - 1.0 / 3.0).abs() < 1e-9);
        assert!((result.prior_probability - 0.5).abs() < 1e-9);
        assert!((result.likelihood_probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn posterior_conditioning_on_incorrect_answers() {
        let dataset = Dataset::new(vec![
            record(1, [1, 1, 1, 0, 0, 0, 0, 0, 0, 0]), // total 3
            record(2, [0, 1, 1, 1, 1, 1, 1, 1, 0, 0]), // total 7
        ]);
        let result = posterior(&dataset, q(1), 0, 5);
        assert_eq!(result.condition_met_count, 1);
        assert_eq!(result.both_conditions_met_count, 1);
        assert_eq!(result.posterior_probability, 1.0);
    }

    #[test]
    fn posterior_zero_denominators_are_zero() {
        let dataset = Dataset::new(vec![record(1, [1, 0, 0, 0, 0, 0, 0, 0, 0, 0])]);

        // No record meets the threshold.
        let unreachable = posterior(&dataset, q(1), 1, 11);
        assert_eq!(unreachable.likelihood_probability, 0.0);
        assert_eq!(unreachable.posterior_probability, 0.0);
        assert_eq!(unreachable.prior_probability, 0.0);

        // No record matches the answer condition.
        let unmatched = posterior(&dataset, q(2), 1, 0);
        assert_eq!(unmatched.condition_met_count, 0);
        assert_eq!(unmatched.posterior_probability, 0.0);
    }

    #[test]
    fn posterior_on_empty_dataset() {
        let result = posterior(&Dataset::default(), q(1), 1, 5);
        assert_eq!(result.posterior_probability, 0.0);
        assert_eq!(result.prior_probability, 0.0);
        assert_eq!(result.likelihood_probability, 0.0);
    }

    #[test]
    fn posterior_satisfies_bayes_identity() {
        let dataset = Dataset::new(vec![
            record(1, [1, 1, 1, 1, 1, 1, 1, 1, 0, 0]),
            record(2, [1, 1, 1, 1, 1, 1, 0, 0, 0, 0]),
            record(3, [1, 1, 1, 0, 0, 0, 0, 0, 0, 0]),
            record(4, [0, 1, 1, 1, 1, 1, 1, 1, 1, 0]),
            record(5, [0, 0, 0, 1, 1, 0, 0, 0, 0, 0]),
        ]);
        let n = dataset.len() as f64;
        let result = posterior(&dataset, q(1), 1, 6);
        assert!(result.threshold_met_count > 0);
        assert!(result.condition_met_count > 0);

        // posterior * P(condition) == likelihood * prior == both_met / n
        let condition_rate = result.condition_met_count as f64 / n;
        let joint = result.both_conditions_met_count as f64 / n;
        assert!((result.posterior_probability * condition_rate - joint).abs() < 1e-12);
        assert!(
            (result.likelihood_probability * result.prior_probability - joint).abs() < 1e-12
        );
    }
}
