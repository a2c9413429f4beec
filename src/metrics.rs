//! Classification metrics for stem-loop predictions
//!
//! Specificity and sensitivity are reported to three decimals, matching the
//! precision of the published sweep tables. A zero denominator is an error,
//! never NaN or infinity.

use thiserror::Error;

/// Errors raised while computing metrics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetricError {
    #[error("{metric} is undefined: denominator is zero")]
    ZeroDenominator { metric: Metric },

    #[error("cannot take the mean of an empty sequence")]
    EmptyInput,
}

/// The two metrics tracked per sweep directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Specificity,
    Sensitivity,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Specificity => write!(f, "specificity"),
            Metric::Sensitivity => write!(f, "sensitivity"),
        }
    }
}

/// Round to three decimals, ties to even.
///
/// Ties are judged on the exact binary value: a product that only looks
/// like `x.5` after scaling is resolved by the sign of its rounding error.
pub fn round3(value: f64) -> f64 {
    let scaled = value * 1000.0;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        // Exact error of the product (fused multiply-add)
        let error = value.mul_add(1000.0, -scaled);
        if error > 0.0 {
            scaled.ceil()
        } else if error < 0.0 {
            scaled.floor()
        } else {
            scaled.round_ties_even()
        }
    } else {
        scaled.round()
    };
    rounded / 1000.0
}

fn ratio(metric: Metric, hits: u64, misses: u64) -> Result<f64, MetricError> {
    // u128 so counts near u64::MAX cannot overflow
    let total = u128::from(hits) + u128::from(misses);
    if total == 0 {
        return Err(MetricError::ZeroDenominator { metric });
    }
    Ok(round3(hits as f64 / total as f64))
}

/// Specificity: `tn / (tn + fp)`, rounded to 3 decimals
///
/// # Example
/// ```
/// use stemsweep::metrics::specificity;
///
/// assert_eq!(specificity(8, 2).unwrap(), 0.8);
/// assert!(specificity(0, 0).is_err());
/// ```
pub fn specificity(true_negative: u64, false_positive: u64) -> Result<f64, MetricError> {
    ratio(Metric::Specificity, true_negative, false_positive)
}

/// Sensitivity: `tp / (tp + fn)`, rounded to 3 decimals
pub fn sensitivity(true_positive: u64, false_negative: u64) -> Result<f64, MetricError> {
    ratio(Metric::Sensitivity, true_positive, false_negative)
}

/// Arithmetic mean of a non-empty slice
pub fn mean(values: &[f64]) -> Result<f64, MetricError> {
    if values.is_empty() {
        return Err(MetricError::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
