//! # Result Shaping
//!
//! Shared building blocks for calculation results. Every calculator returns,
//! alongside its primary values, an ordered list of [`CalculationStep`]s
//! (how the numbers were derived) and an ordered list of
//! [`Recommendation`]s (what the numbers suggest). Both sequences preserve
//! the order in which they were computed; that order is significant for
//! display and is stable across calls with identical input.
//!
//! ## Rounding Convention
//!
//! Intermediate values stay at full `f64` precision. Only display-oriented
//! fields (currency, percentages, formatted equation strings) are rounded,
//! at a fixed decimal precision, via [`round_to`].
//!
//! ## Example
//!
//! ```rust
//! use omni_core::report::{CalculationStep, Recommendation, round_to};
//!
//! let step = CalculationStep::new("Monthly rate", "r = 6.0% / 12", 0.005);
//! let rec = Recommendation::new("Term", "A shorter term cuts total interest");
//!
//! assert_eq!(round_to(1.6180339887, 3), 1.618);
//! ```

use serde::{Deserialize, Serialize};

/// One explanatory step of a calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Monthly payment",
///   "formula": "M = P*r*(1+r)^n / ((1+r)^n - 1)",
///   "value": 1432.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// Human-readable name of the step (e.g., "Monthly rate")
    pub label: String,

    /// The formula in plain text, with the actual numbers substituted
    pub formula: String,

    /// The value this step produced
    pub value: f64,
}

impl CalculationStep {
    pub fn new(label: impl Into<String>, formula: impl Into<String>, value: f64) -> Self {
        CalculationStep {
            label: label.into(),
            formula: formula.into(),
            value,
        }
    }
}

/// One recommendation entry attached to a result.
///
/// ## JSON Example
///
/// ```json
/// {
///   "category": "Down payment",
///   "text": "Putting 20% down avoids mortgage insurance"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Short category label (e.g., "Term", "Strategy", "Health")
    pub category: String,

    /// The suggestion text
    pub text: String,
}

impl Recommendation {
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Recommendation {
            category: category.into(),
            text: text.into(),
        }
    }
}

/// Round a value to a fixed number of decimal places.
///
/// Used only for display-oriented result fields; intermediate math keeps
/// full precision.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.6180339887, 3), 1.618);
        assert_eq!(round_to(1.6180339887, 6), 1.618034);
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn test_step_serialization() {
        let step = CalculationStep::new("Slope", "m = (1 - 0) / (1 - 0)", 1.0);
        let json = serde_json::to_string(&step).unwrap();
        let roundtrip: CalculationStep = serde_json::from_str(&json).unwrap();
        assert_eq!(step, roundtrip);
    }

    #[test]
    fn test_recommendation_serialization() {
        let rec = Recommendation::new("Strategy", "Stand");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"category\":\"Strategy\""));
    }
}
