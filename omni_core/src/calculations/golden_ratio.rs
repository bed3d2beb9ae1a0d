//! # Golden Ratio Calculation
//!
//! Scales a value by φ = (1 + √5) / 2 in either direction and builds a
//! five-term Fibonacci-style sequence by repeated summation of the two
//! values.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Whether to scale the value up (multiply by φ) or down (divide by φ).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Input parameters for the golden ratio scaler.
///
/// ## JSON Example
///
/// ```json
/// { "value": 1.0, "direction": "up" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenRatioInput {
    /// The value to scale
    pub value: f64,

    /// Scale direction
    pub direction: Direction,
}

impl GoldenRatioInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.value <= 0.0 {
            return Err(CalcError::invalid_input(
                "value",
                self.value.to_string(),
                "Value must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from golden ratio calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenRatioResult {
    /// The scaled value, rounded to 3 decimal places
    pub result: f64,

    /// Ratio of the larger to the smaller value, rounded to 6 decimal places
    pub ratio: f64,

    /// Five-term sequence from repeated summation, each term at 3 decimals
    pub sequence: Vec<f64>,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the golden-ratio counterpart of a value.
pub fn calculate(input: &GoldenRatioInput) -> CalcResult<GoldenRatioResult> {
    input.validate()?;

    let phi = (1.0 + 5f64.sqrt()) / 2.0;
    let scaled = match input.direction {
        Direction::Up => input.value * phi,
        Direction::Down => input.value / phi,
    };

    // Seed the sequence with the smaller value first so summation grows
    let (smaller, larger) = match input.direction {
        Direction::Up => (input.value, scaled),
        Direction::Down => (scaled, input.value),
    };
    let mut sequence = vec![smaller, larger];
    while sequence.len() < 5 {
        let next = sequence[sequence.len() - 2] + sequence[sequence.len() - 1];
        sequence.push(next);
    }
    let sequence: Vec<f64> = sequence.into_iter().map(|t| round_to(t, 3)).collect();

    let ratio = larger / smaller;

    let op = match input.direction {
        Direction::Up => format!("{} * {:.6}", input.value, phi),
        Direction::Down => format!("{} / {:.6}", input.value, phi),
    };
    let steps = vec![
        CalculationStep::new("Golden ratio", "phi = (1 + sqrt(5)) / 2".to_string(), round_to(phi, 6)),
        CalculationStep::new("Scaled value", op, round_to(scaled, 3)),
        CalculationStep::new(
            "Ratio check",
            format!("{:.3} / {:.3}", larger, smaller),
            round_to(ratio, 6),
        ),
    ];

    let recommendations = vec![Recommendation::new(
        "Design",
        "Pairs sized at this ratio read as naturally proportioned; use the sequence for nested spacing scales",
    )];

    Ok(GoldenRatioResult {
        result: round_to(scaled, 3),
        ratio: round_to(ratio, 6),
        sequence,
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_up_from_one() {
        let input = GoldenRatioInput { value: 1.0, direction: Direction::Up };
        let result = calculate(&input).unwrap();
        assert_eq!(result.result, 1.618);
        assert_eq!(result.ratio, 1.618034);
    }

    #[test]
    fn test_scale_down_from_one() {
        let input = GoldenRatioInput { value: 1.0, direction: Direction::Down };
        let result = calculate(&input).unwrap();
        // 1 / phi = phi - 1
        assert_eq!(result.result, 0.618);
        assert_eq!(result.ratio, 1.618034);
    }

    #[test]
    fn test_sequence_is_fibonacci_style() {
        let input = GoldenRatioInput { value: 1.0, direction: Direction::Up };
        let result = calculate(&input).unwrap();
        assert_eq!(result.sequence.len(), 5);
        // 1, 1.618, 2.618, 4.236, 6.854
        assert_eq!(result.sequence[0], 1.0);
        assert_eq!(result.sequence[1], 1.618);
        assert_eq!(result.sequence[2], 2.618);
        assert_eq!(result.sequence[3], 4.236);
        assert_eq!(result.sequence[4], 6.854);
    }

    #[test]
    fn test_ratio_independent_of_value() {
        let a = calculate(&GoldenRatioInput { value: 7.5, direction: Direction::Up }).unwrap();
        let b = calculate(&GoldenRatioInput { value: 120.0, direction: Direction::Down }).unwrap();
        assert_eq!(a.ratio, b.ratio);
    }

    #[test]
    fn test_nonpositive_value_rejected() {
        let input = GoldenRatioInput { value: 0.0, direction: Direction::Up };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_direction_serialization() {
        let input = GoldenRatioInput { value: 1.0, direction: Direction::Up };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"up\""));
    }
}
