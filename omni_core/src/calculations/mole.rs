//! # Mole Calculation
//!
//! Solves one corner of the molarity triangle `M = n / V` for solutions:
//! molarity (mol/L), moles, or volume, depending on the requested
//! calculation type.
//!
//! The two operands the selected type needs are structurally required;
//! omitting one raises [`CalcError::MissingField`]. That is a precondition
//! violation the caller must never trigger in normal operation, not a
//! recoverable error kind.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Which quantity to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoleCalculationType {
    /// M = n / V
    Molarity,
    /// n = M * V
    Moles,
    /// V = n / M
    Volume,
}

/// Input parameters for the mole calculator.
///
/// Only the two operands the calculation type needs must be present.
///
/// ## JSON Example
///
/// ```json
/// { "calculation_type": "molarity", "moles": 0.5, "volume_l": 2.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleInput {
    /// The quantity to solve for
    pub calculation_type: MoleCalculationType,

    /// Amount of solute in moles
    #[serde(default)]
    pub moles: Option<f64>,

    /// Solution volume in liters
    #[serde(default)]
    pub volume_l: Option<f64>,

    /// Concentration in mol/L
    #[serde(default)]
    pub molarity: Option<f64>,
}

impl MoleInput {
    fn require(value: Option<f64>, field: &str) -> CalcResult<f64> {
        let v = value.ok_or_else(|| CalcError::missing_field(field))?;
        if v < 0.0 {
            return Err(CalcError::invalid_input(
                field,
                v.to_string(),
                "Value cannot be negative",
            ));
        }
        Ok(v)
    }

    fn require_positive(value: Option<f64>, field: &str) -> CalcResult<f64> {
        let v = Self::require(value, field)?;
        if v == 0.0 {
            return Err(CalcError::invalid_input(
                field,
                v.to_string(),
                "Value must be positive",
            ));
        }
        Ok(v)
    }
}

/// Results from mole calculation.
///
/// All three quantities are populated: the two operands echoed back plus
/// the computed one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoleResult {
    /// Which quantity was computed
    pub calculation_type: MoleCalculationType,

    /// Concentration in mol/L
    pub molarity: f64,

    /// Amount of solute in moles
    pub moles: f64,

    /// Solution volume in liters
    pub volume_l: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Solve the molarity triangle for the requested quantity.
pub fn calculate(input: &MoleInput) -> CalcResult<MoleResult> {
    let (molarity, moles, volume, step) = match input.calculation_type {
        MoleCalculationType::Molarity => {
            let n = MoleInput::require(input.moles, "moles")?;
            let v = MoleInput::require_positive(input.volume_l, "volume_l")?;
            let m = n / v;
            (m, n, v, CalculationStep::new("Molarity", format!("M = {} / {}", n, v), round_to(m, 4)))
        }
        MoleCalculationType::Moles => {
            let m = MoleInput::require(input.molarity, "molarity")?;
            let v = MoleInput::require(input.volume_l, "volume_l")?;
            let n = m * v;
            (m, n, v, CalculationStep::new("Moles", format!("n = {} * {}", m, v), round_to(n, 4)))
        }
        MoleCalculationType::Volume => {
            let n = MoleInput::require(input.moles, "moles")?;
            let m = MoleInput::require_positive(input.molarity, "molarity")?;
            let v = n / m;
            (m, n, v, CalculationStep::new("Volume", format!("V = {} / {}", n, m), round_to(v, 4)))
        }
    };

    let steps = vec![step];
    let recommendations = vec![if molarity > 1.0 {
        Recommendation::new(
            "Preparation",
            "Concentrations above 1 M are easiest to prepare by diluting from this stock",
        )
    } else {
        Recommendation::new(
            "Preparation",
            "Dissolve the solute in less solvent than the target volume, then top up to the line",
        )
    }];

    Ok(MoleResult {
        calculation_type: input.calculation_type,
        molarity: round_to(molarity, 4),
        moles: round_to(moles, 4),
        volume_l: round_to(volume, 4),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_molarity() {
        let input = MoleInput {
            calculation_type: MoleCalculationType::Molarity,
            moles: Some(0.5),
            volume_l: Some(2.0),
            molarity: None,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.molarity, 0.25);
        assert_eq!(result.moles, 0.5);
        assert_eq!(result.volume_l, 2.0);
    }

    #[test]
    fn test_moles() {
        let input = MoleInput {
            calculation_type: MoleCalculationType::Moles,
            moles: None,
            volume_l: Some(0.25),
            molarity: Some(2.0),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.moles, 0.5);
    }

    #[test]
    fn test_volume() {
        let input = MoleInput {
            calculation_type: MoleCalculationType::Volume,
            moles: Some(3.0),
            volume_l: None,
            molarity: Some(1.5),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.volume_l, 2.0);
    }

    #[test]
    fn test_missing_volume_is_precondition_failure() {
        let input = MoleInput {
            calculation_type: MoleCalculationType::Molarity,
            moles: Some(0.5),
            volume_l: None,
            molarity: None,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err, CalcError::missing_field("volume_l"));
    }

    #[test]
    fn test_zero_volume_rejected() {
        let input = MoleInput {
            calculation_type: MoleCalculationType::Molarity,
            moles: Some(0.5),
            volume_l: Some(0.0),
            molarity: None,
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_irrelevant_operand_ignored() {
        // Molarity never reads the molarity operand, even if present
        let input = MoleInput {
            calculation_type: MoleCalculationType::Molarity,
            moles: Some(1.0),
            volume_l: Some(4.0),
            molarity: Some(99.0),
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.molarity, 0.25);
    }

    #[test]
    fn test_omitted_fields_deserialize_as_none() {
        let input: MoleInput =
            serde_json::from_str(r#"{ "calculation_type": "molarity", "moles": 0.5 }"#).unwrap();
        assert_eq!(input.volume_l, None);
        assert!(calculate(&input).is_err());
    }
}
