//! # Vertex Distance Calculation
//!
//! Converts a prescribed optical power across the gap between spectacle
//! lens and cornea. Moving a lens closer to the eye changes its effective
//! power; contact lenses sit at zero vertex distance, so a spectacle
//! prescription must be compensated before it can be ordered as contacts.
//!
//! ## Method
//!
//! With the vertex distance `d` in meters and the prescribed power `F`
//! in diopters, the compensated power is `Fc = F / (1 - d*F)` toward the
//! eye and `Fs = F / (1 + d*F)` away from it. The recommended power snaps
//! to the 0.25 D steps lenses are manufactured in.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};
use crate::units::{Diopters, Meters, Millimeters};

/// Conversion direction across the vertex gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    /// From spectacle plane to the cornea (ordering contacts)
    SpectacleToContact,
    /// From the cornea back to the spectacle plane
    ContactToSpectacle,
}

/// Input parameters for vertex compensation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "power_d": -5.0,
///   "vertex_distance_mm": 12.0,
///   "direction": "spectacle_to_contact"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexDistanceInput {
    /// Prescribed power in diopters (negative for myopia)
    pub power_d: f64,

    /// Vertex distance in millimeters (typically 10-14)
    pub vertex_distance_mm: f64,

    /// Which way to convert
    pub direction: ConversionDirection,
}

impl VertexDistanceInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !(0.0..=20.0).contains(&self.vertex_distance_mm) {
            return Err(CalcError::invalid_input(
                "vertex_distance_mm",
                self.vertex_distance_mm.to_string(),
                "Vertex distance must be between 0 and 20 mm",
            ));
        }
        if self.power_d.abs() > 30.0 {
            return Err(CalcError::invalid_input(
                "power_d",
                self.power_d.to_string(),
                "Power must be within +/-30 D",
            ));
        }
        Ok(())
    }
}

/// Results from vertex distance calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexDistanceResult {
    /// Compensated power, rounded to 2 decimals
    pub compensated_power_d: f64,

    /// Compensated power snapped to the 0.25 D manufacturing step
    pub recommended_power_d: f64,

    /// Difference between compensated and prescribed power, 2 decimals
    pub power_change_d: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Convert a power across the vertex distance.
pub fn calculate(input: &VertexDistanceInput) -> CalcResult<VertexDistanceResult> {
    input.validate()?;

    let d: Meters = Millimeters(input.vertex_distance_mm).into();
    let f = Diopters(input.power_d);

    let denominator = match input.direction {
        ConversionDirection::SpectacleToContact => 1.0 - d.0 * f.0,
        ConversionDirection::ContactToSpectacle => 1.0 + d.0 * f.0,
    };
    if denominator.abs() < 1e-9 {
        return Err(CalcError::calculation_failed(
            "vertex_distance",
            "Effective power is undefined at this vertex distance",
        ));
    }

    let compensated = f.0 / denominator;
    let recommended = (compensated / 0.25).round() * 0.25;
    let change = compensated - f.0;

    let sign = match input.direction {
        ConversionDirection::SpectacleToContact => "-",
        ConversionDirection::ContactToSpectacle => "+",
    };
    let steps = vec![
        CalculationStep::new(
            "Vertex distance",
            format!("d = {} mm / 1000", input.vertex_distance_mm),
            d.0,
        ),
        CalculationStep::new(
            "Compensated power",
            format!("Fc = {} / (1 {} {:.4}*{})", f.0, sign, d.0, f.0),
            round_to(compensated, 2),
        ),
        CalculationStep::new(
            "Manufacturing step",
            "round to nearest 0.25 D".to_string(),
            recommended,
        ),
    ];

    let mut recommendations = Vec::new();
    if f.0.abs() < 4.0 {
        recommendations.push(Recommendation::new(
            "Significance",
            "Below +/-4.00 D the vertex correction is smaller than the fitting step and is usually ignored",
        ));
    } else {
        recommendations.push(Recommendation::new(
            "Significance",
            "At this power the vertex correction is clinically significant; use the compensated value",
        ));
    }
    if input.vertex_distance_mm == 0.0 {
        recommendations.push(Recommendation::new(
            "Fit",
            "Zero vertex distance means the power transfers unchanged",
        ));
    }

    Ok(VertexDistanceResult {
        compensated_power_d: round_to(compensated, 2),
        recommended_power_d: recommended,
        power_change_d: round_to(change, 2),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_myope_needs_less_minus_at_cornea() {
        let input = VertexDistanceInput {
            power_d: -5.0,
            vertex_distance_mm: 12.0,
            direction: ConversionDirection::SpectacleToContact,
        };
        let result = calculate(&input).unwrap();
        // -5 / (1 + 0.012*5) = -4.717
        assert!((result.compensated_power_d - -4.72).abs() < 1e-9);
        assert_eq!(result.recommended_power_d, -4.75);
        assert!(result.power_change_d > 0.0);
    }

    #[test]
    fn test_hyperope_needs_more_plus_at_cornea() {
        let input = VertexDistanceInput {
            power_d: 6.0,
            vertex_distance_mm: 12.0,
            direction: ConversionDirection::SpectacleToContact,
        };
        let result = calculate(&input).unwrap();
        // 6 / (1 - 0.072) = 6.466
        assert!((result.compensated_power_d - 6.47).abs() < 1e-9);
        assert_eq!(result.recommended_power_d, 6.5);
    }

    #[test]
    fn test_round_trip_recovers_power() {
        let forward = calculate(&VertexDistanceInput {
            power_d: -8.0,
            vertex_distance_mm: 13.0,
            direction: ConversionDirection::SpectacleToContact,
        })
        .unwrap();
        // Convert the unrounded-equivalent back; 2 dp rounding bounds drift
        let back = calculate(&VertexDistanceInput {
            power_d: forward.compensated_power_d,
            vertex_distance_mm: 13.0,
            direction: ConversionDirection::ContactToSpectacle,
        })
        .unwrap();
        assert!((back.compensated_power_d - -8.0).abs() < 0.02);
    }

    #[test]
    fn test_zero_vertex_distance_is_identity() {
        let input = VertexDistanceInput {
            power_d: -5.0,
            vertex_distance_mm: 0.0,
            direction: ConversionDirection::SpectacleToContact,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.compensated_power_d, -5.0);
        assert_eq!(result.power_change_d, 0.0);
    }

    #[test]
    fn test_low_power_flagged_insignificant() {
        let input = VertexDistanceInput {
            power_d: -2.0,
            vertex_distance_mm: 12.0,
            direction: ConversionDirection::SpectacleToContact,
        };
        let result = calculate(&input).unwrap();
        assert!(result
            .recommendations
            .iter()
            .any(|r| r.text.contains("usually ignored")));
    }

    #[test]
    fn test_out_of_range_vertex_rejected() {
        let input = VertexDistanceInput {
            power_d: -5.0,
            vertex_distance_mm: 25.0,
            direction: ConversionDirection::SpectacleToContact,
        };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_direction_serialization() {
        let input = VertexDistanceInput {
            power_d: -5.0,
            vertex_distance_mm: 12.0,
            direction: ConversionDirection::SpectacleToContact,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("spectacle_to_contact"));
    }
}
