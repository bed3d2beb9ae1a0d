//! # Slope Calculation
//!
//! Slope, angle, line equation, distance, and midpoint for the line
//! through two points.
//!
//! A vertical line (zero horizontal delta) has no slope; the result
//! carries `None` there and the equation degrades to `x = c`. The
//! perpendicular slope is the negative reciprocal and is likewise `None`
//! when the original slope is zero (a horizontal line's perpendicular is
//! vertical).
//!
//! ## Example
//!
//! ```rust
//! use omni_core::calculations::slope::{SlopeInput, calculate};
//!
//! let input = SlopeInput { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.slope, Some(1.0));
//! assert_eq!(result.equation, "y = 1.00x +0.00");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters: two points in the plane.
///
/// ## JSON Example
///
/// ```json
/// { "x1": 0.0, "y1": 0.0, "x2": 3.0, "y2": 4.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlopeInput {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl SlopeInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.x1 == self.x2 && self.y1 == self.y2 {
            return Err(CalcError::invalid_input(
                "x2",
                format!("({}, {})", self.x2, self.y2),
                "The two points must be distinct",
            ));
        }
        Ok(())
    }
}

/// Results from slope calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlopeResult {
    /// Slope of the line; `None` for a vertical line
    pub slope: Option<f64>,

    /// Y-intercept; `None` for a vertical line
    pub y_intercept: Option<f64>,

    /// Inclination from the positive x-axis, degrees (90 for vertical)
    pub angle_deg: f64,

    /// Line equation formatted for display
    pub equation: String,

    /// Slope of the perpendicular line; `None` when the line is horizontal
    pub perpendicular_slope: Option<f64>,

    /// Distance between the two points
    pub distance: f64,

    /// Midpoint x coordinate
    pub midpoint_x: f64,

    /// Midpoint y coordinate
    pub midpoint_y: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate slope, angle, equation, and related line properties.
pub fn calculate(input: &SlopeInput) -> CalcResult<SlopeResult> {
    input.validate()?;

    let dx = input.x2 - input.x1;
    let dy = input.y2 - input.y1;
    let distance = dx.hypot(dy);
    let midpoint_x = (input.x1 + input.x2) / 2.0;
    let midpoint_y = (input.y1 + input.y2) / 2.0;

    let mut steps = vec![
        CalculationStep::new(
            "Horizontal delta",
            format!("dx = {} - {}", input.x2, input.x1),
            dx,
        ),
        CalculationStep::new(
            "Vertical delta",
            format!("dy = {} - {}", input.y2, input.y1),
            dy,
        ),
    ];

    if dx == 0.0 {
        // Vertical line: slope undefined
        let equation = format!("x = {}", input.x1);
        // Step value stays representable; the formula text carries the
        // "undefined" outcome.
        steps.push(CalculationStep::new(
            "Slope",
            "dx = 0, slope undefined (vertical line)".to_string(),
            0.0,
        ));
        let recommendations = vec![Recommendation::new(
            "Interpretation",
            "The line is vertical; every point shares the same x coordinate",
        )];
        return Ok(SlopeResult {
            slope: None,
            y_intercept: None,
            angle_deg: 90.0,
            equation,
            // Perpendicular to vertical is horizontal
            perpendicular_slope: Some(0.0),
            distance,
            midpoint_x,
            midpoint_y,
            steps,
            recommendations,
        });
    }

    let slope = dy / dx;
    let intercept = input.y1 - slope * input.x1;
    let angle_deg = slope.atan().to_degrees();
    let equation = format!("y = {:.2}x {:+.2}", slope, intercept);
    let perpendicular = if slope == 0.0 { None } else { Some(-1.0 / slope) };

    steps.push(CalculationStep::new(
        "Slope",
        format!("m = {} / {}", dy, dx),
        slope,
    ));
    steps.push(CalculationStep::new(
        "Y-intercept",
        format!("b = {} - {} * {}", input.y1, slope, input.x1),
        intercept,
    ));
    steps.push(CalculationStep::new(
        "Angle",
        "theta = atan(m)".to_string(),
        round_to(angle_deg, 2),
    ));

    let interpretation = if slope == 0.0 {
        "The line is horizontal; y never changes".to_string()
    } else if slope > 0.0 {
        format!("The line rises {:.2} units for every unit of run", slope)
    } else {
        format!("The line falls {:.2} units for every unit of run", -slope)
    };
    let recommendations = vec![Recommendation::new("Interpretation", interpretation)];

    Ok(SlopeResult {
        slope: Some(slope),
        y_intercept: Some(intercept),
        angle_deg,
        equation,
        perpendicular_slope: perpendicular,
        distance,
        midpoint_x,
        midpoint_y,
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_slope() {
        let input = SlopeInput { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.slope, Some(1.0));
        assert!((result.angle_deg - 45.0).abs() < 1e-9);
        assert_eq!(result.equation, "y = 1.00x +0.00");
        assert_eq!(result.perpendicular_slope, Some(-1.0));
    }

    #[test]
    fn test_vertical_line() {
        let input = SlopeInput { x1: 0.0, y1: 0.0, x2: 0.0, y2: 5.0 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.slope, None);
        assert_eq!(result.angle_deg, 90.0);
        assert_eq!(result.equation, "x = 0");
        assert_eq!(result.perpendicular_slope, Some(0.0));
        assert_eq!(result.distance, 5.0);
    }

    #[test]
    fn test_horizontal_line() {
        let input = SlopeInput { x1: 1.0, y1: 2.0, x2: 5.0, y2: 2.0 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.slope, Some(0.0));
        assert_eq!(result.angle_deg, 0.0);
        assert_eq!(result.perpendicular_slope, None);
    }

    #[test]
    fn test_negative_intercept_formatting() {
        let input = SlopeInput { x1: 0.0, y1: -2.0, x2: 1.0, y2: -1.0 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.equation, "y = 1.00x -2.00");
    }

    #[test]
    fn test_distance_and_midpoint() {
        let input = SlopeInput { x1: 0.0, y1: 0.0, x2: 3.0, y2: 4.0 };
        let result = calculate(&input).unwrap();
        assert_eq!(result.distance, 5.0);
        assert_eq!(result.midpoint_x, 1.5);
        assert_eq!(result.midpoint_y, 2.0);
    }

    #[test]
    fn test_identical_points_rejected() {
        let input = SlopeInput { x1: 2.0, y1: 3.0, x2: 2.0, y2: 3.0 };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_deterministic() {
        let input = SlopeInput { x1: -1.5, y1: 2.0, x2: 4.0, y2: -3.25 };
        let a = calculate(&input).unwrap();
        let b = calculate(&input).unwrap();
        assert_eq!(a.equation, b.equation);
        assert_eq!(a.steps, b.steps);
    }
}
