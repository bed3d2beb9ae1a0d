//! # Centroid Calculation
//!
//! Centroid coordinates and area for a planar shape. The shape is a
//! tagged enum, so each variant carries exactly the geometry it needs and
//! a structurally incomplete shape cannot be expressed; what remains to
//! check is dimension positivity and degenerate (collinear) triangles.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// A planar shape with the geometry its centroid formula needs.
///
/// ## JSON Examples
///
/// ```json
/// { "shape": "Triangle", "x1": 0.0, "y1": 0.0, "x2": 6.0, "y2": 0.0, "x3": 0.0, "y3": 9.0 }
/// ```
///
/// ```json
/// { "shape": "Circle", "x": 2.0, "y": 3.0, "radius": 1.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape")]
pub enum Shape {
    /// Three vertices
    Triangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
    },
    /// Axis-aligned, anchored at the bottom-left corner
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Centered at (x, y)
    Circle { x: f64, y: f64, radius: f64 },
    /// Isosceles, bottom edge anchored at (x, y), top edge parallel
    Trapezoid {
        x: f64,
        y: f64,
        bottom_width: f64,
        top_width: f64,
        height: f64,
    },
}

impl Shape {
    /// Shape kind as display text.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Triangle { .. } => "Triangle",
            Shape::Rectangle { .. } => "Rectangle",
            Shape::Circle { .. } => "Circle",
            Shape::Trapezoid { .. } => "Trapezoid",
        }
    }

    /// Validate dimension fields.
    pub fn validate(&self) -> CalcResult<()> {
        match self {
            Shape::Triangle { .. } => Ok(()),
            Shape::Rectangle { width, height, .. } => {
                if *width <= 0.0 || *height <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "width/height",
                        format!("{} x {}", width, height),
                        "Rectangle dimensions must be positive",
                    ));
                }
                Ok(())
            }
            Shape::Circle { radius, .. } => {
                if *radius <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "radius",
                        radius.to_string(),
                        "Radius must be positive",
                    ));
                }
                Ok(())
            }
            Shape::Trapezoid {
                bottom_width,
                top_width,
                height,
                ..
            } => {
                if *bottom_width <= 0.0 || *height <= 0.0 {
                    return Err(CalcError::invalid_input(
                        "bottom_width/height",
                        format!("{} x {}", bottom_width, height),
                        "Trapezoid base and height must be positive",
                    ));
                }
                if *top_width < 0.0 {
                    return Err(CalcError::invalid_input(
                        "top_width",
                        top_width.to_string(),
                        "Top width cannot be negative",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Input parameters for the centroid calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidInput {
    /// The shape to evaluate
    #[serde(flatten)]
    pub shape: Shape,
}

/// Results from centroid calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentroidResult {
    /// Shape kind as display text
    pub shape_type: String,

    /// Centroid x coordinate
    pub centroid_x: f64,

    /// Centroid y coordinate
    pub centroid_y: f64,

    /// Enclosed area
    pub area: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the centroid and area of a shape.
pub fn calculate(input: &CentroidInput) -> CalcResult<CentroidResult> {
    input.shape.validate()?;

    let (cx, cy, area, steps) = match &input.shape {
        Shape::Triangle { x1, y1, x2, y2, x3, y3 } => {
            // Shoelace formula; zero area means collinear vertices
            let area = ((x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)) / 2.0).abs();
            if area == 0.0 {
                return Err(CalcError::calculation_failed(
                    "centroid",
                    "Triangle vertices are collinear",
                ));
            }
            let cx = (x1 + x2 + x3) / 3.0;
            let cy = (y1 + y2 + y3) / 3.0;
            let steps = vec![
                CalculationStep::new(
                    "Centroid x",
                    format!("cx = ({} + {} + {}) / 3", x1, x2, x3),
                    cx,
                ),
                CalculationStep::new(
                    "Centroid y",
                    format!("cy = ({} + {} + {}) / 3", y1, y2, y3),
                    cy,
                ),
                CalculationStep::new("Area", "A = |shoelace| / 2".to_string(), round_to(area, 4)),
            ];
            (cx, cy, area, steps)
        }
        Shape::Rectangle { x, y, width, height } => {
            let cx = x + width / 2.0;
            let cy = y + height / 2.0;
            let area = width * height;
            let steps = vec![
                CalculationStep::new("Centroid x", format!("cx = {} + {} / 2", x, width), cx),
                CalculationStep::new("Centroid y", format!("cy = {} + {} / 2", y, height), cy),
                CalculationStep::new("Area", format!("A = {} * {}", width, height), round_to(area, 4)),
            ];
            (cx, cy, area, steps)
        }
        Shape::Circle { x, y, radius } => {
            let area = std::f64::consts::PI * radius * radius;
            let steps = vec![
                CalculationStep::new("Centroid", "center of the circle".to_string(), 0.0),
                CalculationStep::new("Area", format!("A = pi * {}^2", radius), round_to(area, 4)),
            ];
            (*x, *y, area, steps)
        }
        Shape::Trapezoid { x, y, bottom_width, top_width, height } => {
            let a = *top_width;
            let b = *bottom_width;
            let h = *height;
            // Symmetric about the vertical through the base midpoint
            let cx = x + b / 2.0;
            let cy = y + h * (b + 2.0 * a) / (3.0 * (a + b));
            let area = (a + b) / 2.0 * h;
            let steps = vec![
                CalculationStep::new("Centroid x", format!("cx = {} + {} / 2", x, b), cx),
                CalculationStep::new(
                    "Centroid y",
                    format!("cy = {} + {}*({} + 2*{}) / (3*({} + {}))", y, h, b, a, a, b),
                    round_to(cy, 4),
                ),
                CalculationStep::new("Area", format!("A = ({} + {}) / 2 * {}", a, b, h), round_to(area, 4)),
            ];
            (cx, cy, area, steps)
        }
    };

    let note = match &input.shape {
        Shape::Rectangle { .. } | Shape::Circle { .. } => {
            "The centroid coincides with the center of symmetry"
        }
        Shape::Triangle { .. } => "The centroid sits at the intersection of the three medians",
        Shape::Trapezoid { .. } => "The centroid sits closer to the longer parallel side",
    };

    Ok(CentroidResult {
        shape_type: input.shape.kind().to_string(),
        centroid_x: cx,
        centroid_y: cy,
        area,
        steps,
        recommendations: vec![Recommendation::new("Geometry", note)],
    })
}
