//! # Gas Cost Calculation
//!
//! Fuel needed and trip cost from distance, efficiency, and price, with
//! an optional per-person split. Zero distance or zero efficiency
//! resolves to 0 rather than NaN/Infinity.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters for a trip's fuel cost.
///
/// ## JSON Example
///
/// ```json
/// {
///   "distance_miles": 350.0,
///   "fuel_efficiency_mpg": 28.0,
///   "price_per_gallon": 3.60,
///   "passengers": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasCostInput {
    /// Trip distance in miles
    pub distance_miles: f64,

    /// Vehicle efficiency in miles per gallon
    pub fuel_efficiency_mpg: f64,

    /// Fuel price per gallon
    pub price_per_gallon: f64,

    /// People sharing the cost; 0 or 1 means no split
    #[serde(default)]
    pub passengers: u32,
}

impl GasCostInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (name, value) in [
            ("distance_miles", self.distance_miles),
            ("fuel_efficiency_mpg", self.fuel_efficiency_mpg),
            ("price_per_gallon", self.price_per_gallon),
        ] {
            if value < 0.0 {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Value cannot be negative",
                ));
            }
        }
        Ok(())
    }
}

/// Results from gas cost calculation. Currency fields are rounded to 2
/// decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasCostResult {
    /// Gallons of fuel the trip needs; 0 when efficiency is 0
    pub gallons_needed: f64,

    /// Total fuel cost
    pub total_cost: f64,

    /// Cost per mile; 0 when the distance is 0
    pub cost_per_mile: f64,

    /// Each person's share of the total
    pub cost_per_person: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate fuel use and trip cost.
pub fn calculate(input: &GasCostInput) -> CalcResult<GasCostResult> {
    input.validate()?;

    let gallons = if input.fuel_efficiency_mpg == 0.0 {
        0.0
    } else {
        input.distance_miles / input.fuel_efficiency_mpg
    };
    let total = gallons * input.price_per_gallon;
    let per_mile = if input.distance_miles == 0.0 {
        0.0
    } else {
        total / input.distance_miles
    };
    let splits = input.passengers.max(1) as f64;
    let per_person = total / splits;

    let steps = vec![
        CalculationStep::new(
            "Fuel needed",
            format!("g = {} / {}", input.distance_miles, input.fuel_efficiency_mpg),
            round_to(gallons, 2),
        ),
        CalculationStep::new(
            "Total cost",
            format!("c = g * {:.2}", input.price_per_gallon),
            round_to(total, 2),
        ),
        CalculationStep::new(
            "Cost per mile",
            format!("c / {}", input.distance_miles),
            round_to(per_mile, 2),
        ),
    ];

    let mut recommendations = Vec::new();
    if input.fuel_efficiency_mpg > 0.0 && input.fuel_efficiency_mpg < 20.0 {
        recommendations.push(Recommendation::new(
            "Efficiency",
            "Below 20 mpg the fuel bill dominates long trips; steady highway speeds help",
        ));
    }
    if input.passengers > 1 {
        recommendations.push(Recommendation::new(
            "Split",
            format!("Splitting {} ways keeps each share at the per-person figure", input.passengers),
        ));
    }
    if recommendations.is_empty() {
        recommendations.push(Recommendation::new(
            "Planning",
            "Fill up before the trip; highway-adjacent stations typically price higher",
        ));
    }

    Ok(GasCostResult {
        gallons_needed: round_to(gallons, 2),
        total_cost: round_to(total, 2),
        cost_per_mile: round_to(per_mile, 2),
        cost_per_person: round_to(per_person, 2),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_trip() {
        let input = GasCostInput {
            distance_miles: 350.0,
            fuel_efficiency_mpg: 28.0,
            price_per_gallon: 3.60,
            passengers: 1,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.gallons_needed, 12.5);
        assert_eq!(result.total_cost, 45.0);
        assert!((result.cost_per_mile - 0.13).abs() < 1e-9);
    }

    #[test]
    fn test_zero_efficiency_is_zero_not_infinity() {
        let input = GasCostInput {
            distance_miles: 100.0,
            fuel_efficiency_mpg: 0.0,
            price_per_gallon: 3.50,
            passengers: 0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.gallons_needed, 0.0);
        assert_eq!(result.total_cost, 0.0);
        assert!(result.cost_per_mile.is_finite());
    }

    #[test]
    fn test_zero_distance_is_zero_not_nan() {
        let input = GasCostInput {
            distance_miles: 0.0,
            fuel_efficiency_mpg: 30.0,
            price_per_gallon: 3.50,
            passengers: 0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.cost_per_mile, 0.0);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_cost_split() {
        let input = GasCostInput {
            distance_miles: 300.0,
            fuel_efficiency_mpg: 30.0,
            price_per_gallon: 4.00,
            passengers: 4,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.total_cost, 40.0);
        assert_eq!(result.cost_per_person, 10.0);
    }

    #[test]
    fn test_passengers_default_means_no_split() {
        let input: GasCostInput = serde_json::from_str(
            r#"{ "distance_miles": 300.0, "fuel_efficiency_mpg": 30.0, "price_per_gallon": 4.0 }"#,
        )
        .unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.cost_per_person, result.total_cost);
    }

    #[test]
    fn test_negative_distance_rejected() {
        let input = GasCostInput {
            distance_miles: -5.0,
            fuel_efficiency_mpg: 30.0,
            price_per_gallon: 3.50,
            passengers: 1,
        };
        assert!(calculate(&input).is_err());
    }
}
