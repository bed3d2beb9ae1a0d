//! # Body Mass Index Calculation
//!
//! BMI = weight (kg) / height (m)², with category buckets per the WHO
//! adult classification. Imperial inputs are converted through the unit
//! wrappers before the formula is applied.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};
use crate::units::{Centimeters, Inches, Kilograms, Meters, Pounds};

/// Which measurement system the weight and height fields use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Weight in kilograms, height in centimeters
    Metric,
    /// Weight in pounds, height in inches
    Imperial,
}

/// WHO adult BMI classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Bucket a BMI value: <18.5, <25, <30, >=30.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Input parameters for BMI.
///
/// ## JSON Example
///
/// ```json
/// { "unit_system": "imperial", "weight": 154.0, "height": 70.0 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    /// Measurement system for the two fields below
    pub unit_system: UnitSystem,

    /// Body weight (kg or lb per `unit_system`)
    pub weight: f64,

    /// Height (cm or in per `unit_system`)
    pub height: f64,
}

impl BmiInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.weight <= 0.0 {
            return Err(CalcError::invalid_input(
                "weight",
                self.weight.to_string(),
                "Weight must be positive",
            ));
        }
        if self.height <= 0.0 {
            return Err(CalcError::invalid_input(
                "height",
                self.height.to_string(),
                "Height must be positive",
            ));
        }
        Ok(())
    }

    /// Weight in kilograms regardless of input system.
    pub fn weight_kg(&self) -> Kilograms {
        match self.unit_system {
            UnitSystem::Metric => Kilograms(self.weight),
            UnitSystem::Imperial => Pounds(self.weight).into(),
        }
    }

    /// Height in meters regardless of input system.
    pub fn height_m(&self) -> Meters {
        match self.unit_system {
            UnitSystem::Metric => Centimeters(self.height).into(),
            UnitSystem::Imperial => Inches(self.height).into(),
        }
    }
}

/// Results from BMI calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiResult {
    /// Body mass index, rounded to 1 decimal place
    pub bmi: f64,

    /// WHO classification bucket
    pub category: BmiCategory,

    /// Lower bound of the healthy weight range, in the input unit system
    pub healthy_weight_min: f64,

    /// Upper bound of the healthy weight range, in the input unit system
    pub healthy_weight_max: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate BMI, category, and the healthy weight range for the height.
pub fn calculate(input: &BmiInput) -> CalcResult<BmiResult> {
    input.validate()?;

    let kg = input.weight_kg();
    let m = input.height_m();
    let bmi = kg.0 / (m.0 * m.0);
    let category = BmiCategory::from_bmi(bmi);

    // Healthy range back-solved from the Normal bucket bounds, reported in
    // the caller's unit system.
    let min_kg = Kilograms(18.5 * m.0 * m.0);
    let max_kg = Kilograms(24.9 * m.0 * m.0);
    let (healthy_min, healthy_max) = match input.unit_system {
        UnitSystem::Metric => (min_kg.0, max_kg.0),
        UnitSystem::Imperial => (Pounds::from(min_kg).0, Pounds::from(max_kg).0),
    };

    let steps = vec![
        CalculationStep::new("Weight", format!("w = {:.2} kg", kg.0), round_to(kg.0, 2)),
        CalculationStep::new("Height", format!("h = {:.3} m", m.0), round_to(m.0, 3)),
        CalculationStep::new("Body mass index", "BMI = w / h^2".to_string(), round_to(bmi, 1)),
    ];

    let recommendations = vec![match category {
        BmiCategory::Underweight => Recommendation::new(
            "Health",
            "BMI is below the healthy range; consider a calorie surplus and strength training",
        ),
        BmiCategory::Normal => {
            Recommendation::new("Health", "BMI is within the healthy range; maintain current habits")
        }
        BmiCategory::Overweight => Recommendation::new(
            "Health",
            "BMI is above the healthy range; a modest calorie deficit and regular activity help",
        ),
        BmiCategory::Obese => Recommendation::new(
            "Health",
            "BMI is well above the healthy range; discuss a weight plan with a clinician",
        ),
    }];

    Ok(BmiResult {
        bmi: round_to(bmi, 1),
        category,
        healthy_weight_min: round_to(healthy_min, 1),
        healthy_weight_max: round_to(healthy_max, 1),
        steps,
        recommendations,
    })
}
