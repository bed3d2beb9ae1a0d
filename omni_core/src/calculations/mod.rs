//! # Calculator Catalog
//!
//! This module contains all calculator types. Each calculator follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Every result carries its primary values plus ordered calculation steps
//! and recommendation entries (see [`crate::report`]). No calculator calls
//! another; the one sanctioned exception is [`auto_loan`], which delegates
//! its amortization directly to [`mortgage`].
//!
//! ## Available Calculators
//!
//! - [`mortgage`] / [`auto_loan`] - Amortized loan payments
//! - [`bmi`] - Body mass index and healthy range
//! - [`blackjack`] - Hand total, basic strategy, fixed odds tables
//! - [`moon_phase`] - Synodic cycle age, phase name, illumination
//! - [`slope`] - Line through two points
//! - [`golden_ratio`] - Scaling by phi and a Fibonacci-style sequence
//! - [`acceptance_sampling`] - Binomial sampling plan risks and OC curve
//! - [`molar_mass`] / [`mole`] - Compound mass and the molarity triangle
//! - [`batting_average`] - AVG/OBP/SLG/OPS
//! - [`typing_speed`] - Gross and net WPM
//! - [`gas_cost`] - Trip fuel cost
//! - [`centroid`] - Centroid and area of planar shapes
//! - [`vertex_distance`] - Optical power compensation

pub mod acceptance_sampling;
pub mod auto_loan;
pub mod batting_average;
pub mod blackjack;
pub mod bmi;
pub mod centroid;
pub mod gas_cost;
pub mod golden_ratio;
pub mod molar_mass;
pub mod mole;
pub mod moon_phase;
pub mod mortgage;
pub mod slope;
pub mod typing_speed;
pub mod vertex_distance;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

// Re-export commonly used types
pub use acceptance_sampling::{AcceptanceSamplingInput, AcceptanceSamplingResult};
pub use auto_loan::{AutoLoanInput, AutoLoanResult};
pub use batting_average::{BattingAverageInput, BattingAverageResult};
pub use blackjack::{BlackjackInput, BlackjackResult};
pub use bmi::{BmiInput, BmiResult};
pub use centroid::{CentroidInput, CentroidResult};
pub use gas_cost::{GasCostInput, GasCostResult};
pub use golden_ratio::{GoldenRatioInput, GoldenRatioResult};
pub use molar_mass::{MolarMassInput, MolarMassResult};
pub use mole::{MoleInput, MoleResult};
pub use moon_phase::{MoonPhaseInput, MoonPhaseResult};
pub use mortgage::{MortgageInput, MortgageResult};
pub use slope::{SlopeInput, SlopeResult};
pub use typing_speed::{TypingSpeedInput, TypingSpeedResult};
pub use vertex_distance::{VertexDistanceInput, VertexDistanceResult};

/// Enum wrapper for all calculator inputs.
///
/// This allows a single JSON entry point to dispatch to any calculator
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    Mortgage(MortgageInput),
    AutoLoan(AutoLoanInput),
    Bmi(BmiInput),
    Blackjack(BlackjackInput),
    MoonPhase(MoonPhaseInput),
    Slope(SlopeInput),
    GoldenRatio(GoldenRatioInput),
    AcceptanceSampling(AcceptanceSamplingInput),
    MolarMass(MolarMassInput),
    Mole(MoleInput),
    BattingAverage(BattingAverageInput),
    TypingSpeed(TypingSpeedInput),
    GasCost(GasCostInput),
    Centroid(CentroidInput),
    VertexDistance(VertexDistanceInput),
}

/// Enum wrapper for all calculator results, mirroring [`CalculationItem`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Mortgage(MortgageResult),
    AutoLoan(AutoLoanResult),
    Bmi(BmiResult),
    Blackjack(BlackjackResult),
    MoonPhase(MoonPhaseResult),
    Slope(SlopeResult),
    GoldenRatio(GoldenRatioResult),
    AcceptanceSampling(AcceptanceSamplingResult),
    MolarMass(MolarMassResult),
    Mole(MoleResult),
    BattingAverage(BattingAverageResult),
    TypingSpeed(TypingSpeedResult),
    GasCost(GasCostResult),
    Centroid(CentroidResult),
    VertexDistance(VertexDistanceResult),
}

impl CalculationItem {
    /// Get the calculator type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Mortgage(_) => "Mortgage",
            CalculationItem::AutoLoan(_) => "AutoLoan",
            CalculationItem::Bmi(_) => "Bmi",
            CalculationItem::Blackjack(_) => "Blackjack",
            CalculationItem::MoonPhase(_) => "MoonPhase",
            CalculationItem::Slope(_) => "Slope",
            CalculationItem::GoldenRatio(_) => "GoldenRatio",
            CalculationItem::AcceptanceSampling(_) => "AcceptanceSampling",
            CalculationItem::MolarMass(_) => "MolarMass",
            CalculationItem::Mole(_) => "Mole",
            CalculationItem::BattingAverage(_) => "BattingAverage",
            CalculationItem::TypingSpeed(_) => "TypingSpeed",
            CalculationItem::GasCost(_) => "GasCost",
            CalculationItem::Centroid(_) => "Centroid",
            CalculationItem::VertexDistance(_) => "VertexDistance",
        }
    }

    /// Get a human-readable name for UI listings
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationItem::Mortgage(_) => "Mortgage Payment",
            CalculationItem::AutoLoan(_) => "Auto Loan",
            CalculationItem::Bmi(_) => "Body Mass Index",
            CalculationItem::Blackjack(_) => "Blackjack Odds",
            CalculationItem::MoonPhase(_) => "Moon Phase",
            CalculationItem::Slope(_) => "Slope",
            CalculationItem::GoldenRatio(_) => "Golden Ratio",
            CalculationItem::AcceptanceSampling(_) => "Acceptance Sampling",
            CalculationItem::MolarMass(_) => "Molar Mass",
            CalculationItem::Mole(_) => "Molarity",
            CalculationItem::BattingAverage(_) => "Batting Average",
            CalculationItem::TypingSpeed(_) => "Typing Speed",
            CalculationItem::GasCost(_) => "Gas Cost",
            CalculationItem::Centroid(_) => "Centroid",
            CalculationItem::VertexDistance(_) => "Vertex Distance",
        }
    }

    /// Run the wrapped calculator and wrap its result.
    pub fn calculate(&self) -> CalcResult<CalculationOutput> {
        Ok(match self {
            CalculationItem::Mortgage(input) => {
                CalculationOutput::Mortgage(mortgage::calculate(input)?)
            }
            CalculationItem::AutoLoan(input) => {
                CalculationOutput::AutoLoan(auto_loan::calculate(input)?)
            }
            CalculationItem::Bmi(input) => CalculationOutput::Bmi(bmi::calculate(input)?),
            CalculationItem::Blackjack(input) => {
                CalculationOutput::Blackjack(blackjack::calculate(input)?)
            }
            CalculationItem::MoonPhase(input) => {
                CalculationOutput::MoonPhase(moon_phase::calculate(input)?)
            }
            CalculationItem::Slope(input) => CalculationOutput::Slope(slope::calculate(input)?),
            CalculationItem::GoldenRatio(input) => {
                CalculationOutput::GoldenRatio(golden_ratio::calculate(input)?)
            }
            CalculationItem::AcceptanceSampling(input) => {
                CalculationOutput::AcceptanceSampling(acceptance_sampling::calculate(input)?)
            }
            CalculationItem::MolarMass(input) => {
                CalculationOutput::MolarMass(molar_mass::calculate(input)?)
            }
            CalculationItem::Mole(input) => CalculationOutput::Mole(mole::calculate(input)?),
            CalculationItem::BattingAverage(input) => {
                CalculationOutput::BattingAverage(batting_average::calculate(input)?)
            }
            CalculationItem::TypingSpeed(input) => {
                CalculationOutput::TypingSpeed(typing_speed::calculate(input)?)
            }
            CalculationItem::GasCost(input) => {
                CalculationOutput::GasCost(gas_cost::calculate(input)?)
            }
            CalculationItem::Centroid(input) => {
                CalculationOutput::Centroid(centroid::calculate(input)?)
            }
            CalculationItem::VertexDistance(input) => {
                CalculationOutput::VertexDistance(vertex_distance::calculate(input)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_matches_direct_call() {
        let input = SlopeInput { x1: 0.0, y1: 0.0, x2: 1.0, y2: 1.0 };
        let direct = slope::calculate(&input).unwrap();
        let item = CalculationItem::Slope(input);
        match item.calculate().unwrap() {
            CalculationOutput::Slope(result) => assert_eq!(result.equation, direct.equation),
            other => panic!("wrong output variant: {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_propagates_errors() {
        let item = CalculationItem::Mole(MoleInput {
            calculation_type: mole::MoleCalculationType::Molarity,
            moles: Some(1.0),
            volume_l: None,
            molarity: None,
        });
        assert!(item.calculate().is_err());
    }

    #[test]
    fn test_item_json_tag() {
        let item = CalculationItem::GoldenRatio(GoldenRatioInput {
            value: 1.0,
            direction: golden_ratio::Direction::Up,
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"GoldenRatio\""));
        let roundtrip: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.calc_type(), "GoldenRatio");
    }

    #[test]
    fn test_item_json_dispatch_from_raw_string() {
        let json = r#"{
            "type": "Bmi",
            "unit_system": "metric",
            "weight": 70.0,
            "height": 175.0
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert!(item.calculate().is_ok());
    }
}
