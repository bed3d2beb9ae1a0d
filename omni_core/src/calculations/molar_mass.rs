//! # Molar Mass Calculation
//!
//! Total molar mass of a compound as the weighted sum of per-element
//! atomic mass times count, a per-element composition breakdown, and the
//! empirical formula obtained by reducing the counts with their greatest
//! common divisor.
//!
//! Element data comes from the static table in [`crate::elements`].
//!
//! ## Example
//!
//! ```rust
//! use omni_core::calculations::molar_mass::{MolarMassInput, ElementCount, calculate};
//!
//! let input = MolarMassInput {
//!     components: vec![
//!         ElementCount { symbol: "H".to_string(), count: 2 },
//!         ElementCount { symbol: "O".to_string(), count: 1 },
//!     ],
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.total_mass - 18.015).abs() < 1e-9);
//! assert_eq!(result.empirical_formula, "H2O");
//! ```

use serde::{Deserialize, Serialize};

use crate::elements;
use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// One element entry of the compound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCount {
    /// Chemical symbol, any capitalization
    pub symbol: String,

    /// Number of atoms of this element
    pub count: u32,
}

/// Input parameters for molar mass.
///
/// ## JSON Example
///
/// ```json
/// {
///   "components": [
///     { "symbol": "C", "count": 6 },
///     { "symbol": "H", "count": 12 },
///     { "symbol": "O", "count": 6 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MolarMassInput {
    /// Elements of the compound, in formula order
    pub components: Vec<ElementCount>,
}

impl MolarMassInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.components.is_empty() {
            return Err(CalcError::missing_field("components"));
        }
        for component in &self.components {
            if component.count == 0 {
                return Err(CalcError::invalid_input(
                    "count",
                    component.count.to_string(),
                    format!("Count for {} must be at least 1", component.symbol),
                ));
            }
        }
        Ok(())
    }
}

/// Iterative greatest common divisor.
fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Render a formula string from (symbol, count) pairs; count 1 is omitted.
fn format_formula<'a>(parts: impl Iterator<Item = (&'a str, u32)>) -> String {
    let mut formula = String::new();
    for (symbol, count) in parts {
        formula.push_str(symbol);
        if count > 1 {
            formula.push_str(&count.to_string());
        }
    }
    formula
}

/// One element's share of the compound mass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementShare {
    /// Canonical symbol
    pub symbol: String,

    /// Element name
    pub name: String,

    /// Atom count
    pub count: u32,

    /// Mass contribution (g/mol), rounded to 3 decimals
    pub mass: f64,

    /// Share of the total mass, percent, rounded to 2 decimals
    pub mass_percent: f64,
}

/// Results from molar mass calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MolarMassResult {
    /// Total molar mass (g/mol), rounded to 3 decimals
    pub total_mass: f64,

    /// The formula as entered, canonicalized symbols
    pub molecular_formula: String,

    /// GCD-reduced formula
    pub empirical_formula: String,

    /// Per-element breakdown, in input order
    pub composition: Vec<ElementShare>,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the molar mass, composition, and empirical formula.
pub fn calculate(input: &MolarMassInput) -> CalcResult<MolarMassResult> {
    input.validate()?;

    // Resolve every symbol first so an unknown element fails before any
    // partial result is built.
    let mut resolved = Vec::with_capacity(input.components.len());
    for component in &input.components {
        let element = elements::lookup(&component.symbol)?;
        resolved.push((element, component.count));
    }

    let total: f64 = resolved.iter().map(|(e, n)| e.atomic_mass * *n as f64).sum();

    let mut steps = Vec::with_capacity(resolved.len() + 1);
    let mut composition = Vec::with_capacity(resolved.len());
    for (element, count) in &resolved {
        let contribution = element.atomic_mass * *count as f64;
        steps.push(CalculationStep::new(
            element.name,
            format!("{} x {}", element.atomic_mass, count),
            round_to(contribution, 3),
        ));
        composition.push(ElementShare {
            symbol: element.symbol.to_string(),
            name: element.name.to_string(),
            count: *count,
            mass: round_to(contribution, 3),
            mass_percent: round_to(contribution / total * 100.0, 2),
        });
    }
    steps.push(CalculationStep::new(
        "Total molar mass",
        "M = sum(atomic mass x count)".to_string(),
        round_to(total, 3),
    ));

    let divisor = resolved.iter().fold(0, |acc, (_, count)| gcd(acc, *count));
    let molecular_formula = format_formula(resolved.iter().map(|(e, n)| (e.symbol, *n)));
    let empirical_formula = format_formula(resolved.iter().map(|(e, n)| (e.symbol, *n / divisor)));

    let mut recommendations = Vec::new();
    if empirical_formula != molecular_formula {
        recommendations.push(Recommendation::new(
            "Formula",
            format!(
                "The counts share a factor of {}; the empirical formula {} is the reduced form",
                divisor, empirical_formula
            ),
        ));
    } else {
        recommendations.push(Recommendation::new(
            "Formula",
            "The formula is already in lowest terms; molecular and empirical forms match",
        ));
    }

    Ok(MolarMassResult {
        total_mass: round_to(total, 3),
        molecular_formula,
        empirical_formula,
        composition,
        steps,
        recommendations,
    })
}
