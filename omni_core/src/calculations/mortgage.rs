//! # Mortgage Calculation
//!
//! Computes the fixed monthly payment and lifetime cost of an amortized
//! home loan.
//!
//! ## Assumptions
//!
//! - Fixed interest rate over the whole term
//! - Monthly compounding, payment due at the end of each period
//! - Taxes, insurance, and HOA dues are not part of the payment
//!
//! ## Example
//!
//! ```rust
//! use omni_core::calculations::mortgage::{MortgageInput, calculate};
//!
//! let input = MortgageInput {
//!     home_price: 300_000.0,
//!     down_payment: 60_000.0,
//!     annual_rate_pct: 6.0,
//!     term_years: 30,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.monthly_payment - 1438.92).abs() < 0.5);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters for a fixed-rate mortgage.
///
/// ## JSON Example
///
/// ```json
/// {
///   "home_price": 300000.0,
///   "down_payment": 60000.0,
///   "annual_rate_pct": 6.0,
///   "term_years": 30
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    /// Purchase price of the home
    pub home_price: f64,

    /// Cash paid up front
    pub down_payment: f64,

    /// Annual interest rate as a percentage (e.g., 6.0 for 6%)
    pub annual_rate_pct: f64,

    /// Loan term in years
    pub term_years: u32,
}

impl MortgageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.home_price <= 0.0 {
            return Err(CalcError::invalid_input(
                "home_price",
                self.home_price.to_string(),
                "Price must be positive",
            ));
        }
        if self.down_payment < 0.0 {
            return Err(CalcError::invalid_input(
                "down_payment",
                self.down_payment.to_string(),
                "Down payment cannot be negative",
            ));
        }
        if self.down_payment >= self.home_price {
            return Err(CalcError::invalid_input(
                "down_payment",
                self.down_payment.to_string(),
                "Down payment must be less than the price",
            ));
        }
        if self.annual_rate_pct < 0.0 || self.annual_rate_pct > 30.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_pct",
                self.annual_rate_pct.to_string(),
                "Rate must be between 0 and 30 percent",
            ));
        }
        if self.term_years == 0 || self.term_years > 50 {
            return Err(CalcError::invalid_input(
                "term_years",
                self.term_years.to_string(),
                "Term must be between 1 and 50 years",
            ));
        }
        Ok(())
    }

    /// Amount borrowed after the down payment.
    pub fn loan_amount(&self) -> f64 {
        self.home_price - self.down_payment
    }

    /// Down payment as a percentage of the price.
    pub fn down_payment_pct(&self) -> f64 {
        self.down_payment / self.home_price * 100.0
    }
}

/// Fixed monthly payment for an amortized loan.
///
/// Standard annuity formula `M = P*r*(1+r)^n / ((1+r)^n - 1)` with the
/// monthly rate `r` and the payment count `n`. A zero rate degenerates to
/// straight division, `M = P / n`.
///
/// Exposed for direct delegation by the auto loan calculator.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_months: u32) -> f64 {
    let n = term_months as f64;
    if annual_rate_pct == 0.0 {
        return principal / n;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

/// Results from mortgage calculation.
///
/// Currency fields are rounded to 2 decimal places for display; the totals
/// are derived from the unrounded payment.
///
/// ## JSON Example
///
/// ```json
/// {
///   "loan_amount": 240000.0,
///   "monthly_payment": 1438.92,
///   "total_paid": 518011.56,
///   "total_interest": 278011.56,
///   "steps": [],
///   "recommendations": []
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    /// Principal borrowed
    pub loan_amount: f64,

    /// Fixed monthly payment
    pub monthly_payment: f64,

    /// Total of all payments over the term
    pub total_paid: f64,

    /// Interest portion of the total
    pub total_interest: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the monthly payment and lifetime cost of a mortgage.
///
/// # Arguments
///
/// * `input` - Mortgage parameters
///
/// # Returns
///
/// * `Ok(MortgageResult)` - Calculation results
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &MortgageInput) -> CalcResult<MortgageResult> {
    input.validate()?;

    let principal = input.loan_amount();
    let n = input.term_years * 12;
    let payment = monthly_payment(principal, input.annual_rate_pct, n);
    let total_paid = payment * n as f64;
    let total_interest = total_paid - principal;

    let monthly_rate = input.annual_rate_pct / 100.0 / 12.0;
    let steps = vec![
        CalculationStep::new(
            "Loan amount",
            format!("P = {:.2} - {:.2}", input.home_price, input.down_payment),
            principal,
        ),
        CalculationStep::new(
            "Monthly rate",
            format!("r = {}% / 12 / 100", input.annual_rate_pct),
            monthly_rate,
        ),
        CalculationStep::new(
            "Number of payments",
            format!("n = {} * 12", input.term_years),
            n as f64,
        ),
        CalculationStep::new(
            "Monthly payment",
            "M = P*r*(1+r)^n / ((1+r)^n - 1)".to_string(),
            round_to(payment, 2),
        ),
        CalculationStep::new(
            "Total interest",
            format!("I = M*n - P = {:.2} - {:.2}", total_paid, principal),
            round_to(total_interest, 2),
        ),
    ];

    let mut recommendations = Vec::new();
    if input.down_payment_pct() < 20.0 {
        recommendations.push(Recommendation::new(
            "Down payment",
            "Below 20% down, most lenders require private mortgage insurance",
        ));
    }
    if total_interest > principal {
        recommendations.push(Recommendation::new(
            "Term",
            "Interest exceeds the principal over this term; a shorter term or extra principal payments would reduce it substantially",
        ));
    }
    if input.annual_rate_pct > 8.0 {
        recommendations.push(Recommendation::new(
            "Rate",
            "This rate is high by historical standards; consider shopping lenders or refinancing when rates drop",
        ));
    }

    Ok(MortgageResult {
        loan_amount: principal,
        monthly_payment: round_to(payment, 2),
        total_paid: round_to(total_paid, 2),
        total_interest: round_to(total_interest, 2),
        steps,
        recommendations,
    })
}
