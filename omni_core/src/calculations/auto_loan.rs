//! # Auto Loan Calculation
//!
//! Computes the amount financed and monthly payment for a vehicle loan.
//! The amortization itself delegates directly to
//! [`mortgage::monthly_payment`](crate::calculations::mortgage::monthly_payment);
//! only the financed-amount bookkeeping (trade-in, sales tax) lives here.
//!
//! Sales tax is applied to the price net of trade-in, which matches most
//! US states' treatment of trade-in credit.

use serde::{Deserialize, Serialize};

use crate::calculations::mortgage;
use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters for an auto loan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "vehicle_price": 32000.0,
///   "down_payment": 3000.0,
///   "trade_in_value": 5000.0,
///   "sales_tax_pct": 7.0,
///   "annual_rate_pct": 7.5,
///   "term_months": 60
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanInput {
    /// Negotiated vehicle price
    pub vehicle_price: f64,

    /// Cash paid up front
    pub down_payment: f64,

    /// Credit for the traded-in vehicle
    pub trade_in_value: f64,

    /// Sales tax rate as a percentage
    pub sales_tax_pct: f64,

    /// Annual interest rate as a percentage
    pub annual_rate_pct: f64,

    /// Loan term in months
    pub term_months: u32,
}

impl AutoLoanInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.vehicle_price <= 0.0 {
            return Err(CalcError::invalid_input(
                "vehicle_price",
                self.vehicle_price.to_string(),
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
        if self.trade_in_value < 0.0 {
            return Err(CalcError::invalid_input(
                "trade_in_value",
                self.trade_in_value.to_string(),
                "Trade-in value cannot be negative",
            ));
        }
        if self.sales_tax_pct < 0.0 || self.sales_tax_pct > 25.0 {
            return Err(CalcError::invalid_input(
                "sales_tax_pct",
                self.sales_tax_pct.to_string(),
                "Sales tax must be between 0 and 25 percent",
            ));
        }
        if self.annual_rate_pct < 0.0 || self.annual_rate_pct > 30.0 {
            return Err(CalcError::invalid_input(
                "annual_rate_pct",
                self.annual_rate_pct.to_string(),
                "Rate must be between 0 and 30 percent",
            ));
        }
        if self.term_months == 0 || self.term_months > 120 {
            return Err(CalcError::invalid_input(
                "term_months",
                self.term_months.to_string(),
                "Term must be between 1 and 120 months",
            ));
        }
        Ok(())
    }

    /// Sales tax charged on the price net of trade-in.
    pub fn sales_tax(&self) -> f64 {
        (self.vehicle_price - self.trade_in_value).max(0.0) * self.sales_tax_pct / 100.0
    }

    /// Amount financed after down payment, trade-in, and tax.
    ///
    /// Floored at zero: a large enough down payment means nothing to finance.
    pub fn amount_financed(&self) -> f64 {
        (self.vehicle_price + self.sales_tax() - self.down_payment - self.trade_in_value).max(0.0)
    }
}

/// Results from auto loan calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanResult {
    /// Sales tax charged
    pub sales_tax: f64,

    /// Principal financed
    pub amount_financed: f64,

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

/// Calculate the financed amount and payment schedule totals.
pub fn calculate(input: &AutoLoanInput) -> CalcResult<AutoLoanResult> {
    input.validate()?;

    let tax = input.sales_tax();
    let principal = input.amount_financed();

    // Fully covered by down payment and trade-in: nothing to amortize.
    let payment = if principal == 0.0 {
        0.0
    } else {
        mortgage::monthly_payment(principal, input.annual_rate_pct, input.term_months)
    };
    let total_paid = payment * input.term_months as f64;
    let total_interest = total_paid - principal;

    let steps = vec![
        CalculationStep::new(
            "Sales tax",
            format!(
                "T = ({:.2} - {:.2}) * {}%",
                input.vehicle_price, input.trade_in_value, input.sales_tax_pct
            ),
            round_to(tax, 2),
        ),
        CalculationStep::new(
            "Amount financed",
            format!(
                "P = {:.2} + {:.2} - {:.2} - {:.2}",
                input.vehicle_price, tax, input.down_payment, input.trade_in_value
            ),
            round_to(principal, 2),
        ),
        CalculationStep::new(
            "Monthly payment",
            "M = P*r*(1+r)^n / ((1+r)^n - 1)".to_string(),
            round_to(payment, 2),
        ),
    ];

    let mut recommendations = Vec::new();
    if input.term_months > 60 {
        recommendations.push(Recommendation::new(
            "Term",
            "Terms beyond 60 months often outlast the factory warranty and leave the loan underwater longer",
        ));
    }
    if input.down_payment < input.vehicle_price * 0.1 {
        recommendations.push(Recommendation::new(
            "Down payment",
            "Putting at least 10% down offsets first-year depreciation",
        ));
    }
    if total_interest > 0.0 && total_interest > principal * 0.2 {
        recommendations.push(Recommendation::new(
            "Rate",
            "Interest adds more than 20% to the financed amount; a shorter term or better rate would help",
        ));
    }

    Ok(AutoLoanResult {
        sales_tax: round_to(tax, 2),
        amount_financed: round_to(principal, 2),
        monthly_payment: round_to(payment, 2),
        total_paid: round_to(total_paid, 2),
        total_interest: round_to(total_interest, 2),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_loan() -> AutoLoanInput {
        AutoLoanInput {
            vehicle_price: 32_000.0,
            down_payment: 3_000.0,
            trade_in_value: 5_000.0,
            sales_tax_pct: 7.0,
            annual_rate_pct: 7.5,
            term_months: 60,
        }
    }

    #[test]
    fn test_amount_financed() {
        let input = test_loan();
        // Tax = 27000 * 7% = 1890; financed = 32000 + 1890 - 3000 - 5000
        assert!((input.sales_tax() - 1890.0).abs() < 1e-9);
        assert!((input.amount_financed() - 25_890.0).abs() < 1e-9);
    }

    #[test]
    fn test_matches_mortgage_amortization() {
        let input = test_loan();
        let result = calculate(&input).unwrap();
        let expected = mortgage::monthly_payment(25_890.0, 7.5, 60);
        assert!((result.monthly_payment - round_to(expected, 2)).abs() < 1e-9);
    }

    #[test]
    fn test_fully_covered_purchase() {
        let input = AutoLoanInput {
            vehicle_price: 10_000.0,
            down_payment: 12_000.0,
            trade_in_value: 0.0,
            sales_tax_pct: 0.0,
            annual_rate_pct: 5.0,
            term_months: 36,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.amount_financed, 0.0);
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_interest, 0.0);
    }

    #[test]
    fn test_long_term_recommendation() {
        let mut input = test_loan();
        input.term_months = 84;
        let result = calculate(&input).unwrap();
        assert!(result.recommendations.iter().any(|r| r.category == "Term"));
    }

    #[test]
    fn test_invalid_term() {
        let mut input = test_loan();
        input.term_months = 0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_loan();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: AutoLoanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.term_months, roundtrip.term_months);
    }
}
