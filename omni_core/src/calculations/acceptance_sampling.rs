//! # Acceptance Sampling Calculation
//!
//! Single sampling plan evaluation: the probability of accepting a lot at
//! a given incoming defect rate, the producer's and consumer's risks, and
//! the operating characteristic (OC) curve sampled at fixed quality
//! increments.
//!
//! ## Method
//!
//! Lot acceptance follows the binomial model: a lot is accepted when the
//! sample of `n` contains at most `c` defectives, so
//! `P(accept | p) = sum_{k=0..=c} C(n,k) p^k (1-p)^(n-k)`. The cumulative
//! sum is evaluated with a multiplicative term recurrence rather than
//! factorials, so large sample sizes neither overflow nor recurse.
//!
//! The OC curve is sampled from 0% to 20% incoming defect rate in 1%
//! steps. Average outgoing quality (AOQ) assumes rejected lots are
//! screened, `AOQ = p * Pa * (N - n) / N`; its maximum over the curve is
//! the AOQL.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters for a single sampling plan.
///
/// ## JSON Example
///
/// ```json
/// {
///   "lot_size": 1000,
///   "sample_size": 80,
///   "acceptance_number": 2,
///   "aql_pct": 1.0,
///   "ltpd_pct": 8.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptanceSamplingInput {
    /// Lot size N
    pub lot_size: u32,

    /// Sample size n drawn from the lot
    pub sample_size: u32,

    /// Acceptance number c: maximum defectives tolerated in the sample
    pub acceptance_number: u32,

    /// Acceptable quality level, percent defective
    pub aql_pct: f64,

    /// Lot tolerance percent defective (consumer's rejection quality)
    pub ltpd_pct: f64,
}

impl AcceptanceSamplingInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.lot_size == 0 {
            return Err(CalcError::invalid_input(
                "lot_size",
                self.lot_size.to_string(),
                "Lot size must be at least 1",
            ));
        }
        if self.sample_size > self.lot_size {
            return Err(CalcError::invalid_input(
                "sample_size",
                self.sample_size.to_string(),
                "Sample cannot exceed the lot",
            ));
        }
        if self.acceptance_number > self.sample_size {
            return Err(CalcError::invalid_input(
                "acceptance_number",
                self.acceptance_number.to_string(),
                "Acceptance number cannot exceed the sample size",
            ));
        }
        for (name, value) in [("aql_pct", self.aql_pct), ("ltpd_pct", self.ltpd_pct)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CalcError::invalid_input(
                    name,
                    value.to_string(),
                    "Percentage must be between 0 and 100",
                ));
            }
        }
        Ok(())
    }
}

/// Cumulative binomial probability `P(X <= c)` for `X ~ Bin(n, p)`.
///
/// Iterative term recurrence: `t_0 = (1-p)^n`,
/// `t_{k+1} = t_k * (n-k)/(k+1) * p/(1-p)`.
pub fn binomial_cdf(n: u32, c: u32, p: f64) -> f64 {
    if p <= 0.0 {
        return 1.0;
    }
    if p >= 1.0 {
        // Every draw is defective; acceptance needs the whole sample allowed
        return if c >= n { 1.0 } else { 0.0 };
    }
    let q = 1.0 - p;
    let mut term = q.powi(n as i32);
    let mut sum = term;
    for k in 0..c.min(n) {
        term *= (n - k) as f64 / (k + 1) as f64 * (p / q);
        sum += term;
    }
    sum.min(1.0)
}

/// One point on the operating characteristic curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcPoint {
    /// Incoming defect rate, percent
    pub defect_rate_pct: f64,

    /// Probability the plan accepts a lot at that rate
    pub acceptance_probability: f64,

    /// Average outgoing quality at that rate, percent
    pub aoq_pct: f64,
}

/// Results from acceptance sampling calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptanceSamplingResult {
    /// Probability of acceptance at the AQL
    pub acceptance_at_aql: f64,

    /// Producer's risk: chance a lot at the AQL is rejected, percent
    pub producer_risk_pct: f64,

    /// Probability of acceptance at the LTPD
    pub acceptance_at_ltpd: f64,

    /// Consumer's risk: chance a lot at the LTPD is accepted, percent
    pub consumer_risk_pct: f64,

    /// OC curve sampled from 0% to 20% in 1% steps (21 points)
    pub oc_curve: Vec<OcPoint>,

    /// Average outgoing quality limit over the sampled curve, percent
    pub aoql_pct: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Evaluate the sampling plan's risks and OC curve.
pub fn calculate(input: &AcceptanceSamplingInput) -> CalcResult<AcceptanceSamplingResult> {
    input.validate()?;

    let n = input.sample_size;
    let c = input.acceptance_number;

    let pa_aql = binomial_cdf(n, c, input.aql_pct / 100.0);
    let pa_ltpd = binomial_cdf(n, c, input.ltpd_pct / 100.0);
    let producer_risk = (1.0 - pa_aql) * 100.0;
    let consumer_risk = pa_ltpd * 100.0;

    let screen_fraction = (input.lot_size - n) as f64 / input.lot_size as f64;
    let mut oc_curve = Vec::with_capacity(21);
    let mut aoql = 0.0f64;
    for pct in 0..=20u32 {
        let p = pct as f64 / 100.0;
        let pa = binomial_cdf(n, c, p);
        let aoq_pct = p * pa * screen_fraction * 100.0;
        aoql = aoql.max(aoq_pct);
        oc_curve.push(OcPoint {
            defect_rate_pct: pct as f64,
            acceptance_probability: round_to(pa, 4),
            aoq_pct: round_to(aoq_pct, 3),
        });
    }

    let steps = vec![
        CalculationStep::new(
            "Acceptance at AQL",
            format!("Pa = sum C({}, k) p^k (1-p)^(n-k), k <= {}, p = {}%", n, c, input.aql_pct),
            round_to(pa_aql, 4),
        ),
        CalculationStep::new(
            "Producer's risk",
            "alpha = 1 - Pa(AQL)".to_string(),
            round_to(producer_risk, 2),
        ),
        CalculationStep::new(
            "Consumer's risk",
            "beta = Pa(LTPD)".to_string(),
            round_to(consumer_risk, 2),
        ),
    ];

    let mut recommendations = Vec::new();
    if producer_risk > 5.0 {
        recommendations.push(Recommendation::new(
            "Producer's risk",
            "Good lots are rejected more than 5% of the time; raise the acceptance number or tighten process quality",
        ));
    }
    if consumer_risk > 10.0 {
        recommendations.push(Recommendation::new(
            "Consumer's risk",
            "Bad lots slip through more than 10% of the time; increase the sample size",
        ));
    }
    if recommendations.is_empty() {
        recommendations.push(Recommendation::new(
            "Plan",
            "Both risks are within the conventional 5%/10% targets",
        ));
    }

    Ok(AcceptanceSamplingResult {
        acceptance_at_aql: round_to(pa_aql, 4),
        producer_risk_pct: round_to(producer_risk, 2),
        acceptance_at_ltpd: round_to(pa_ltpd, 4),
        consumer_risk_pct: round_to(consumer_risk, 2),
        oc_curve,
        aoql_pct: round_to(aoql, 3),
        steps,
        recommendations,
    })
}
