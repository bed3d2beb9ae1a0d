//! # Batting Average Calculation
//!
//! AVG, OBP, SLG, and OPS from a stat line. Zero-denominator cases (no
//! at-bats yet, no plate appearances) resolve to 0 rather than NaN so a
//! fresh stat line still renders.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters: a batter's counting stats.
///
/// ## JSON Example
///
/// ```json
/// {
///   "at_bats": 400, "hits": 120, "doubles": 25, "triples": 3,
///   "home_runs": 18, "walks": 45, "hit_by_pitch": 4, "sacrifice_flies": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingAverageInput {
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub home_runs: u32,
    pub walks: u32,
    pub hit_by_pitch: u32,
    pub sacrifice_flies: u32,
}

impl BattingAverageInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.hits > self.at_bats {
            return Err(CalcError::invalid_input(
                "hits",
                self.hits.to_string(),
                "Hits cannot exceed at-bats",
            ));
        }
        if self.doubles + self.triples + self.home_runs > self.hits {
            return Err(CalcError::invalid_input(
                "hits",
                self.hits.to_string(),
                "Extra-base hits cannot exceed total hits",
            ));
        }
        Ok(())
    }

    /// Singles derived from the extra-base breakdown.
    pub fn singles(&self) -> u32 {
        self.hits - self.doubles - self.triples - self.home_runs
    }
}

/// Results from batting average calculation. Rates are rounded to 3
/// decimal places, the conventional display precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingAverageResult {
    /// Batting average H/AB; 0 when there are no at-bats
    pub batting_average: f64,

    /// On-base percentage; 0 when there are no plate appearances
    pub on_base_percentage: f64,

    /// Slugging percentage; 0 when there are no at-bats
    pub slugging_percentage: f64,

    /// OBP + SLG
    pub ops: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the rate stats for a batting line.
pub fn calculate(input: &BattingAverageInput) -> CalcResult<BattingAverageResult> {
    input.validate()?;

    let ab = input.at_bats as f64;
    let avg = if input.at_bats == 0 { 0.0 } else { input.hits as f64 / ab };

    let pa = input.at_bats + input.walks + input.hit_by_pitch + input.sacrifice_flies;
    let on_base_events = (input.hits + input.walks + input.hit_by_pitch) as f64;
    let obp = if pa == 0 { 0.0 } else { on_base_events / pa as f64 };

    let total_bases = (input.singles()
        + 2 * input.doubles
        + 3 * input.triples
        + 4 * input.home_runs) as f64;
    let slg = if input.at_bats == 0 { 0.0 } else { total_bases / ab };
    let ops = obp + slg;

    let steps = vec![
        CalculationStep::new(
            "Batting average",
            format!("AVG = {} / {}", input.hits, input.at_bats),
            round_to(avg, 3),
        ),
        CalculationStep::new(
            "On-base percentage",
            format!("OBP = ({} + {} + {}) / {}", input.hits, input.walks, input.hit_by_pitch, pa),
            round_to(obp, 3),
        ),
        CalculationStep::new(
            "Slugging percentage",
            format!("SLG = {} / {}", total_bases, input.at_bats),
            round_to(slg, 3),
        ),
    ];

    let assessment = if input.at_bats == 0 {
        "No at-bats recorded yet"
    } else if avg >= 0.300 {
        "A .300+ average is excellent at any level"
    } else if avg >= 0.250 {
        "A solid average; on-base skills decide the overall value"
    } else {
        "Below-average contact; look at the OBP before judging the hitter"
    };
    let recommendations = vec![Recommendation::new("Assessment", assessment)];

    Ok(BattingAverageResult {
        batting_average: round_to(avg, 3),
        on_base_percentage: round_to(obp, 3),
        slugging_percentage: round_to(slg, 3),
        ops: round_to(ops, 3),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_line() -> BattingAverageInput {
        BattingAverageInput {
            at_bats: 400,
            hits: 120,
            doubles: 25,
            triples: 3,
            home_runs: 17,
            walks: 45,
            hit_by_pitch: 4,
            sacrifice_flies: 5,
        }
    }

    #[test]
    fn test_rates() {
        let result = calculate(&test_line()).unwrap();
        assert_eq!(result.batting_average, 0.3);
        // OBP = (120+45+4)/454 = 0.3722 -> 0.372
        assert_eq!(result.on_base_percentage, 0.372);
        // TB = 75 + 50 + 9 + 68 = 202; SLG = 202/400 = 0.505
        assert_eq!(result.slugging_percentage, 0.505);
    }

    #[test]
    fn test_zero_at_bats_is_zero_not_nan() {
        let input = BattingAverageInput {
            at_bats: 0,
            hits: 0,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            walks: 0,
            hit_by_pitch: 0,
            sacrifice_flies: 0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.batting_average, 0.0);
        assert_eq!(result.on_base_percentage, 0.0);
        assert_eq!(result.slugging_percentage, 0.0);
        assert!(result.ops.is_finite());
    }

    #[test]
    fn test_walks_count_toward_obp_only() {
        let input = BattingAverageInput {
            at_bats: 10,
            hits: 2,
            doubles: 0,
            triples: 0,
            home_runs: 0,
            walks: 10,
            hit_by_pitch: 0,
            sacrifice_flies: 0,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.batting_average, 0.2);
        assert_eq!(result.on_base_percentage, 0.6);
    }

    #[test]
    fn test_hits_exceed_at_bats_rejected() {
        let mut input = test_line();
        input.hits = 500;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_extra_base_hits_exceed_hits_rejected() {
        let mut input = test_line();
        input.home_runs = 120;
        assert!(calculate(&input).is_err());
    }
}
