//! # Typing Speed Calculation
//!
//! Gross and net words per minute from a timed typing sample, using the
//! standard five-characters-per-word convention. Zero elapsed time
//! resolves every rate to 0 rather than NaN.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Input parameters for a typing test sample.
///
/// ## JSON Example
///
/// ```json
/// { "characters_typed": 1500, "minutes": 3, "seconds": 0, "errors": 6 }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingSpeedInput {
    /// Total characters typed, including spaces
    pub characters_typed: u32,

    /// Whole minutes of the sample
    pub minutes: u32,

    /// Remaining seconds of the sample
    pub seconds: u32,

    /// Uncorrected errors
    pub errors: u32,
}

impl TypingSpeedInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if self.seconds >= 60 {
            return Err(CalcError::invalid_input(
                "seconds",
                self.seconds.to_string(),
                "Seconds must be below 60; carry the rest into minutes",
            ));
        }
        Ok(())
    }

    /// Elapsed time in fractional minutes.
    pub fn total_minutes(&self) -> f64 {
        self.minutes as f64 + self.seconds as f64 / 60.0
    }
}

/// Results from typing speed calculation. Rates are rounded to 1 decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypingSpeedResult {
    /// Gross words per minute; 0 when no time elapsed
    pub gross_wpm: f64,

    /// Net words per minute (gross minus error rate), floored at 0
    pub net_wpm: f64,

    /// Accuracy as a percentage of typed words; 0 when nothing was typed
    pub accuracy_pct: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate gross/net WPM and accuracy.
pub fn calculate(input: &TypingSpeedInput) -> CalcResult<TypingSpeedResult> {
    input.validate()?;

    let words = input.characters_typed as f64 / 5.0;
    let elapsed = input.total_minutes();

    // Zero elapsed time: rates are 0 by definition, never a division
    let (gross, net) = if elapsed == 0.0 {
        (0.0, 0.0)
    } else {
        let gross = words / elapsed;
        let net = (gross - input.errors as f64 / elapsed).max(0.0);
        (gross, net)
    };

    let accuracy = if words == 0.0 {
        0.0
    } else {
        ((words - input.errors as f64) / words * 100.0).max(0.0)
    };

    let steps = vec![
        CalculationStep::new(
            "Words typed",
            format!("w = {} / 5", input.characters_typed),
            words,
        ),
        CalculationStep::new(
            "Gross WPM",
            format!("gross = w / {:.2}", elapsed),
            round_to(gross, 1),
        ),
        CalculationStep::new(
            "Net WPM",
            format!("net = gross - {} errors / min", input.errors),
            round_to(net, 1),
        ),
    ];

    let assessment = if elapsed == 0.0 {
        "No elapsed time recorded"
    } else if net >= 80.0 {
        "Professional-level speed; focus on sustaining accuracy"
    } else if net >= 40.0 {
        "Around the average for regular computer users; accuracy drills raise net speed fastest"
    } else {
        "Below typical; short daily practice on home-row drills pays off quickly"
    };
    let recommendations = vec![Recommendation::new("Assessment", assessment)];

    Ok(TypingSpeedResult {
        gross_wpm: round_to(gross, 1),
        net_wpm: round_to(net, 1),
        accuracy_pct: round_to(accuracy, 1),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rates() {
        let input = TypingSpeedInput {
            characters_typed: 1500,
            minutes: 3,
            seconds: 0,
            errors: 6,
        };
        let result = calculate(&input).unwrap();
        // 300 words / 3 min = 100 gross; net = 100 - 2 = 98
        assert_eq!(result.gross_wpm, 100.0);
        assert_eq!(result.net_wpm, 98.0);
        assert_eq!(result.accuracy_pct, 98.0);
    }

    #[test]
    fn test_fractional_minutes() {
        let input = TypingSpeedInput {
            characters_typed: 500,
            minutes: 0,
            seconds: 30,
            errors: 0,
        };
        let result = calculate(&input).unwrap();
        // 100 words in half a minute
        assert_eq!(result.gross_wpm, 200.0);
    }

    #[test]
    fn test_zero_time_is_zero_not_nan() {
        let input = TypingSpeedInput {
            characters_typed: 250,
            minutes: 0,
            seconds: 0,
            errors: 2,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.gross_wpm, 0.0);
        assert_eq!(result.net_wpm, 0.0);
        assert!(result.accuracy_pct.is_finite());
    }

    #[test]
    fn test_net_floored_at_zero() {
        let input = TypingSpeedInput {
            characters_typed: 50,
            minutes: 1,
            seconds: 0,
            errors: 100,
        };
        let result = calculate(&input).unwrap();
        assert_eq!(result.net_wpm, 0.0);
        assert_eq!(result.accuracy_pct, 0.0);
    }

    #[test]
    fn test_overflowing_seconds_rejected() {
        let input = TypingSpeedInput {
            characters_typed: 100,
            minutes: 1,
            seconds: 75,
            errors: 0,
        };
        assert!(calculate(&input).is_err());
    }
}
