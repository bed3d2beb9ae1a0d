//! # Lunar Phase Calculation
//!
//! Computes the moon's age within the synodic cycle for a calendar date,
//! buckets it into the eight conventional phase names, and approximates
//! the illuminated fraction with a sine curve.
//!
//! ## Method
//!
//! Age = (days since the 2000-01-06 reference new moon) mod 29.530588853.
//! Phase boundaries sit at odd multiples of one sixteenth of the cycle, so
//! each principal phase (new, quarters, full) owns a symmetric window
//! around its exact moment. Illumination = sin²(π · age / cycle) · 100.
//!
//! This calendar-day approximation is accurate to roughly half a day,
//! which is what a phase widget needs; it is not an ephemeris.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::report::{round_to, CalculationStep, Recommendation};

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Reference new moon: 2000-01-06.
const REFERENCE_NEW_MOON: (i32, u32, u32) = (2000, 1, 6);

/// The eight conventional phase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Bucket an age in days into a phase name.
    ///
    /// Boundaries are odd multiples of synodic/16 so each principal phase
    /// gets a window centered on its exact moment.
    pub fn from_age(age_days: f64) -> Self {
        let sixteenth = SYNODIC_MONTH_DAYS / 16.0;
        if age_days < sixteenth {
            MoonPhase::NewMoon
        } else if age_days < 3.0 * sixteenth {
            MoonPhase::WaxingCrescent
        } else if age_days < 5.0 * sixteenth {
            MoonPhase::FirstQuarter
        } else if age_days < 7.0 * sixteenth {
            MoonPhase::WaxingGibbous
        } else if age_days < 9.0 * sixteenth {
            MoonPhase::FullMoon
        } else if age_days < 11.0 * sixteenth {
            MoonPhase::WaningGibbous
        } else if age_days < 13.0 * sixteenth {
            MoonPhase::LastQuarter
        } else if age_days < 15.0 * sixteenth {
            MoonPhase::WaningCrescent
        } else {
            MoonPhase::NewMoon
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Input parameters for the lunar phase.
///
/// ## JSON Example
///
/// ```json
/// { "date": "2026-08-06" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonPhaseInput {
    /// The calendar date to evaluate (UTC)
    pub date: NaiveDate,
}

/// Results from lunar phase calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonPhaseResult {
    /// Age within the synodic cycle, in days
    pub age_days: f64,

    /// Phase bucket
    pub phase: MoonPhase,

    /// Phase display name
    pub phase_name: String,

    /// Approximate illuminated fraction, percent, rounded to 1 decimal
    pub illumination_pct: f64,

    /// Days until the next full moon
    pub days_until_full: f64,

    /// Days until the next new moon
    pub days_until_new: f64,

    /// Ordered calculation steps
    pub steps: Vec<CalculationStep>,

    /// Ordered recommendation entries
    pub recommendations: Vec<Recommendation>,
}

/// Calculate the moon's age, phase, and illumination for a date.
pub fn calculate(input: &MoonPhaseInput) -> CalcResult<MoonPhaseResult> {
    let (y, m, d) = REFERENCE_NEW_MOON;
    let reference = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| CalcError::calculation_failed("moon_phase", "invalid reference epoch"))?;

    let elapsed = (input.date - reference).num_days() as f64;
    // rem_euclid keeps the age in [0, cycle) for dates before the epoch too
    let age = elapsed.rem_euclid(SYNODIC_MONTH_DAYS);
    let phase = MoonPhase::from_age(age);

    let cycle_fraction = age / SYNODIC_MONTH_DAYS;
    let illumination = (std::f64::consts::PI * cycle_fraction).sin().powi(2) * 100.0;

    let half_cycle = SYNODIC_MONTH_DAYS / 2.0;
    let days_until_full = (half_cycle - age).rem_euclid(SYNODIC_MONTH_DAYS);
    let days_until_new = (SYNODIC_MONTH_DAYS - age) % SYNODIC_MONTH_DAYS;

    let steps = vec![
        CalculationStep::new(
            "Elapsed days",
            format!("t = {} - 2000-01-06", input.date),
            elapsed,
        ),
        CalculationStep::new(
            "Age in cycle",
            format!("age = t mod {}", SYNODIC_MONTH_DAYS),
            round_to(age, 2),
        ),
        CalculationStep::new(
            "Illumination",
            "I = sin^2(pi * age / cycle) * 100".to_string(),
            round_to(illumination, 1),
        ),
    ];

    let recommendations = vec![match phase {
        MoonPhase::NewMoon => Recommendation::new(
            "Viewing",
            "Darkest skies of the month; ideal for deep-sky observation",
        ),
        MoonPhase::FullMoon => Recommendation::new(
            "Viewing",
            "The full disk washes out faint objects; a good night for lunar surface detail instead",
        ),
        MoonPhase::FirstQuarter | MoonPhase::LastQuarter => Recommendation::new(
            "Viewing",
            "Shadows along the terminator give the best crater relief at the quarters",
        ),
        _ => Recommendation::new(
            "Viewing",
            "Crescent and gibbous nights balance surface detail with sky darkness",
        ),
    }];

    Ok(MoonPhaseResult {
        age_days: round_to(age, 2),
        phase,
        phase_name: phase.display_name().to_string(),
        illumination_pct: round_to(illumination, 1),
        days_until_full: round_to(days_until_full, 1),
        days_until_new: round_to(days_until_new, 1),
        steps,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reference_date_is_new() {
        let result = calculate(&MoonPhaseInput { date: date(2000, 1, 6) }).unwrap();
        assert_eq!(result.age_days, 0.0);
        assert_eq!(result.phase, MoonPhase::NewMoon);
        assert_eq!(result.illumination_pct, 0.0);
    }

    #[test]
    fn test_full_moon_mid_cycle() {
        // ~14.77 days after the reference new moon
        let result = calculate(&MoonPhaseInput { date: date(2000, 1, 21) }).unwrap();
        assert_eq!(result.phase, MoonPhase::FullMoon);
        assert!(result.illumination_pct > 98.0);
    }

    #[test]
    fn test_first_quarter_window() {
        // ~7.4 days into the cycle
        let result = calculate(&MoonPhaseInput { date: date(2000, 1, 13) }).unwrap();
        assert_eq!(result.phase, MoonPhase::FirstQuarter);
        assert!(result.illumination_pct > 40.0 && result.illumination_pct < 60.0);
    }

    #[test]
    fn test_date_before_epoch() {
        let result = calculate(&MoonPhaseInput { date: date(1999, 12, 1) }).unwrap();
        assert!(result.age_days >= 0.0);
        assert!(result.age_days < SYNODIC_MONTH_DAYS);
    }

    #[test]
    fn test_cycle_wraps() {
        // One full synodic month later (rounded to 30 days) is early in the
        // next cycle
        let result = calculate(&MoonPhaseInput { date: date(2000, 2, 5) }).unwrap();
        assert_eq!(result.phase, MoonPhase::NewMoon);
    }

    #[test]
    fn test_days_until_full_bounded() {
        let result = calculate(&MoonPhaseInput { date: date(2026, 8, 6) }).unwrap();
        assert!(result.days_until_full >= 0.0);
        assert!(result.days_until_full < SYNODIC_MONTH_DAYS);
    }

    #[test]
    fn test_phase_buckets_cover_cycle() {
        // Every age in the cycle maps to exactly one bucket without panicking
        let mut age = 0.0;
        while age < SYNODIC_MONTH_DAYS {
            let _ = MoonPhase::from_age(age);
            age += 0.25;
        }
    }

    #[test]
    fn test_serialization_date_format() {
        let input = MoonPhaseInput { date: date(2026, 8, 6) };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("2026-08-06"));
    }
}
