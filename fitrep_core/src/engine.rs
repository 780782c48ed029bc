//! Report building: packet parsing, calculator dispatch, assembly.
//!
//! `build_report` is the single entry point:
//! - Resolve the activity code against the closed set of kinds
//! - Parse the positional parameters into a validated profile
//! - Bind the matching calculator and compute distance, speed, calories
//!
//! Validation is strict: arity must match the kind exactly, every value
//! must be finite, counts must be whole and non-negative, and every value
//! used as a divisor (duration, walking height, pool length) must be
//! strictly positive so no infinity or NaN can reach a report.

use crate::calculator::{Calculator, RunningCalculator, SwimmingCalculator, WalkingCalculator};
use crate::report::Report;
use crate::types::{ActivityKind, ActivityProfile};
use crate::{Error, Result};

/// Build a workout report from one sensor record.
///
/// This is a pure function: identical inputs always produce identical
/// reports.
///
/// # Errors
///
/// `Error::InvalidActivity` for an unrecognized code,
/// `Error::MalformedInput` for wrong arity or out-of-domain values.
pub fn build_report(code: &str, params: &[f64]) -> Result<Report> {
    let kind = ActivityKind::from_code(code)?;
    check_arity(kind, params)?;

    let calculator = bind_calculator(kind, params)?;
    let report = calculator.report();

    tracing::debug!(
        "built {} report: {:.3} km, {:.3} km/h, {:.3} kcal",
        report.kind_name,
        report.distance_km,
        report.mean_speed_kmh,
        report.calories
    );

    Ok(report)
}

fn check_arity(kind: ActivityKind, params: &[f64]) -> Result<()> {
    let expected = kind.param_count();
    if params.len() != expected {
        return Err(Error::MalformedInput(format!(
            "{} expects {} parameters, got {}",
            kind.code(),
            expected,
            params.len()
        )));
    }
    Ok(())
}

/// Parse the positional parameters and bind the kind's calculator.
///
/// Parameter order is fixed: action count, duration, weight, then the
/// kind-specific tail (walking height; swimming pool length and laps).
fn bind_calculator(kind: ActivityKind, params: &[f64]) -> Result<Box<dyn Calculator>> {
    let profile = ActivityProfile {
        action_count: parse_count(params[0], "action count")?,
        duration_hours: parse_positive(params[1], "duration")?,
        weight_kg: parse_positive(params[2], "weight")?,
    };

    match kind {
        ActivityKind::Running => Ok(Box::new(RunningCalculator::new(profile))),
        ActivityKind::SportsWalking => {
            let height_cm = parse_positive(params[3], "height")?;
            Ok(Box::new(WalkingCalculator::new(profile, height_cm)))
        }
        ActivityKind::Swimming => {
            let pool_length_m = parse_positive(params[3], "pool length")?;
            let pool_laps = parse_count(params[4], "pool laps")?;
            Ok(Box::new(SwimmingCalculator::new(
                profile,
                pool_length_m,
                pool_laps,
            )))
        }
    }
}

fn parse_count(value: f64, field: &str) -> Result<u32> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::MalformedInput(format!(
            "{} must be a non-negative whole number, got {}",
            field, value
        )));
    }
    Ok(value as u32)
}

fn parse_positive(value: f64, field: &str) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::MalformedInput(format!(
            "{} must be a positive number, got {}",
            field, value
        )));
    }
    Ok(value)
}
