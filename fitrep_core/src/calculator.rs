//! Distance, speed, and calorie calculators for each activity kind.
//!
//! All kinds share the same base computations:
//! - distance_km = action_count * step_length / 1000
//! - mean_speed_kmh = distance_km / duration_hours
//!
//! Swimming replaces both (stroke length instead of step length, pool
//! geometry for speed); Running and Walking only supply their own calorie
//! formulas.

use crate::report::Report;
use crate::types::{ActivityKind, ActivityProfile};

/// Length of one step in metres (running, walking)
pub const STEP_LENGTH_M: f64 = 0.65;

/// Effective length of one swimming stroke in metres
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Metres per kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes per hour
pub const MIN_IN_H: f64 = 60.0;

// Empirical calorie coefficients, per kind
const RUNNING_SPEED_FACTOR: f64 = 18.0;
const RUNNING_SPEED_OFFSET: f64 = 20.0;
const WALKING_WEIGHT_FACTOR: f64 = 0.035;
const WALKING_SPEED_HEIGHT_FACTOR: f64 = 0.029;
const SWIMMING_SPEED_SHIFT: f64 = 1.1;
const SWIMMING_WEIGHT_FACTOR: f64 = 2.0;

/// Computation contract shared by all activity kinds.
///
/// `distance_km` and `mean_speed_kmh` have default bodies used unchanged by
/// Running and Walking; Swimming overrides both. `calories` is always
/// kind-specific. `report` fixes the computation order: distance, then
/// speed, then calories.
pub trait Calculator {
    fn kind(&self) -> ActivityKind;

    fn profile(&self) -> &ActivityProfile;

    /// Distance travelled in km
    fn distance_km(&self) -> f64 {
        let profile = self.profile();
        profile.action_count as f64 * STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed over the whole workout in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.profile().duration_hours
    }

    /// Estimated calories burned
    fn calories(&self) -> f64;

    /// Assemble the finished report for this workout
    fn report(&self) -> Report {
        let distance_km = self.distance_km();
        let mean_speed_kmh = self.mean_speed_kmh();
        let calories = self.calories();

        Report {
            kind_name: self.kind().label().to_string(),
            duration_hours: self.profile().duration_hours,
            distance_km,
            mean_speed_kmh,
            calories,
        }
    }
}

// ============================================================================
// Running
// ============================================================================

/// Running: base distance/speed, calorie formula
/// `((18 * speed - 20) * weight / 1000) * duration * 60`.
///
/// The hour-to-minute factor is applied exactly once, here in the calorie
/// expression.
pub struct RunningCalculator {
    profile: ActivityProfile,
}

impl RunningCalculator {
    pub fn new(profile: ActivityProfile) -> Self {
        Self { profile }
    }
}

impl Calculator for RunningCalculator {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Running
    }

    fn profile(&self) -> &ActivityProfile {
        &self.profile
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        (RUNNING_SPEED_FACTOR * speed - RUNNING_SPEED_OFFSET) * self.profile.weight_kg / M_IN_KM
            * self.profile.duration_hours
            * MIN_IN_H
    }
}

// ============================================================================
// Sports Walking
// ============================================================================

/// Sports walking: base distance/speed, calorie formula
/// `(0.035 * weight + (speed^2 // height) * 0.029 * weight) * duration * 60`.
///
/// `//` is floor division: the speed-squared-over-height quotient is floored
/// before it is weighted. Height enters the quotient as the raw centimetre
/// value from the sensor.
pub struct WalkingCalculator {
    profile: ActivityProfile,
    height_cm: f64,
}

impl WalkingCalculator {
    pub fn new(profile: ActivityProfile, height_cm: f64) -> Self {
        Self { profile, height_cm }
    }
}

impl Calculator for WalkingCalculator {
    fn kind(&self) -> ActivityKind {
        ActivityKind::SportsWalking
    }

    fn profile(&self) -> &ActivityProfile {
        &self.profile
    }

    fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        let floored_quotient = (speed.powi(2) / self.height_cm).floor();

        (WALKING_WEIGHT_FACTOR * self.profile.weight_kg
            + floored_quotient * WALKING_SPEED_HEIGHT_FACTOR * self.profile.weight_kg)
            * self.profile.duration_hours
            * MIN_IN_H
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Swimming: overrides distance (stroke length) and speed (pool geometry),
/// calorie formula `(speed + 1.1) * 2 * weight`.
///
/// Calories scale only with speed and weight; duration does not enter the
/// formula.
pub struct SwimmingCalculator {
    profile: ActivityProfile,
    pool_length_m: f64,
    pool_laps: u32,
}

impl SwimmingCalculator {
    pub fn new(profile: ActivityProfile, pool_length_m: f64, pool_laps: u32) -> Self {
        Self {
            profile,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Calculator for SwimmingCalculator {
    fn kind(&self) -> ActivityKind {
        ActivityKind::Swimming
    }

    fn profile(&self) -> &ActivityProfile {
        &self.profile
    }

    fn distance_km(&self) -> f64 {
        self.profile.action_count as f64 * STROKE_LENGTH_M / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / M_IN_KM / self.profile.duration_hours
    }

    fn calories(&self) -> f64 {
        (self.mean_speed_kmh() + SWIMMING_SPEED_SHIFT)
            * SWIMMING_WEIGHT_FACTOR
            * self.profile.weight_kg
    }
}
