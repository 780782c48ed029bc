//! Core domain types for the Fitrep workout reporting system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Activity kinds and their sensor codes
//! - Raw sensor packets
//! - Validated activity profiles

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// Activity Kinds
// ============================================================================

/// Kind of workout activity
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Running,
    SportsWalking,
    Swimming,
}

impl ActivityKind {
    /// Resolve the kind from its sensor code ("RUN", "WLK", "SWM")
    ///
    /// An unrecognized code is an error; it is never defaulted.
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "RUN" => Ok(ActivityKind::Running),
            "WLK" => Ok(ActivityKind::SportsWalking),
            "SWM" => Ok(ActivityKind::Swimming),
            other => Err(Error::InvalidActivity(other.to_string())),
        }
    }

    /// The sensor code for this kind
    pub fn code(self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Human-facing label used in rendered reports
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters a sensor packet of this kind carries
    pub fn param_count(self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

// ============================================================================
// Sensor Packets
// ============================================================================

/// One raw record from the activity sensor: a code plus positional parameters
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPacket {
    pub code: String,
    pub params: Vec<f64>,
}

impl SensorPacket {
    pub fn new(code: impl Into<String>, params: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            params,
        }
    }
}

// ============================================================================
// Activity Profiles
// ============================================================================

/// Validated numeric inputs shared by every workout record.
///
/// Kind-specific inputs (walking height, swimming pool dimensions) live on
/// the calculator that needs them, so a profile is only ever paired with
/// inputs its kind actually requires.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityProfile {
    /// Steps or strokes counted by the sensor
    pub action_count: u32,
    /// Workout duration in hours, strictly positive
    pub duration_hours: f64,
    /// Body weight in kilograms, strictly positive
    pub weight_kg: f64,
}
