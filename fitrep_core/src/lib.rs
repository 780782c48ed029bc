#![forbid(unsafe_code)]

//! Core domain model and business logic for the Fitrep workout reporting system.
//!
//! This crate provides:
//! - Domain types (activity kinds, sensor packets, profiles)
//! - Per-kind distance/speed/calorie calculators
//! - Report building and rendering
//! - Built-in demo batch
//! - Configuration

pub mod types;
pub mod error;
pub mod calculator;
pub mod report;
pub mod engine;
pub mod demo;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use calculator::{Calculator, RunningCalculator, SwimmingCalculator, WalkingCalculator};
pub use report::Report;
pub use engine::build_report;
pub use demo::demo_packets;
pub use config::Config;
