//! Built-in demo batch of sensor packets.
//!
//! This is the packet list shipped for first runs and smoke checks; real
//! deployments replace it with a `[batch]` section in the config file.

use crate::types::SensorPacket;
use once_cell::sync::Lazy;

/// Cached demo batch - built once and reused across all operations
static DEMO_BATCH: Lazy<Vec<SensorPacket>> = Lazy::new(build_demo_batch_internal);

/// Get a reference to the cached demo batch
pub fn demo_packets() -> &'static [SensorPacket] {
    &DEMO_BATCH
}

/// Builds the demo batch
///
/// **Note**: prefer `demo_packets()` which returns a cached reference. This
/// function is retained for testing and custom batch creation.
pub fn build_demo_batch() -> Vec<SensorPacket> {
    build_demo_batch_internal()
}

fn build_demo_batch_internal() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
