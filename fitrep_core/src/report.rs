//! Finished workout reports and their display rendering.

use serde::{Deserialize, Serialize};

/// Immutable summary of one workout record.
///
/// Produced once by a calculator and handed to whatever renders or stores
/// it; keeps no reference back to the inputs it was derived from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub kind_name: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

impl Report {
    /// Render the fixed display template, numeric fields to 3 decimal places
    pub fn render(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3}.",
            self.kind_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}
