//! Read-only snapshot handed to dynamic alert builders.

use serde::{Deserialize, Serialize};

pub const MS_TO_KPH: f64 = 3.6;
pub const MS_TO_MPH: f64 = 2.236_936;

/// Static parameters of the vehicle under supervision, fixed for a drive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleParams {
    /// Below this speed (m/s) lateral control is unavailable.
    pub min_steer_speed: f64,
    /// Speed (m/s) the vehicle must exceed for calibration to progress.
    pub calibration_min_speed: f64,
    /// Fingerprinted vehicle model.
    pub car_model: String,
    /// Vehicle make; a few alert texts differ per brand.
    pub brand: String,
}

/// Live signal values sampled this cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiveSignals {
    /// Calibration completion, 0–100.
    pub calibration_percent: f64,
    /// Whether the hardware variant carries an integrated GPS antenna.
    pub gps_integrated: bool,
    /// Auxiliary control axes (throttle/steer) in debug joystick mode.
    /// Empty outside that mode.
    pub joystick_axes: Vec<f64>,
    /// Seconds until an automatic lane change starts.
    pub lane_change_countdown: f64,
}

/// Everything a dynamic alert builder may read. Builders are pure over this
/// snapshot; they never touch the accumulator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolveContext {
    pub params: VehicleParams,
    pub signals: LiveSignals,
    /// Unit system for displayed speeds.
    pub metric: bool,
}

impl ResolveContext {
    /// A speed in m/s converted to the display unit system.
    pub fn display_speed(&self, meters_per_second: f64) -> f64 {
        let factor = if self.metric { MS_TO_KPH } else { MS_TO_MPH };
        meters_per_second * factor
    }

    pub fn speed_unit(&self) -> &'static str {
        if self.metric {
            "km/h"
        } else {
            "mph"
        }
    }
}
