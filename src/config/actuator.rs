//! Actuator behavior configuration from TOML.

use serde::Deserialize;

use super::units::{Degrees, Rpm};

/// Shutter behavior parameters (the `[actuator]` table).
///
/// Defaults mirror a typical roller-shutter fit: the travel magnitude is
/// chosen to always overshoot the physical travel so every open/close
/// re-homes against the mechanical end stop.
#[derive(Debug, Clone, Deserialize)]
pub struct ActuatorConfig {
    /// Rotation magnitude for a full open or close, in degrees.
    ///
    /// Must exceed the largest physically possible travel; accumulated
    /// step error is absorbed by stalling against the end stop.
    #[serde(default = "default_travel", rename = "travel_degrees")]
    pub travel: Degrees,

    /// Speed for outward (opening) rotations.
    #[serde(default = "default_open_rpm")]
    pub open_rpm: Rpm,

    /// Speed for inward (closing) rotations.
    #[serde(default = "default_close_rpm")]
    pub close_rpm: Rpm,

    /// Consecutive settled idle ticks before the driver is de-energized.
    #[serde(default = "default_idle_off_ticks")]
    pub idle_off_ticks: u32,
}

fn default_travel() -> Degrees {
    Degrees(9990.0)
}

fn default_open_rpm() -> Rpm {
    Rpm(180)
}

fn default_close_rpm() -> Rpm {
    Rpm(50)
}

fn default_idle_off_ticks() -> u32 {
    250
}

impl Default for ActuatorConfig {
    fn default() -> Self {
        Self {
            travel: default_travel(),
            open_rpm: default_open_rpm(),
            close_rpm: default_close_rpm(),
            idle_off_ticks: default_idle_off_ticks(),
        }
    }
}
