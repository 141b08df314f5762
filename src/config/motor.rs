//! Motor configuration from TOML.

use serde::Deserialize;

use super::units::{DegreesPerSecSquared, Microsteps};

/// Stepper motor and driver wiring configuration (the `[motor]` table).
#[derive(Debug, Clone, Deserialize)]
pub struct MotorConfig {
    /// Base steps per revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u16,

    /// Microstep setting (1, 2, 4, 8, 16, 32, etc.).
    pub microsteps: Microsteps,

    /// Gear ratio (output:input, e.g., 5.0 means 5:1 reduction).
    #[serde(default = "default_gear_ratio")]
    pub gear_ratio: f32,

    /// Ramp rate applied to both ends of every rotation.
    #[serde(default = "default_ramp", rename = "ramp_deg_per_sec2")]
    pub ramp: DegreesPerSecSquared,

    /// Invert direction pin logic.
    #[serde(default)]
    pub invert_direction: bool,

    /// Whether the driver's enable input is active low (common for
    /// A4988/DRV8825-style boards).
    #[serde(default = "default_enable_active_low")]
    pub enable_active_low: bool,
}

fn default_gear_ratio() -> f32 {
    1.0
}

fn default_ramp() -> DegreesPerSecSquared {
    DegreesPerSecSquared(150.0)
}

fn default_enable_active_low() -> bool {
    true
}

impl MotorConfig {
    /// Calculate total steps per output shaft revolution.
    pub fn total_steps_per_revolution(&self) -> u32 {
        (self.steps_per_revolution as f32 * self.microsteps.value() as f32 * self.gear_ratio)
            as u32
    }

    /// Calculate steps per degree of output rotation.
    pub fn steps_per_degree(&self) -> f32 {
        self.total_steps_per_revolution() as f32 / 360.0
    }
}
