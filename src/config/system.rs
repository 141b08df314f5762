//! System configuration - root configuration structure.

use serde::Deserialize;

use super::actuator::ActuatorConfig;
use super::link::LinkConfig;
use super::motor::MotorConfig;

/// Root configuration structure from TOML.
///
/// One device, one motor: the tables are flat rather than name-keyed.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Stepper motor and driver wiring.
    pub motor: MotorConfig,

    /// Shutter behavior parameters.
    #[serde(default)]
    pub actuator: ActuatorConfig,

    /// Message-bus connection parameters.
    pub link: LinkConfig,
}
