//! Configuration module for shutter-drive.
//!
//! Provides types for loading and validating the motor, actuator, and
//! link configuration from TOML files (with `std` feature) or
//! pre-parsed data.

mod actuator;
mod link;
mod mechanical;
mod motor;
mod system;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use actuator::ActuatorConfig;
pub use link::LinkConfig;
pub use mechanical::Kinematics;
pub use motor::MotorConfig;
pub use system::SystemConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Degrees, DegreesPerSecSquared, Microsteps, Rpm, Steps};
