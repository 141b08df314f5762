//! # shutter-drive
//!
//! Control core for network-connected motorized shutters with embedded-hal
//! 1.0 support.
//!
//! ## Features
//!
//! - **Configuration-driven**: Motor geometry, travel speeds and the link
//!   are defined in a TOML file
//! - **embedded-hal 1.0**: Uses `OutputPin` for STEP/DIR/EN, `DelayNs` for
//!   pulse timing
//! - **no_std compatible**: Core library works without standard library
//! - **Non-blocking**: One cooperative scheduler pass services updates,
//!   commands, motion and power
//! - **Retained status**: Position labels are published retained, and the
//!   retained label calibrates the shutter after a restart
//! - **Idle power cutoff**: Holding torque is released after a settled
//!   idle period
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shutter_drive::{Actuator, PulseStepper, Scheduler, SystemConfig};
//!
//! // Load configuration from TOML
//! let config: SystemConfig = shutter_drive::load_config("shutter.toml")?;
//!
//! // Drive the motor through embedded-hal pins
//! let drive = PulseStepper::from_config(&config.motor, step_pin, dir_pin, en_pin, delay);
//! let actuator = Actuator::from_config(&config, drive);
//!
//! // Run the control loop; `link` is the host's transport
//! let mut scheduler = Scheduler::new(actuator, link, updater);
//! loop {
//!     if scheduler.step(now_us()) == StepOutcome::Reboot {
//!         restart();
//!     }
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod actuator;
pub mod config;
pub mod error;
pub mod link;
pub mod motion;
pub mod motor;
pub mod scheduler;

// Re-exports for ergonomic API
pub use actuator::{Actuator, CalibrationPoint, DesiredPosition, PositionState};
pub use config::{validate_config, ActuatorConfig, LinkConfig, MotorConfig, SystemConfig};
pub use error::{Error, Result};
pub use link::{Command, Transport, UpdateService};
pub use motion::{Direction, MotionPhase, MotionProfile};
pub use motor::{MotionDriver, PulseStepper};
pub use scheduler::{Scheduler, StepOutcome};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Degrees, DegreesPerSecSquared, Microsteps, Rpm, Steps};
