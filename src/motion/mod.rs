//! Motion module for shutter-drive.
//!
//! Provides motion profile calculation and step pacing.

mod executor;
mod profile;

pub use executor::MotionExecutor;
pub use profile::{Direction, MotionPhase, MotionProfile};
