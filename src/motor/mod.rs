//! Motor module for shutter-drive.
//!
//! Provides the Motion Primitive contract and its embedded-hal pulse
//! scheduler implementation.

mod driver;

pub use driver::PulseStepper;

use crate::config::units::{Degrees, Rpm};

/// Contract of the non-blocking stepper-pulse scheduler.
///
/// The control core drives a motor exclusively through this trait, so
/// tests and alternative hardware backends can substitute their own
/// implementation. Every method must return promptly; the only permitted
/// wait is the microsecond-scale step pulse width inside
/// [`next_action`](MotionDriver::next_action).
pub trait MotionDriver {
    /// Energize the driver outputs.
    fn enable(&mut self);

    /// Release the driver outputs. Must be idempotent.
    fn disable(&mut self);

    /// Set the speed used by subsequent rotations.
    fn set_rpm(&mut self, rpm: Rpm);

    /// Begin a relative rotation; the sign selects the direction
    /// (positive = outward). Replaces any rotation already in flight.
    /// The speed must have been set with [`set_rpm`](MotionDriver::set_rpm)
    /// beforehand.
    fn start_rotate(&mut self, degrees: Degrees);

    /// Abandon any in-flight rotation without completing it.
    fn stop(&mut self);

    /// Service the pulse schedule at the given monotonic time in
    /// microseconds.
    ///
    /// Issues a step pulse if one is due, then returns the number of
    /// microseconds until the next pulse is due. Returns `0` when no
    /// motion is pending (the previous rotation completed, was stopped,
    /// or none was started).
    fn next_action(&mut self, now_us: u64) -> u32;
}
