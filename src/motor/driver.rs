//! Non-blocking stepper pulse scheduler.
//!
//! Generic over embedded-hal 1.0 pin types. Unlike a blocking driver
//! that sleeps between steps, [`PulseStepper`] is polled: each call to
//! [`next_action`](super::MotionDriver::next_action) issues at most one
//! step pulse and reports when the next one is due, so network servicing
//! and motor stepping can share a single cooperative loop.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::units::{Degrees, Rpm};
use crate::config::{Kinematics, MotorConfig};
use crate::motion::{Direction, MotionExecutor, MotionProfile};

use super::MotionDriver;

/// Step pulse width in microseconds (1-10 µs suffices for common drivers).
const STEP_PULSE_US: u32 = 2;

/// Poll-driven stepper driver over STEP/DIR/EN pins.
///
/// Timing comes from the caller-supplied monotonic microsecond clock
/// passed to `next_action`; the `DelayNs` provider is used only for the
/// step pulse width. Pin write results are discarded: the targeted GPIO
/// implementations are infallible, and at this layer a failed pulse is
/// indistinguishable from a missed one.
pub struct PulseStepper<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (pulse to move one step).
    step_pin: STEP,

    /// DIR pin (level selects direction, possibly inverted).
    dir_pin: DIR,

    /// EN pin (driver output enable, polarity per configuration).
    enable_pin: EN,

    /// Delay provider for the step pulse width.
    delay: DELAY,

    /// Derived step-domain parameters.
    kinematics: Kinematics,

    /// Speed for subsequent rotations.
    rpm: Rpm,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Whether the EN input is active low.
    enable_active_low: bool,

    /// Current direction (cached to avoid unnecessary pin writes).
    current_direction: Option<Direction>,

    /// Executor for the rotation in flight (if any).
    executor: Option<MotionExecutor>,

    /// Monotonic deadline of the next step pulse.
    next_due_us: u64,
}

impl<STEP, DIR, EN, DELAY> PulseStepper<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a driver from motor configuration and hardware resources.
    ///
    /// The driver starts de-energized with no motion pending.
    pub fn from_config(
        config: &MotorConfig,
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        delay: DELAY,
    ) -> Self {
        let mut stepper = Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            kinematics: Kinematics::from_config(config),
            rpm: Rpm(0),
            invert_direction: config.invert_direction,
            enable_active_low: config.enable_active_low,
            current_direction: None,
            executor: None,
            next_due_us: 0,
        };
        stepper.disable();
        stepper
    }

    fn set_direction(&mut self, direction: Direction) {
        if self.current_direction == Some(direction) {
            return;
        }

        let pin_high = match direction {
            Direction::Outward => !self.invert_direction,
            Direction::Inward => self.invert_direction,
        };

        if pin_high {
            let _ = self.dir_pin.set_high();
        } else {
            let _ = self.dir_pin.set_low();
        }

        self.current_direction = Some(direction);
    }
}

impl<STEP, DIR, EN, DELAY> MotionDriver for PulseStepper<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn enable(&mut self) {
        if self.enable_active_low {
            let _ = self.enable_pin.set_low();
        } else {
            let _ = self.enable_pin.set_high();
        }
    }

    fn disable(&mut self) {
        if self.enable_active_low {
            let _ = self.enable_pin.set_high();
        } else {
            let _ = self.enable_pin.set_low();
        }
    }

    fn set_rpm(&mut self, rpm: Rpm) {
        self.rpm = rpm;
    }

    fn start_rotate(&mut self, degrees: Degrees) {
        let steps = self.kinematics.degrees_to_steps(degrees);
        let cruise = self.kinematics.rpm_to_steps_per_sec(self.rpm);
        let profile =
            MotionProfile::trapezoidal(steps, cruise, self.kinematics.ramp_steps_per_sec2);

        if profile.is_zero() {
            self.executor = None;
            return;
        }

        self.set_direction(profile.direction);
        self.executor = Some(MotionExecutor::new(profile));
        // First pulse is due on the next poll
        self.next_due_us = 0;
    }

    fn stop(&mut self) {
        self.executor = None;
    }

    fn next_action(&mut self, now_us: u64) -> u32 {
        let executor = match self.executor.as_mut() {
            Some(executor) => executor,
            None => return 0,
        };

        if now_us < self.next_due_us {
            return (self.next_due_us - now_us) as u32;
        }

        let _ = self.step_pin.set_high();
        self.delay.delay_us(STEP_PULSE_US);
        let _ = self.step_pin.set_low();

        if executor.advance() {
            let interval = executor.current_interval_us();
            self.next_due_us = now_us + u64::from(interval);
            interval
        } else {
            self.executor = None;
            0
        }
    }
}
