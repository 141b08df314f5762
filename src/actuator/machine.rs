//! Actuator core coupling the position state machine to the motor driver.

use log::debug;

use crate::config::units::{Degrees, Rpm};
use crate::config::{ActuatorConfig, SystemConfig};
use crate::link::Command;
use crate::motor::MotionDriver;

use super::power::PowerManager;
use super::state::{DesiredPosition, PositionState};

/// Shutter actuator: latches the desired position, drives travels and
/// manages idle power.
///
/// The actuator never blocks. [`Actuator::tick`] polls the driver for the
/// next step and advances the state machine only while the motor is idle.
pub struct Actuator<M: MotionDriver> {
    drive: M,
    state: PositionState,
    desired: DesiredPosition,
    power: PowerManager,
    travel: Degrees,
    open_rpm: Rpm,
    close_rpm: Rpm,
}

impl<M: MotionDriver> Actuator<M> {
    /// Create an actuator over the given driver, starting uncalibrated.
    pub fn new(config: &ActuatorConfig, drive: M) -> Self {
        Self {
            drive,
            state: PositionState::Initializing,
            desired: DesiredPosition::default(),
            power: PowerManager::new(config.idle_off_ticks),
            travel: config.travel,
            open_rpm: config.open_rpm,
            close_rpm: config.close_rpm,
        }
    }

    /// Create an actuator from a full system configuration.
    pub fn from_config(config: &SystemConfig, drive: M) -> Self {
        Self::new(&config.actuator, drive)
    }

    /// Current position state.
    pub fn state(&self) -> PositionState {
        self.state
    }

    /// Currently latched desired position.
    pub fn desired(&self) -> DesiredPosition {
        self.desired
    }

    /// Check if the motor driver is energized.
    pub fn is_energized(&self) -> bool {
        self.power.is_energized()
    }

    /// Access the underlying motion driver.
    pub fn drive(&self) -> &M {
        &self.drive
    }

    /// Apply a decoded command.
    ///
    /// Manual rotations and stops drive the motor directly and leave the
    /// position state untouched; the state machine re-settles on later
    /// polls from whatever state it was in.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetDesired(desired) => {
                debug!("desired position {:?}", desired);
                self.desired = desired;
            }
            Command::Rotate(degrees) => {
                debug!("manual rotate {} deg", degrees.0);
                self.rotate(degrees);
            }
            Command::Stop => {
                debug!("manual stop");
                self.drive.stop();
                self.power.cut(&mut self.drive);
            }
            Command::Calibrate(point) => {
                if self.power.is_energized() {
                    debug!("calibration ignored while driver is energized");
                    return;
                }
                let (state, desired) = point.asserted();
                debug!("calibrated to {:?}", state);
                self.state = state;
                self.desired = desired;
            }
            // Restarting is the host loop's job; nothing changes here
            Command::Reboot => {}
        }
    }

    /// Poll pending motion and advance the state machine once idle.
    ///
    /// `now_us` is the caller's monotonic clock in microseconds.
    pub fn tick(&mut self, now_us: u64) {
        if self.drive.next_action(now_us) > 0 {
            self.power.note_busy();
            return;
        }

        let (state, motion) = self.state.advance(self.desired);
        self.state = state;
        if let Some(direction) = motion {
            self.rotate(Degrees(self.travel.0 * direction.sign() as f32));
        }

        self.power.tick(self.state, &mut self.drive);
    }

    /// Start a rotation, energizing the driver and picking the travel speed
    /// for the direction.
    fn rotate(&mut self, degrees: Degrees) {
        self.power.energize(&mut self.drive);
        let rpm = if degrees.0 > 0.0 {
            self.open_rpm
        } else {
            self.close_rpm
        };
        self.drive.set_rpm(rpm);
        self.drive.start_rotate(degrees);
    }
}
