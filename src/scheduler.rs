//! Cooperative control loop.
//!
//! One pass services the updater, drains inbound commands, polls motion
//! and reports state changes. No pass blocks, so step pulses stay on time
//! as long as the host keeps calling [`Scheduler::step`].

use log::{info, warn};

use crate::actuator::{Actuator, PositionState};
use crate::link::{Command, Transport, UpdateService};
use crate::motor::MotionDriver;

/// Outcome of one scheduler pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepOutcome {
    /// Keep calling [`Scheduler::step`].
    Continue,
    /// A reboot was requested; the host should restart the controller.
    Reboot,
}

/// Drives one actuator from one transport, one pass at a time.
pub struct Scheduler<M, L, U>
where
    M: MotionDriver,
    L: Transport,
    U: UpdateService,
{
    actuator: Actuator<M>,
    link: L,
    updater: U,
    last_reported: PositionState,
}

impl<M, L, U> Scheduler<M, L, U>
where
    M: MotionDriver,
    L: Transport,
    U: UpdateService,
{
    /// Create a scheduler over an actuator and a transport.
    ///
    /// Nothing is reported until the position state first changes away
    /// from the boot state.
    pub fn new(actuator: Actuator<M>, link: L, updater: U) -> Self {
        Self {
            actuator,
            link,
            updater,
            last_reported: PositionState::Initializing,
        }
    }

    /// Access the actuator.
    pub fn actuator(&self) -> &Actuator<M> {
        &self.actuator
    }

    /// Access the transport.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Mutable access to the transport, for hosts that need to drive
    /// reconnects or inject traffic.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Run one cooperative pass.
    ///
    /// Inbound commands are drained before motion is polled, so a stop
    /// takes effect on the pass it arrives. A reboot command ends the pass
    /// immediately; queued commands behind it are dropped, as they would
    /// be by a restart.
    pub fn step(&mut self, now_us: u64) -> StepOutcome {
        self.updater.service();

        loop {
            match self.link.poll() {
                Ok(Some(Command::Reboot)) => {
                    info!("reboot requested");
                    return StepOutcome::Reboot;
                }
                Ok(Some(command)) => self.actuator.apply(command),
                Ok(None) => break,
                Err(err) => {
                    warn!("link poll failed: {}", err);
                    break;
                }
            }
        }

        self.actuator.tick(now_us);
        self.report();

        StepOutcome::Continue
    }

    /// Publish the state label if it changed since the last report.
    ///
    /// The boot state is never reported. A failed publish leaves the last
    /// reported state unchanged, so the report is retried on the next
    /// pass.
    fn report(&mut self) {
        let state = self.actuator.state();
        if state == self.last_reported || state == PositionState::Initializing {
            return;
        }

        match self.link.publish_state(state.label()) {
            Ok(()) => {
                info!("state: {}", state.label());
                self.last_reported = state;
            }
            Err(err) => warn!("state publish failed: {}", err),
        }
    }
}
