//! Idle power cutoff for the motor driver.
//!
//! Holding torque is kept only briefly after a travel settles. Once the
//! shutter has rested at an end stop for the configured number of polls the
//! coils are released. States without a known position never hold power.

use crate::motor::MotionDriver;

use super::state::PositionState;

/// Tracks driver energization and the settled-idle counter.
#[derive(Debug)]
pub struct PowerManager {
    energized: bool,
    idle_ticks: u32,
    cutoff_ticks: u32,
}

impl PowerManager {
    /// Create a de-energized manager with the given idle cutoff.
    pub fn new(cutoff_ticks: u32) -> Self {
        Self {
            energized: false,
            idle_ticks: 0,
            cutoff_ticks,
        }
    }

    /// Check if the driver is currently energized.
    pub fn is_energized(&self) -> bool {
        self.energized
    }

    /// Energize the driver ahead of a rotation and reset the idle counter.
    pub fn energize<M: MotionDriver>(&mut self, drive: &mut M) {
        if !self.energized {
            drive.enable();
            self.energized = true;
        }
        self.idle_ticks = 0;
    }

    /// Reset the idle counter while motion is in progress.
    pub fn note_busy(&mut self) {
        self.idle_ticks = 0;
    }

    /// Cut power immediately, leaving the idle counter as-is.
    pub fn cut<M: MotionDriver>(&mut self, drive: &mut M) {
        drive.disable();
        self.energized = false;
    }

    /// Account one idle poll and release the coils when due.
    ///
    /// The counter advances only while the driver is energized at a settled
    /// position. States that may not hold power are released regardless of
    /// the counter, and the release repeats on every poll until a rotation
    /// resets the counter.
    pub fn tick<M: MotionDriver>(&mut self, state: PositionState, drive: &mut M) {
        if self.energized && state.is_settled() {
            self.idle_ticks += 1;
        }
        if self.idle_ticks >= self.cutoff_ticks || !state.may_hold_power() {
            drive.disable();
            self.energized = false;
        }
    }
}
