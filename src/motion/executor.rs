//! Motion execution - step pulse pacing.

use super::profile::{MotionPhase, MotionProfile};

/// Runtime state while a profile is being executed.
///
/// Owns the profile and walks it one step at a time; the pulse scheduler
/// asks for the current inter-step interval after each issued pulse.
#[derive(Debug, Clone)]
pub struct MotionExecutor {
    /// The computed profile being executed.
    profile: MotionProfile,

    /// Current step number (0 to total_steps - 1).
    current_step: u32,

    /// Current step interval in microseconds.
    current_interval_us: u32,

    /// Current phase of motion.
    phase: MotionPhase,
}

impl MotionExecutor {
    /// Create a new executor for a motion profile.
    pub fn new(profile: MotionProfile) -> Self {
        let phase = if profile.is_zero() {
            MotionPhase::Complete
        } else {
            MotionPhase::Accelerating
        };

        let interval = if profile.is_zero() {
            u32::MAX
        } else {
            profile.initial_interval_us
        };

        Self {
            profile,
            current_step: 0,
            current_interval_us: interval,
            phase,
        }
    }

    /// Check if motion is complete.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.phase == MotionPhase::Complete
    }

    /// Get the current step number.
    #[inline]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    /// Get the total number of steps.
    #[inline]
    pub fn total_steps(&self) -> u32 {
        self.profile.total_steps
    }

    /// Get steps remaining.
    #[inline]
    pub fn steps_remaining(&self) -> u32 {
        self.profile.total_steps.saturating_sub(self.current_step)
    }

    /// Get the current phase.
    #[inline]
    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Get the current step interval in microseconds.
    #[inline]
    pub fn current_interval_us(&self) -> u32 {
        self.current_interval_us
    }

    /// Advance to the next step.
    ///
    /// Returns `true` if another step remains, `false` once complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }

        self.current_step += 1;

        if self.current_step >= self.profile.total_steps {
            self.phase = MotionPhase::Complete;
            self.current_interval_us = u32::MAX;
            return false;
        }

        // Update phase and interval
        self.phase = self.profile.phase_at(self.current_step);
        self.current_interval_us = self.profile.interval_at(self.current_step);

        true
    }
}
