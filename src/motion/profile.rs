//! Motion profile calculation.
//!
//! Provides trapezoidal speed profiles with a shared ramp rate for the
//! acceleration and deceleration ends, timed in microseconds to match
//! the pulse scheduler's wait contract.

use libm::sqrtf;

use crate::config::units::Steps;

/// Direction of shutter motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Outward, toward the opened end (positive step count).
    Outward,
    /// Inward, toward the closed end (negative step count).
    Inward,
}

impl Direction {
    /// Get direction from signed step count.
    #[inline]
    pub fn from_steps(steps: Steps) -> Self {
        if steps.0 >= 0 {
            Direction::Outward
        } else {
            Direction::Inward
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Outward => 1,
            Direction::Inward => -1,
        }
    }
}

/// Current phase of motion execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    /// Accelerating from rest toward cruise velocity.
    Accelerating,
    /// Moving at constant cruise velocity.
    Cruising,
    /// Decelerating from cruise velocity to rest.
    Decelerating,
    /// Motion complete.
    Complete,
}

/// Computed motion profile for a rotation (symmetric trapezoidal).
#[derive(Debug, Clone)]
pub struct MotionProfile {
    /// Total steps to move (absolute value).
    pub total_steps: u32,

    /// Direction of motion.
    pub direction: Direction,

    /// Steps in the acceleration ramp.
    pub accel_steps: u32,

    /// Steps in the cruise phase (constant velocity).
    pub cruise_steps: u32,

    /// Steps in the deceleration ramp.
    pub decel_steps: u32,

    /// Initial step interval (microseconds) - at the start of the ramp.
    pub initial_interval_us: u32,

    /// Cruise step interval (microseconds) - at cruise velocity.
    pub cruise_interval_us: u32,
}

impl MotionProfile {
    /// Create a symmetric trapezoidal motion profile.
    ///
    /// # Arguments
    ///
    /// * `total_steps` - Signed step count (positive = outward, negative = inward)
    /// * `cruise_velocity` - Cruise velocity in steps/sec
    /// * `ramp` - Ramp rate in steps/sec², applied to both ends
    pub fn trapezoidal(total_steps: Steps, cruise_velocity: f32, ramp: f32) -> Self {
        let direction = Direction::from_steps(total_steps);
        let steps = total_steps.abs() as u32;

        if steps == 0 || cruise_velocity <= 0.0 || ramp <= 0.0 {
            return Self::zero();
        }

        // Distance covered bringing the motor from rest to cruise:
        // t = v / a, d = 0.5 * a * t² = v² / (2a)
        let ramp_distance = cruise_velocity * cruise_velocity / (2.0 * ramp);

        let (accel_steps, cruise_steps, decel_steps) = if 2.0 * ramp_distance >= steps as f32 {
            // Triangle profile: cruise velocity is never reached
            let accel_steps = steps / 2;
            let decel_steps = steps.saturating_sub(accel_steps);
            (accel_steps, 0u32, decel_steps)
        } else {
            let ramp_steps = ramp_distance as u32;
            let cruise_steps = steps.saturating_sub(2 * ramp_steps);
            (ramp_steps, cruise_steps, ramp_steps)
        };

        // First-step interval from a practical minimum starting velocity
        let initial_velocity = sqrtf(2.0 * ramp);
        let initial_interval_us = (1_000_000.0 / initial_velocity) as u32;
        let cruise_interval_us = (1_000_000.0 / cruise_velocity) as u32;

        Self {
            total_steps: steps,
            direction,
            accel_steps,
            cruise_steps,
            decel_steps,
            initial_interval_us,
            cruise_interval_us,
        }
    }

    /// Create a zero-length profile (no motion).
    pub fn zero() -> Self {
        Self {
            total_steps: 0,
            direction: Direction::Outward,
            accel_steps: 0,
            cruise_steps: 0,
            decel_steps: 0,
            initial_interval_us: u32::MAX,
            cruise_interval_us: u32::MAX,
        }
    }

    /// Check if this is a zero-length profile.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.total_steps == 0
    }

    /// Get the phase at a given step number.
    pub fn phase_at(&self, step: u32) -> MotionPhase {
        if step >= self.total_steps {
            MotionPhase::Complete
        } else if step < self.accel_steps {
            MotionPhase::Accelerating
        } else if step < self.accel_steps + self.cruise_steps {
            MotionPhase::Cruising
        } else {
            MotionPhase::Decelerating
        }
    }

    /// Calculate the step interval for a given step number, in microseconds.
    pub fn interval_at(&self, step: u32) -> u32 {
        match self.phase_at(step) {
            MotionPhase::Complete => u32::MAX,
            MotionPhase::Cruising => self.cruise_interval_us,
            MotionPhase::Accelerating => {
                // Interval shrinks linearly from initial to cruise
                let progress = step as f32 / self.accel_steps.max(1) as f32;
                let interval = self.initial_interval_us as f32
                    - (self.initial_interval_us as f32 - self.cruise_interval_us as f32) * progress;
                interval as u32
            }
            MotionPhase::Decelerating => {
                // Interval grows back toward the initial value
                let decel_step = step - self.accel_steps - self.cruise_steps;
                let progress = decel_step as f32 / self.decel_steps.max(1) as f32;
                let interval = self.cruise_interval_us as f32
                    + (self.initial_interval_us as f32 - self.cruise_interval_us as f32) * progress;
                interval as u32
            }
        }
    }
}
