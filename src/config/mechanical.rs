//! Kinematic parameters derived from motor configuration.

use super::motor::MotorConfig;
use super::units::{Degrees, Rpm, Steps};

/// Derived step-domain parameters computed once from [`MotorConfig`]
/// and used for all motion planning.
#[derive(Debug, Clone)]
pub struct Kinematics {
    /// Total steps per output revolution (steps × microsteps × gear_ratio).
    pub steps_per_revolution: u32,

    /// Steps per degree of output rotation.
    pub steps_per_degree: f32,

    /// Ramp rate in steps per second squared.
    pub ramp_steps_per_sec2: f32,
}

impl Kinematics {
    /// Compute kinematic parameters from motor configuration.
    pub fn from_config(config: &MotorConfig) -> Self {
        let steps_per_revolution = config.total_steps_per_revolution();
        let steps_per_degree = steps_per_revolution as f32 / 360.0;
        let ramp_steps_per_sec2 = config.ramp.0 * steps_per_degree;

        Self {
            steps_per_revolution,
            steps_per_degree,
            ramp_steps_per_sec2,
        }
    }

    /// Convert a signed degree magnitude to steps.
    #[inline]
    pub fn degrees_to_steps(&self, degrees: Degrees) -> Steps {
        Steps::from_degrees(degrees, self.steps_per_degree)
    }

    /// Convert a rotation speed to a step rate.
    #[inline]
    pub fn rpm_to_steps_per_sec(&self, rpm: Rpm) -> f32 {
        rpm.steps_per_sec(self.steps_per_revolution)
    }
}
