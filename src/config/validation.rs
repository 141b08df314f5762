//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{ActuatorConfig, LinkConfig, MotorConfig, SystemConfig};

/// Validate a system configuration.
///
/// Checks:
/// - Motor parameters are physically meaningful (non-zero steps, ratio, ramp)
/// - Actuator travel, speeds, and idle threshold are non-zero
/// - Link host/port are usable and the base path has a leading '/'
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_motor(&config.motor)?;
    validate_actuator(&config.actuator)?;
    validate_link(&config.link)?;

    Ok(())
}

fn validate_motor(config: &MotorConfig) -> Result<()> {
    if config.steps_per_revolution == 0 {
        return Err(Error::Config(ConfigError::InvalidStepsPerRevolution(
            config.steps_per_revolution,
        )));
    }

    if config.gear_ratio <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidGearRatio(config.gear_ratio)));
    }

    if config.ramp.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidRamp(config.ramp.0)));
    }

    Ok(())
}

fn validate_actuator(config: &ActuatorConfig) -> Result<()> {
    if config.travel.0 <= 0.0 {
        return Err(Error::Config(ConfigError::InvalidTravel(config.travel.0)));
    }

    if config.open_rpm.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidRpm(config.open_rpm.0)));
    }

    if config.close_rpm.0 == 0 {
        return Err(Error::Config(ConfigError::InvalidRpm(config.close_rpm.0)));
    }

    if config.idle_off_ticks == 0 {
        return Err(Error::Config(ConfigError::InvalidIdleTicks(
            config.idle_off_ticks,
        )));
    }

    Ok(())
}

fn validate_link(config: &LinkConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(Error::Config(ConfigError::InvalidHost));
    }

    if config.port == 0 {
        return Err(Error::Config(ConfigError::InvalidPort(config.port)));
    }

    if !config.base_path.starts_with('/') {
        return Err(Error::Config(ConfigError::InvalidBasePath(
            config.base_path.clone(),
        )));
    }

    Ok(())
}
