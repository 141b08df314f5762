//! Unit tests for configuration validation.

use shutter_drive::config::{validate_config, SystemConfig};
use shutter_drive::error::{ConfigError, Error};

// toml::from_str bypasses the validating loader so each rule can be
// exercised on its own
fn config_with(motor: &str, actuator: &str, link: &str) -> SystemConfig {
    let toml_str = format!(
        "[motor]\n{}\n[actuator]\n{}\n[link]\n{}\n",
        motor, actuator, link
    );
    toml::from_str(&toml_str).expect("Failed to parse TOML")
}

const GOOD_MOTOR: &str = "steps_per_revolution = 200\nmicrosteps = 16";
const GOOD_ACTUATOR: &str = "travel_degrees = 9990.0";
const GOOD_LINK: &str = "host = \"broker.local\"\nbase_path = \"/home/shutter\"";

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let config = config_with(GOOD_MOTOR, GOOD_ACTUATOR, GOOD_LINK);
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for zero steps per revolution.
#[test]
fn test_zero_steps_per_revolution_rejected() {
    let config = config_with(
        "steps_per_revolution = 0\nmicrosteps = 16",
        GOOD_ACTUATOR,
        GOOD_LINK,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidStepsPerRevolution(0)))
    ));
}

/// Test validation fails for a non-positive gear ratio.
#[test]
fn test_negative_gear_ratio_rejected() {
    let config = config_with(
        "steps_per_revolution = 200\nmicrosteps = 16\ngear_ratio = -2.0",
        GOOD_ACTUATOR,
        GOOD_LINK,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidGearRatio(_)))
    ));
}

/// Test validation fails for a travel of zero degrees.
#[test]
fn test_zero_travel_rejected() {
    let config = config_with(GOOD_MOTOR, "travel_degrees = 0.0", GOOD_LINK);

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidTravel(_)))
    ));
}

/// Test validation fails for a zero travel speed.
#[test]
fn test_zero_rpm_rejected() {
    let config = config_with(
        GOOD_MOTOR,
        "travel_degrees = 9990.0\nopen_rpm = 0",
        GOOD_LINK,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidRpm(0)))
    ));
}

/// Test validation fails when the idle cutoff is zero polls.
#[test]
fn test_zero_idle_cutoff_rejected() {
    let config = config_with(
        GOOD_MOTOR,
        "travel_degrees = 9990.0\nidle_off_ticks = 0",
        GOOD_LINK,
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidIdleTicks(0)))
    ));
}

/// Test validation fails for an empty broker host.
#[test]
fn test_empty_host_rejected() {
    let config = config_with(
        GOOD_MOTOR,
        GOOD_ACTUATOR,
        "host = \"\"\nbase_path = \"/home/shutter\"",
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidHost))
    ));
}

/// Test validation fails for a zero broker port.
#[test]
fn test_zero_port_rejected() {
    let config = config_with(
        GOOD_MOTOR,
        GOOD_ACTUATOR,
        "host = \"broker.local\"\nport = 0\nbase_path = \"/home/shutter\"",
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidPort(0)))
    ));
}

/// Test validation fails for a base path without a leading slash.
#[test]
fn test_relative_base_path_rejected() {
    let config = config_with(
        GOOD_MOTOR,
        GOOD_ACTUATOR,
        "host = \"broker.local\"\nbase_path = \"home/shutter\"",
    );

    assert!(matches!(
        validate_config(&config),
        Err(Error::Config(ConfigError::InvalidBasePath(_)))
    ));
}
