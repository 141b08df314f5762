//! Unit tests for TOML configuration parsing.

use shutter_drive::config::{parse_config, SystemConfig};
use shutter_drive::Microsteps;

/// Test parsing a complete configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[motor]
steps_per_revolution = 200
microsteps = 16
gear_ratio = 1.0
ramp_deg_per_sec2 = 150.0
invert_direction = false
enable_active_low = true

[actuator]
travel_degrees = 9990.0
open_rpm = 180
close_rpm = 50
idle_off_ticks = 250

[link]
host = "broker.local"
port = 1883
base_path = "/home/shutter"
client_id = "shutter-livingroom"
username = "shutter"
password = "hunter2"
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.motor.steps_per_revolution, 200);
    assert_eq!(config.motor.microsteps.value(), 16);
    assert_eq!(config.motor.gear_ratio, 1.0);
    assert_eq!(config.motor.ramp.0, 150.0);
    assert!(!config.motor.invert_direction);
    assert!(config.motor.enable_active_low);

    assert_eq!(config.actuator.travel.0, 9990.0);
    assert_eq!(config.actuator.open_rpm.value(), 180);
    assert_eq!(config.actuator.close_rpm.value(), 50);
    assert_eq!(config.actuator.idle_off_ticks, 250);

    assert_eq!(config.link.host.as_str(), "broker.local");
    assert_eq!(config.link.port, 1883);
    assert_eq!(config.link.base_path.as_str(), "/home/shutter");
    assert_eq!(config.link.client_id.as_str(), "shutter-livingroom");
    assert_eq!(config.link.username.as_deref(), Some("shutter"));
    assert_eq!(config.link.password.as_deref(), Some("hunter2"));
}

/// Test that the actuator table is optional and falls back to defaults.
#[test]
fn test_actuator_defaults_when_table_missing() {
    let toml_str = r#"
[motor]
steps_per_revolution = 200
microsteps = 16

[link]
host = "broker.local"
base_path = "/home/shutter"
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.actuator.travel.0, 9990.0);
    assert_eq!(config.actuator.open_rpm.value(), 180);
    assert_eq!(config.actuator.close_rpm.value(), 50);
    assert_eq!(config.actuator.idle_off_ticks, 250);
}

/// Test motor defaults for the optional fields.
#[test]
fn test_motor_field_defaults() {
    let toml_str = r#"
[motor]
steps_per_revolution = 400
microsteps = 8

[link]
host = "broker.local"
base_path = "/home/shutter"
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.motor.microsteps, Microsteps::EIGHTH);
    assert_eq!(config.motor.gear_ratio, 1.0);
    assert_eq!(config.motor.ramp.0, 150.0);
    assert!(!config.motor.invert_direction);
    assert!(config.motor.enable_active_low);
    assert_eq!(config.motor.total_steps_per_revolution(), 3200);
}

/// Test link defaults for port and client id.
#[test]
fn test_link_field_defaults() {
    let toml_str = r#"
[motor]
steps_per_revolution = 200
microsteps = 16

[link]
host = "broker.local"
base_path = "/home/shutter"
"#;

    let config = parse_config(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.link.port, 1883);
    assert_eq!(config.link.client_id.as_str(), "shutter");
    assert_eq!(config.link.username, None);
    assert_eq!(config.link.password, None);
}

/// Test that invalid microstep values are rejected during parsing.
#[test]
fn test_invalid_microsteps_rejected() {
    let toml_str = r#"
[motor]
steps_per_revolution = 200
microsteps = 12

[link]
host = "broker.local"
base_path = "/home/shutter"
"#;

    let result: Result<SystemConfig, _> = parse_config(toml_str);
    assert!(result.is_err(), "Should reject non-power-of-2 microsteps");
}

/// Test that a missing link table fails to parse.
#[test]
fn test_missing_link_table_rejected() {
    let toml_str = r#"
[motor]
steps_per_revolution = 200
microsteps = 16
"#;

    let result = parse_config(toml_str);
    assert!(result.is_err(), "Link table is required");
}
