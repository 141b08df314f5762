//! Unit tests for the inbound message pipeline: base path stripping
//! followed by command decoding, as a transport implementation runs it.

use shutter_drive::link::{decode, topics, Command};
use shutter_drive::{CalibrationPoint, Degrees, DesiredPosition};

const BASE: &str = "/home/shutter";

/// Decode a full topic the way a transport does.
fn decode_inbound(topic: &str, payload: &[u8]) -> Option<Command> {
    let subtopic = topics::strip_base(topic, BASE)?;
    decode(subtopic, payload)
}

/// Test every command sub-topic end to end.
#[test]
fn test_full_topic_round() {
    assert_eq!(
        decode_inbound("/home/shutter/rotate", b"180"),
        Some(Command::Rotate(Degrees(180.0)))
    );
    assert_eq!(
        decode_inbound("/home/shutter/stop", b""),
        Some(Command::Stop)
    );
    assert_eq!(
        decode_inbound("/home/shutter/reboot", b""),
        Some(Command::Reboot)
    );
    assert_eq!(
        decode_inbound("/home/shutter/open", b""),
        Some(Command::SetDesired(DesiredPosition::Opened))
    );
    assert_eq!(
        decode_inbound("/home/shutter/close", b""),
        Some(Command::SetDesired(DesiredPosition::Closed))
    );
    assert_eq!(
        decode_inbound("/home/shutter/state", b"closed"),
        Some(Command::Calibrate(CalibrationPoint::Closed))
    );
}

/// Test that topics outside the base path never decode.
#[test]
fn test_foreign_topics_ignored() {
    assert_eq!(decode_inbound("/home/other/rotate", b"90"), None);
    assert_eq!(decode_inbound("/home/shutterette/stop", b""), None);
    assert_eq!(decode_inbound("/rotate", b"90"), None);
}

/// Test that the device's own retained publishes replay as calibrations.
#[test]
fn test_retained_state_replays_as_calibration() {
    // The wildcard subscription covers the state topic, so the broker
    // replays the retained label back after a reconnect
    let filter = topics::command_filter(BASE);
    assert_eq!(filter.as_str(), "/home/shutter/+");

    assert_eq!(
        decode_inbound("/home/shutter/state", b"opened"),
        Some(Command::Calibrate(CalibrationPoint::Opened))
    );
    // A retained travelling label means the last travel never finished
    assert_eq!(
        decode_inbound("/home/shutter/state", b"closing"),
        Some(Command::Calibrate(CalibrationPoint::Unknown))
    );
}

/// Test that non-command status topics under the base decode to nothing.
#[test]
fn test_status_topics_are_not_commands() {
    assert_eq!(decode_inbound("/home/shutter/connection", b"online"), None);
    assert_eq!(decode_inbound("/home/shutter/ip", b"10.0.0.23"), None);
    assert_eq!(
        decode_inbound("/home/shutter/restartReason", b"power-on"),
        None
    );
}

/// Test rotation payload edge cases through the full pipeline.
#[test]
fn test_rotation_payload_edges() {
    assert_eq!(decode_inbound("/home/shutter/rotate", b"0"), None);
    assert_eq!(decode_inbound("/home/shutter/rotate", b"half"), None);
    assert_eq!(
        decode_inbound("/home/shutter/rotate", b"-9990"),
        Some(Command::Rotate(Degrees(-9990.0)))
    );
}
