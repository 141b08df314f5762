//! Inbound command decoding.

use crate::actuator::{CalibrationPoint, DesiredPosition};
use crate::config::units::Degrees;

use super::topics;

/// A decoded control command.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Rotate by a signed number of degrees at the travel speed for that
    /// direction.
    Rotate(Degrees),
    /// Halt motion and release the driver.
    Stop,
    /// Restart the controller.
    Reboot,
    /// Latch a new desired position.
    SetDesired(DesiredPosition),
    /// Assert the current resting position.
    Calibrate(CalibrationPoint),
}

/// Decode one inbound message into a command.
///
/// `subtopic` is the topic with the base path already stripped (see
/// [`topics::strip_base`]). Unknown sub-topics decode to `None`, as do
/// rotation payloads that are not a whole number of degrees or are zero.
/// Calibration payloads other than the two end-stop labels assert an
/// unknown position rather than being dropped.
pub fn decode(subtopic: &str, payload: &[u8]) -> Option<Command> {
    match subtopic {
        topics::ROTATE => {
            let text = core::str::from_utf8(payload).ok()?;
            let degrees = text.trim().parse::<i32>().ok()?;
            if degrees == 0 {
                return None;
            }
            Some(Command::Rotate(Degrees(degrees as f32)))
        }
        topics::STOP => Some(Command::Stop),
        topics::REBOOT => Some(Command::Reboot),
        topics::OPEN => Some(Command::SetDesired(DesiredPosition::Opened)),
        topics::CLOSE => Some(Command::SetDesired(DesiredPosition::Closed)),
        topics::STATE => Some(Command::Calibrate(match payload {
            b"closed" => CalibrationPoint::Closed,
            b"opened" => CalibrationPoint::Opened,
            _ => CalibrationPoint::Unknown,
        })),
        _ => None,
    }
}
