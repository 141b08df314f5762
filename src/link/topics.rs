//! Topic layout of the control link.
//!
//! Every topic hangs off one configured base path. Commands arrive on
//! sub-topics below it and status is published retained on [`STATE`], so a
//! controller reads its own resting position back after a restart.

use heapless::String;

/// Manual rotation by a signed number of degrees.
pub const ROTATE: &str = "/rotate";
/// Halt motion and release the driver.
pub const STOP: &str = "/stop";
/// Restart the controller.
pub const REBOOT: &str = "/reboot";
/// Latch the desired position to opened.
pub const OPEN: &str = "/open";
/// Latch the desired position to closed.
pub const CLOSE: &str = "/close";
/// Retained status label; inbound retained values calibrate the shutter.
pub const STATE: &str = "/state";
/// Retained connection flag.
pub const CONNECTION: &str = "/connection";
/// Retained address of the controller.
pub const IP: &str = "/ip";
/// Retained reason for the last restart.
pub const RESTART_REASON: &str = "/restartReason";

/// Payload announcing a live connection on [`CONNECTION`].
pub const ONLINE: &str = "online";
/// Will payload the broker publishes on [`CONNECTION`] after a lost
/// connection.
pub const OFFLINE: &str = "offline";

/// Wildcard filter covering every sub-topic under `base`.
///
/// Subscribing to this filter delivers commands and the retained state
/// label in one subscription.
pub fn command_filter(base: &str) -> String<72> {
    let mut filter = String::new();
    // Base paths are validated to 64 bytes, so these cannot truncate
    let _ = filter.push_str(base);
    let _ = filter.push_str("/+");
    filter
}

/// Strip the configured base path from an inbound topic.
///
/// Returns the sub-topic with its leading `/`, or `None` for topics
/// outside the base path.
pub fn strip_base<'a>(topic: &'a str, base: &str) -> Option<&'a str> {
    topic
        .strip_prefix(base)
        .filter(|subtopic| subtopic.starts_with('/'))
}
