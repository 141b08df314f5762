//! Control link: topic layout, command decoding and transport seams.
//!
//! The crate stays transport-agnostic. Hosts implement [`Transport`] over
//! whatever client their platform provides and feed decoded commands to
//! the scheduler; [`decode`] and [`topics`] keep the wire behaviour
//! identical across hosts.

pub mod command;
pub mod topics;

pub use command::{decode, Command};

use crate::error::LinkError;

/// Transport over which commands arrive and status is published.
///
/// Implementations are expected to be non-blocking: [`Transport::poll`]
/// returns at most one decoded command per call and `Ok(None)` when
/// nothing is pending. Reconnect handling lives behind this seam.
pub trait Transport {
    /// Poll for the next inbound command.
    fn poll(&mut self) -> Result<Option<Command>, LinkError>;

    /// Publish a retained status label on the state topic.
    fn publish_state(&mut self, label: &str) -> Result<(), LinkError>;
}

/// Firmware update hook serviced once per scheduler pass.
pub trait UpdateService {
    /// Give the update machinery a slice of time.
    fn service(&mut self);
}

/// Update service for hosts without an updater.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUpdate;

impl UpdateService for NoUpdate {
    fn service(&mut self) {}
}
