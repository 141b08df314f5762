//! Transport link configuration from TOML.

use heapless::String;
use serde::Deserialize;

/// Message-bus connection parameters (the `[link]` table).
///
/// Consumed by [`Transport`](crate::link::Transport) implementations; the
/// control core itself never opens a connection.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkConfig {
    /// Broker hostname or address.
    pub host: String<64>,

    /// Broker port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base topic path; commands arrive on its sub-paths and status is
    /// published below it. Must start with '/'.
    pub base_path: String<64>,

    /// Client identifier presented to the broker. Implementations
    /// typically suffix a hardware id to keep devices distinct.
    #[serde(default = "default_client_id")]
    pub client_id: String<32>,

    /// Optional broker username.
    #[serde(default)]
    pub username: Option<String<32>>,

    /// Optional broker password.
    #[serde(default)]
    pub password: Option<String<32>>,
}

fn default_port() -> u16 {
    1883
}

fn default_client_id() -> String<32> {
    String::try_from("shutter").unwrap_or_default()
}
