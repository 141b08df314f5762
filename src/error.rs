//! Error types for the shutter-drive library.
//!
//! Provides unified error handling across configuration and the transport boundary.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all shutter-drive operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Transport link error
    Link(LinkError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (must be power of 2: 1, 2, 4, 8, 16, 32, 64, 128, 256)
    InvalidMicrosteps(u16),
    /// Invalid steps per revolution (must be > 0)
    InvalidStepsPerRevolution(u16),
    /// Invalid gear ratio (must be > 0)
    InvalidGearRatio(f32),
    /// Invalid ramp rate (must be > 0)
    InvalidRamp(f32),
    /// Invalid rotation speed (must be > 0)
    InvalidRpm(u16),
    /// Invalid travel magnitude (must be > 0)
    InvalidTravel(f32),
    /// Invalid idle power-off threshold (must be > 0)
    InvalidIdleTicks(u32),
    /// Invalid broker host (must be non-empty)
    InvalidHost,
    /// Invalid broker port (must be non-zero)
    InvalidPort(u16),
    /// Invalid topic base path (must be non-empty with a leading '/')
    InvalidBasePath(heapless::String<64>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Transport link errors.
///
/// Raised by [`Transport`](crate::link::Transport) implementations; the
/// scheduler logs these and continues the pass, so none of them is fatal
/// to the control loop.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkError {
    /// The transport session is not currently established
    NotConnected,
    /// A status publish was not accepted by the link
    PublishFailed(heapless::String<64>),
    /// Buffered inbound traffic could not be read from the link
    ReceiveFailed(heapless::String<64>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Link(e) => write!(f, "Link error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            ConfigError::InvalidStepsPerRevolution(v) => {
                write!(f, "Invalid steps per revolution: {}. Must be > 0", v)
            }
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::InvalidRamp(v) => write!(f, "Invalid ramp rate: {}. Must be > 0", v),
            ConfigError::InvalidRpm(v) => write!(f, "Invalid RPM: {}. Must be > 0", v),
            ConfigError::InvalidTravel(v) => {
                write!(f, "Invalid travel magnitude: {}. Must be > 0", v)
            }
            ConfigError::InvalidIdleTicks(v) => {
                write!(f, "Invalid idle power-off threshold: {}. Must be > 0", v)
            }
            ConfigError::InvalidHost => write!(f, "Broker host must be non-empty"),
            ConfigError::InvalidPort(v) => write!(f, "Invalid broker port: {}", v),
            ConfigError::InvalidBasePath(path) => {
                write!(f, "Invalid base path '{}'. Must be non-empty with a leading '/'", path)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::NotConnected => write!(f, "Link not connected"),
            LinkError::PublishFailed(msg) => write!(f, "Publish failed: {}", msg),
            LinkError::ReceiveFailed(msg) => write!(f, "Receive failed: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Error::Link(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for LinkError {}
