//! Shutter actuator: position tracking, travel control and idle power
//! cutoff.

mod machine;
mod power;
mod state;

pub use machine::Actuator;
pub use power::PowerManager;
pub use state::{CalibrationPoint, DesiredPosition, PositionState};
