//! Shutter position states and travel transitions.
//!
//! The position state is a pure function of the last settled position and
//! the latched desired position. Each idle poll advances it by at most one
//! step, so a full open or close passes through its travelling state and a
//! reversal request always settles the current travel first.

use crate::motion::Direction;

/// Position of the shutter as tracked by the control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PositionState {
    /// Power-on state before the stored position has been read back
    Initializing,
    /// No usable stored position; the shutter must be told where it rests
    AwaitingCalibration,
    /// Travelling toward the closed end stop
    Closing,
    /// Settled against the closed end stop
    Closed,
    /// Travelling toward the opened end stop
    Opening,
    /// Settled against the opened end stop
    Opened,
}

/// Target position latched by open/close commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DesiredPosition {
    /// Shutter should be (or become) closed
    #[default]
    Closed,
    /// Shutter should be (or become) opened
    Opened,
}

/// Position asserted by a calibration message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationPoint {
    /// Shutter is resting at the closed end stop
    Closed,
    /// Shutter is resting at the opened end stop
    Opened,
    /// Stored position is unusable; wait for a fresh calibration
    Unknown,
}

impl PositionState {
    /// Status label published for this state.
    pub fn label(&self) -> &'static str {
        match self {
            PositionState::Initializing => "initialize",
            PositionState::AwaitingCalibration => "wait for calibration",
            PositionState::Closing => "closing",
            PositionState::Closed => "closed",
            PositionState::Opening => "opening",
            PositionState::Opened => "opened",
        }
    }

    /// Check if the shutter is resting at an end stop.
    pub fn is_settled(&self) -> bool {
        matches!(self, PositionState::Closed | PositionState::Opened)
    }

    /// Check if this state permits the driver to stay energized.
    ///
    /// Until a position is known the coils are always released.
    pub fn may_hold_power(&self) -> bool {
        !matches!(
            self,
            PositionState::Initializing | PositionState::AwaitingCalibration
        )
    }

    /// Advance one step toward the desired position.
    ///
    /// Returns the next state and, when a travel starts, the direction to
    /// drive. Callers invoke this only while the motor is idle; at most one
    /// transition happens per call, so a travelling state settles before a
    /// new travel can begin.
    pub fn advance(self, desired: DesiredPosition) -> (Self, Option<Direction>) {
        use DesiredPosition as Desired;
        use PositionState::*;

        match (self, desired) {
            (Closed, Desired::Opened) => (Opening, Some(Direction::Outward)),
            (Opened, Desired::Closed) => (Closing, Some(Direction::Inward)),
            (Closing, _) => (Closed, None),
            (Opening, _) => (Opened, None),
            _ => (self, None),
        }
    }
}

impl CalibrationPoint {
    /// State and desired position asserted by this calibration.
    ///
    /// Asserting an end stop also latches it as the desired position so the
    /// shutter stays put until commanded.
    pub fn asserted(self) -> (PositionState, DesiredPosition) {
        match self {
            CalibrationPoint::Closed => (PositionState::Closed, DesiredPosition::Closed),
            CalibrationPoint::Opened => (PositionState::Opened, DesiredPosition::Opened),
            CalibrationPoint::Unknown => {
                (PositionState::AwaitingCalibration, DesiredPosition::Closed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_travel_from_closed() {
        let desired = DesiredPosition::Opened;

        let (state, motion) = PositionState::Closed.advance(desired);
        assert_eq!(state, PositionState::Opening);
        assert_eq!(motion, Some(Direction::Outward));

        // Next idle poll settles without starting new motion
        let (state, motion) = state.advance(desired);
        assert_eq!(state, PositionState::Opened);
        assert_eq!(motion, None);
    }

    #[test]
    fn test_close_travel_from_opened() {
        let desired = DesiredPosition::Closed;

        let (state, motion) = PositionState::Opened.advance(desired);
        assert_eq!(state, PositionState::Closing);
        assert_eq!(motion, Some(Direction::Inward));

        let (state, motion) = state.advance(desired);
        assert_eq!(state, PositionState::Closed);
        assert_eq!(motion, None);
    }

    #[test]
    fn test_settled_state_holds_when_desired_matches() {
        let pairs = [
            (PositionState::Closed, DesiredPosition::Closed),
            (PositionState::Opened, DesiredPosition::Opened),
        ];

        for (state, desired) in pairs {
            let (next, motion) = state.advance(desired);
            assert_eq!(next, state);
            assert_eq!(motion, None);
        }
    }

    #[test]
    fn test_uncalibrated_states_never_move() {
        let states = [
            PositionState::Initializing,
            PositionState::AwaitingCalibration,
        ];

        for state in states {
            for desired in [DesiredPosition::Closed, DesiredPosition::Opened] {
                let (next, motion) = state.advance(desired);
                assert_eq!(next, state);
                assert_eq!(motion, None);
            }
        }
    }

    #[test]
    fn test_reversal_settles_current_travel_first() {
        // A reversal mid-travel settles at the end stop being approached;
        // the opposite travel starts on the following poll
        let (state, motion) = PositionState::Opening.advance(DesiredPosition::Closed);
        assert_eq!(state, PositionState::Opened);
        assert_eq!(motion, None);

        let (state, motion) = state.advance(DesiredPosition::Closed);
        assert_eq!(state, PositionState::Closing);
        assert_eq!(motion, Some(Direction::Inward));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(PositionState::Initializing.label(), "initialize");
        assert_eq!(
            PositionState::AwaitingCalibration.label(),
            "wait for calibration"
        );
        assert_eq!(PositionState::Closing.label(), "closing");
        assert_eq!(PositionState::Closed.label(), "closed");
        assert_eq!(PositionState::Opening.label(), "opening");
        assert_eq!(PositionState::Opened.label(), "opened");
    }

    #[test]
    fn test_calibration_points() {
        assert_eq!(
            CalibrationPoint::Closed.asserted(),
            (PositionState::Closed, DesiredPosition::Closed)
        );
        assert_eq!(
            CalibrationPoint::Opened.asserted(),
            (PositionState::Opened, DesiredPosition::Opened)
        );
        assert_eq!(
            CalibrationPoint::Unknown.asserted(),
            (PositionState::AwaitingCalibration, DesiredPosition::Closed)
        );
    }

    #[test]
    fn test_power_hold_predicate() {
        assert!(!PositionState::Initializing.may_hold_power());
        assert!(!PositionState::AwaitingCalibration.may_hold_power());
        assert!(PositionState::Closing.may_hold_power());
        assert!(PositionState::Closed.may_hold_power());
        assert!(PositionState::Opening.may_hold_power());
        assert!(PositionState::Opened.may_hold_power());
    }

    #[test]
    fn test_settled_predicate() {
        assert!(PositionState::Closed.is_settled());
        assert!(PositionState::Opened.is_settled());
        assert!(!PositionState::Closing.is_settled());
        assert!(!PositionState::Opening.is_settled());
        assert!(!PositionState::Initializing.is_settled());
        assert!(!PositionState::AwaitingCalibration.is_settled());
    }
}
