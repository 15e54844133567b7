use super::navigation_mode::NavigationMode;
use crate::flight_control::DegenerateFlightError;

/// Result of offering a picked star to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickSignal {
    /// A flight towards the star has started.
    Accepted,
    /// Navigation was busy; the pick had no effect.
    Dropped(NavigationMode),
    /// The click did not hit any star.
    Miss,
    /// No flight could be planned; navigation stays idle.
    Degenerate(DegenerateFlightError),
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickSignal {
    /// Free orbit control updated the camera.
    Idle,
    /// The camera moved along the flight path; carries the eased path progress.
    Flying(f64),
    /// The flight ended this tick; the overlay has been notified.
    Arrived,
    /// The camera rotated towards the star; carries the settle progress.
    Settling(f64),
    /// Settling ended this tick; free control is back.
    Settled,
}
