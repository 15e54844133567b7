//! Navigation modes and the state machine coordinating planning, flight,
//! settling and the overlay.

mod navigation_mode;
mod signal;
mod state_machine;

pub use navigation_mode::{NavigationMode, REGULAR_TRANSITIONS};
pub use signal::{PickSignal, TickSignal};
pub use state_machine::NavigationStateMachine;
