//! Camera navigation core for an interactive 3D star map.
//!
//! A user picks a star, the camera flies along an arcing Catmull-Rom path to a
//! stop point in front of it, rotates to look at it and hands control back to
//! free orbiting. Rendering is left to the embedding application; this crate
//! owns the camera pose, the orbit controls and the navigation state machine.

#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod flight_control;
pub mod logger;
pub mod mode_control;
pub mod overlay;
pub mod picking;
pub mod session;

#[doc(hidden)]
pub use chrono;

pub use catalog::{CatalogError, SpectralClass, StarCatalog, StarEntity, classify};
pub use config::{ConfigError, NavConfig, SessionConfig};
pub use flight_control::{
    CameraRig, DegenerateFlightError, FlightController, FlightPlan, OrbitControls,
    OrientationSettler, PathPlanner,
};
pub use mode_control::{NavigationMode, NavigationStateMachine, PickSignal, TickSignal};
pub use overlay::{ConsoleOverlay, OverlaySink, StarReport};
pub use picking::{PickingService, RayPicker, Viewport};
pub use session::{TourSession, TourSummary};
