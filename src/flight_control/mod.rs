//! Camera motion: the camera rig, free orbit controls and the scripted
//! fly-to-star sequence (path planning, eased flight, orientation settle).

mod camera_state;
pub(crate) mod common;
mod flight_controller;
mod flight_plan;
mod orbit_controls;
mod orientation;
#[cfg(test)]
mod tests;

pub use camera_state::CameraRig;
pub use common::CatmullRomCurve;
pub use flight_controller::{FlightController, FlightProgress};
pub use flight_plan::{DegenerateFlightError, FlightPlan, PathPlanner};
pub use orbit_controls::OrbitControls;
pub use orientation::{OrientationSettler, SettleProgress, SettleTransform};
