//! Turning pointer positions into picked stars.

mod picking_service;
mod viewport;

pub use picking_service::{PickingService, RayPicker};
pub use viewport::Viewport;
