use super::common::CatmullRomCurve;
use crate::config::NavConfig;
use nalgebra::Vector3;
use strum_macros::Display;

/// Reasons a flight between two points cannot be planned.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateFlightError {
    /// Start and target coincide, the approach direction is undefined.
    Coincident,
    /// An input is not finite.
    Unresolvable,
}

impl std::error::Error for DegenerateFlightError {}

/// Geometry of a single flight.
///
/// The camera stops `clearance` units short of the target on the line from
/// the start towards it and travels along an arc raised above the straight
/// connection.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    start: Vector3<f64>,
    stop: Vector3<f64>,
    control_point: Vector3<f64>,
    target: Vector3<f64>,
    curve: CatmullRomCurve,
}

impl FlightPlan {
    pub fn start(&self) -> Vector3<f64> { self.start }
    pub fn stop(&self) -> Vector3<f64> { self.stop }
    pub fn control_point(&self) -> Vector3<f64> { self.control_point }
    pub fn target(&self) -> Vector3<f64> { self.target }
    pub fn curve(&self) -> &CatmullRomCurve { &self.curve }

    /// Camera position at normalized path progress `u ∈ [0, 1]`.
    pub fn position_at(&self, u: f64) -> Vector3<f64> { self.curve.point_at(u) }

    /// Evenly spaced points along the path for drawing a debug line.
    pub fn preview(&self, segments: usize) -> Vec<Vector3<f64>> { self.curve.spaced_points(segments) }
}

/// Computes flight plans from the camera's position to a target star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPlanner {
    clearance: f64,
    arc_lift: f64,
    arc_length_divisions: usize,
}

impl From<&NavConfig> for PathPlanner {
    fn from(cfg: &NavConfig) -> Self {
        Self::new(cfg.clearance, cfg.arc_lift, cfg.arc_length_divisions)
    }
}

impl PathPlanner {
    /// Below this separation start and target count as the same point.
    pub const MIN_SEPARATION: f64 = 1e-9;

    pub fn new(clearance: f64, arc_lift: f64, arc_length_divisions: usize) -> Self {
        Self { clearance, arc_lift, arc_length_divisions }
    }

    pub fn clearance(&self) -> f64 { self.clearance }
    pub fn arc_lift(&self) -> f64 { self.arc_lift }

    /// Plans the flight from `start` to a stop point in front of `target`.
    ///
    /// # Arguments
    /// - `start`: Current camera position.
    /// - `target`: Position of the star to fly to.
    ///
    /// # Returns
    /// - The flight plan, or a `DegenerateFlightError` if no approach
    ///   direction exists.
    pub fn plan(
        &self,
        start: Vector3<f64>,
        target: Vector3<f64>,
    ) -> Result<FlightPlan, DegenerateFlightError> {
        if !start.iter().chain(target.iter()).all(|c| c.is_finite()) {
            return Err(DegenerateFlightError::Unresolvable);
        }
        let offset = target - start;
        let distance = offset.norm();
        if !distance.is_finite() {
            return Err(DegenerateFlightError::Unresolvable);
        }
        if distance < Self::MIN_SEPARATION {
            return Err(DegenerateFlightError::Coincident);
        }
        let direction = offset / distance;
        let stop = target - direction * self.clearance;
        let control_point = (start + stop) * 0.5 + Vector3::y() * self.arc_lift;
        if !stop.iter().chain(control_point.iter()).all(|c| c.is_finite()) {
            return Err(DegenerateFlightError::Unresolvable);
        }
        let curve = CatmullRomCurve::new(vec![start, control_point, stop], self.arc_length_divisions);
        Ok(FlightPlan { start, stop, control_point, target, curve })
    }
}
