use nalgebra::{UnitQuaternion, Vector3};

/// Pose of the single scene camera.
///
/// The camera looks down its local `-Z` axis with `+Y` as up, matching the
/// usual right-handed view convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    position: Vector3<f64>,
    orientation: UnitQuaternion<f64>,
}

impl CameraRig {
    const MIN_LOOK_DISTANCE: f64 = 1e-9;
    const PARALLEL_TOL: f64 = 1e-9;

    pub fn new(position: Vector3<f64>) -> Self {
        Self { position, orientation: UnitQuaternion::identity() }
    }

    pub fn with_orientation(position: Vector3<f64>, orientation: UnitQuaternion<f64>) -> Self {
        Self { position, orientation }
    }

    pub fn position(&self) -> Vector3<f64> { self.position }
    pub fn orientation(&self) -> UnitQuaternion<f64> { self.orientation }
    pub fn set_position(&mut self, position: Vector3<f64>) { self.position = position; }
    pub fn set_orientation(&mut self, orientation: UnitQuaternion<f64>) {
        self.orientation = orientation;
    }

    /// Unit vector the camera is looking along.
    pub fn forward(&self) -> Vector3<f64> { self.orientation * -Vector3::z() }

    /// Turns the camera to face `target`. Does nothing if the camera sits on the target.
    pub fn look_at(&mut self, target: &Vector3<f64>) {
        if let Some(rot) = Self::look_rotation(&self.position, target) {
            self.orientation = rot;
        }
    }

    /// Orientation that makes a camera at `eye` look straight at `target`.
    ///
    /// # Returns
    /// - `None` if `eye` and `target` coincide or are not finite.
    pub fn look_rotation(eye: &Vector3<f64>, target: &Vector3<f64>) -> Option<UnitQuaternion<f64>> {
        let dir = target - eye;
        let dist = dir.norm();
        if !dist.is_finite() || dist < Self::MIN_LOOK_DISTANCE {
            return None;
        }
        let dir = dir / dist;
        // looking straight up or down leaves +Y undefined as up vector
        let up = if dir.cross(&Vector3::y()).norm() < Self::PARALLEL_TOL {
            Vector3::z()
        } else {
            Vector3::y()
        };
        Some(UnitQuaternion::face_towards(&-dir, &up))
    }
}
