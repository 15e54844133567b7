use super::camera_state::CameraRig;
use nalgebra::Vector3;
use std::f64::consts::PI;

/// Free orbit control around a look target.
///
/// Input accumulates as a spherical delta that is applied with damping on
/// every `update`, so motion eases out after the user lets go. While disabled
/// all input is discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    enabled: bool,
    target: Vector3<f64>,
    damping_factor: f64,
    min_distance: f64,
    max_distance: f64,
    /// Pending azimuth change in radians.
    delta_azimuth: f64,
    /// Pending polar change in radians.
    delta_polar: f64,
    /// Pending distance multiplier.
    scale: f64,
}

impl Default for OrbitControls {
    fn default() -> Self { Self::new(Vector3::zeros()) }
}

impl OrbitControls {
    pub const DEFAULT_DAMPING: f64 = 0.06;
    pub const DEFAULT_MIN_DISTANCE: f64 = 0.5;
    pub const DEFAULT_MAX_DISTANCE: f64 = 500.0;
    const POLAR_EPS: f64 = 1e-6;

    pub fn new(target: Vector3<f64>) -> Self {
        Self {
            enabled: true,
            target,
            damping_factor: Self::DEFAULT_DAMPING,
            min_distance: Self::DEFAULT_MIN_DISTANCE,
            max_distance: Self::DEFAULT_MAX_DISTANCE,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
            scale: 1.0,
        }
    }

    pub fn is_enabled(&self) -> bool { self.enabled }
    pub fn target(&self) -> Vector3<f64> { self.target }
    pub fn set_target(&mut self, target: Vector3<f64>) { self.target = target; }
    pub fn distance_limits(&self) -> (f64, f64) { (self.min_distance, self.max_distance) }

    /// Enables or disables user input. Disabling drops any pending motion.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset_motion();
        }
    }

    /// Moves the look target a fraction `alpha` of the way towards `goal`.
    pub fn lerp_target(&mut self, goal: &Vector3<f64>, alpha: f64) {
        self.target = self.target.lerp(goal, alpha.clamp(0.0, 1.0));
    }

    /// Queues an orbit around the target.
    pub fn rotate(&mut self, d_azimuth: f64, d_polar: f64) {
        if self.enabled {
            self.delta_azimuth += d_azimuth;
            self.delta_polar += d_polar;
        }
    }

    /// Queues a distance change; `scale < 1` moves closer.
    pub fn dolly(&mut self, scale: f64) {
        if self.enabled && scale.is_finite() && scale > 0.0 {
            self.scale *= scale;
        }
    }

    /// Applies pending motion to `camera`, keeps it within the distance limits
    /// and points it at the target.
    pub fn update(&mut self, camera: &mut CameraRig) {
        let offset = camera.position() - self.target;
        let mut radius = offset.norm();
        let (mut azimuth, mut polar) = if radius > 0.0 {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, PI / 2.0)
        };

        azimuth += self.delta_azimuth * self.damping_factor;
        polar = (polar + self.delta_polar * self.damping_factor)
            .clamp(Self::POLAR_EPS, PI - Self::POLAR_EPS);
        radius = (radius * self.scale).clamp(self.min_distance, self.max_distance);

        let sin_polar = polar.sin();
        let new_offset = Vector3::new(
            radius * sin_polar * azimuth.sin(),
            radius * polar.cos(),
            radius * sin_polar * azimuth.cos(),
        );
        camera.set_position(self.target + new_offset);
        camera.look_at(&self.target);

        self.delta_azimuth *= 1.0 - self.damping_factor;
        self.delta_polar *= 1.0 - self.damping_factor;
        self.scale = 1.0;
    }

    fn reset_motion(&mut self) {
        self.delta_azimuth = 0.0;
        self.delta_polar = 0.0;
        self.scale = 1.0;
    }
}
