use super::{
    camera_state::CameraRig, common::frame_independent_alpha, orbit_controls::OrbitControls,
};
use crate::config::NavConfig;
use nalgebra::{UnitQuaternion, Vector3};
use std::time::Duration;

/// Arrival and look-at orientations of a settle, plus its progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleTransform {
    start: UnitQuaternion<f64>,
    end: UnitQuaternion<f64>,
    progress: f64,
}

impl SettleTransform {
    const SLERP_EPS: f64 = 1e-9;

    pub fn new(start: UnitQuaternion<f64>, end: UnitQuaternion<f64>) -> Self {
        Self { start, end, progress: 0.0 }
    }

    pub fn start(&self) -> UnitQuaternion<f64> { self.start }
    pub fn end(&self) -> UnitQuaternion<f64> { self.end }
    pub fn progress(&self) -> f64 { self.progress }

    /// Shortest-arc interpolation between the two orientations.
    ///
    /// Exactly `start` at `progress <= 0` and exactly `end` at `progress >= 1`.
    pub fn orientation_at(&self, progress: f64) -> UnitQuaternion<f64> {
        if progress.is_nan() || progress <= 0.0 {
            return self.start;
        }
        if progress >= 1.0 {
            return self.end;
        }
        self.start
            .try_slerp(&self.end, progress, Self::SLERP_EPS)
            // orientations too close to interpolate
            .unwrap_or(self.end)
    }

    fn advance(&mut self, step: f64) -> UnitQuaternion<f64> {
        self.progress = (self.progress + step).min(1.0);
        self.orientation_at(self.progress)
    }
}

/// Outcome of one settle step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettleProgress {
    Settling(f64),
    Complete,
}

/// Rotates the camera from its arrival attitude to look straight at the target.
#[derive(Debug, Clone)]
pub struct OrientationSettler {
    transform: SettleTransform,
    target: Vector3<f64>,
    settle_rate: f64,
    target_follow: f64,
    reference_hz: f64,
}

impl OrientationSettler {
    /// Captures the camera's current orientation and the orientation looking at
    /// `target`. The live orientation is left untouched, so settling starts from
    /// the attitude the camera actually arrived with.
    pub fn begin(camera: &CameraRig, target: Vector3<f64>, cfg: &NavConfig) -> Self {
        let start = camera.orientation();
        let end = CameraRig::look_rotation(&camera.position(), &target).unwrap_or(start);
        Self {
            transform: SettleTransform::new(start, end),
            target,
            settle_rate: cfg.settle_rate,
            target_follow: cfg.target_follow,
            reference_hz: cfg.reference_hz,
        }
    }

    pub fn transform(&self) -> &SettleTransform { &self.transform }
    pub fn target(&self) -> Vector3<f64> { self.target }
    pub fn progress(&self) -> f64 { self.transform.progress() }

    /// Advances the settle by `dt` of elapsed time.
    pub fn advance(
        &mut self,
        dt: Duration,
        camera: &mut CameraRig,
        controls: &mut OrbitControls,
    ) -> SettleProgress {
        let dt_secs = dt.as_secs_f64();
        camera.set_orientation(self.transform.advance(dt_secs * self.settle_rate));
        let alpha = frame_independent_alpha(self.target_follow, self.reference_hz, dt_secs);
        controls.lerp_target(&self.target, alpha);

        if self.transform.progress() >= 1.0 {
            SettleProgress::Complete
        } else {
            SettleProgress::Settling(self.transform.progress())
        }
    }
}
