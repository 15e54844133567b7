use super::{
    camera_state::CameraRig,
    common::{ease_out_quint, frame_independent_alpha},
    flight_plan::FlightPlan,
    orbit_controls::OrbitControls,
};
use crate::catalog::StarEntity;
use crate::config::NavConfig;
use std::{sync::Arc, time::Duration};

/// Outcome of one flight step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightProgress {
    /// Still travelling; carries the eased path progress.
    InFlight(f64),
    /// The camera reached the stop point.
    Complete,
}

/// Moves the camera along a flight plan.
///
/// Raw progress `t` grows linearly with elapsed time and is eased with a
/// quintic ease-out into the path progress `u`, which is clamped at `1` so the
/// camera never passes the stop point. Once `u` exceeds the pre-aim threshold
/// the orbit controls' look target starts drifting towards the star.
#[derive(Debug, Clone)]
pub struct FlightController {
    plan: FlightPlan,
    star: Arc<StarEntity>,
    t: f64,
    u: f64,
    flight_rate: f64,
    pre_aim_threshold: f64,
    target_follow: f64,
    reference_hz: f64,
}

impl FlightController {
    pub fn new(plan: FlightPlan, star: Arc<StarEntity>, cfg: &NavConfig) -> Self {
        Self {
            plan,
            star,
            t: 0.0,
            u: 0.0,
            flight_rate: cfg.flight_rate,
            pre_aim_threshold: cfg.pre_aim_threshold,
            target_follow: cfg.target_follow,
            reference_hz: cfg.reference_hz,
        }
    }

    pub fn plan(&self) -> &FlightPlan { &self.plan }
    pub fn star(&self) -> &Arc<StarEntity> { &self.star }
    /// Linear progress, unbounded above.
    pub fn raw_progress(&self) -> f64 { self.t }
    /// Eased path progress in `[0, 1]`.
    pub fn path_progress(&self) -> f64 { self.u }
    pub fn is_complete(&self) -> bool { self.u >= 1.0 }

    /// Advances the flight by `dt` of elapsed time.
    pub fn advance(
        &mut self,
        dt: Duration,
        camera: &mut CameraRig,
        controls: &mut OrbitControls,
    ) -> FlightProgress {
        let dt_secs = dt.as_secs_f64();
        self.t += dt_secs * self.flight_rate;
        self.u = if self.t < 1.0 { ease_out_quint(self.t) } else { 1.0 };
        camera.set_position(self.plan.position_at(self.u));

        if self.u > self.pre_aim_threshold {
            let alpha = frame_independent_alpha(self.target_follow, self.reference_hz, dt_secs);
            controls.lerp_target(&self.plan.target(), alpha);
        }

        if self.is_complete() { FlightProgress::Complete } else { FlightProgress::InFlight(self.u) }
    }
}
