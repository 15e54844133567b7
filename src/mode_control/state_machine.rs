use super::{
    navigation_mode::NavigationMode,
    signal::{PickSignal, TickSignal},
};
use crate::catalog::StarEntity;
use crate::config::NavConfig;
use crate::flight_control::{
    CameraRig, FlightController, FlightPlan, FlightProgress, OrbitControls, OrientationSettler,
    PathPlanner, SettleProgress, SettleTransform,
};
use crate::overlay::{OverlaySink, StarReport};
use crate::picking::{PickingService, Viewport};
use crate::{event, log, warn};
use nalgebra::Vector3;
use std::{sync::Arc, time::Duration};

/// Active phase together with the data only that phase owns.
#[derive(Debug)]
enum NavPhase {
    Idle,
    Flying(FlightController),
    Settling { settler: OrientationSettler, star: Arc<StarEntity> },
}

impl NavPhase {
    fn mode(&self) -> NavigationMode {
        match self {
            NavPhase::Idle => NavigationMode::Idle,
            NavPhase::Flying(_) => NavigationMode::Flying,
            NavPhase::Settling { .. } => NavigationMode::Settling,
        }
    }
}

/// Navigation session of the single scene camera.
///
/// Owns the camera pose, the orbit controls and the viewport, and moves
/// through `Idle -> Flying -> Settling -> Idle`:
///
/// | from     | event                  | to       | effect                                   |
/// |----------|------------------------|----------|------------------------------------------|
/// | Idle     | pick, plan ok          | Flying   | orbit controls disabled                  |
/// | Idle     | pick, degenerate plan  | Idle     | none                                     |
/// | Flying   | path progress reaches 1| Settling | orientations captured, overlay notified  |
/// | Settling | settle progress hits 1 | Idle     | orbit controls enabled                   |
/// | Flying/Settling | pick            | same     | pick dropped                             |
/// | Flying/Settling | `cancel`        | Idle     | orbit controls enabled, no overlay       |
///
/// The overlay fires when settling starts, while the camera is still turning.
/// All mutation happens on `on_*` calls from the render tick; nothing here
/// blocks or runs concurrently.
pub struct NavigationStateMachine<S: OverlaySink> {
    config: NavConfig,
    planner: PathPlanner,
    camera: CameraRig,
    controls: OrbitControls,
    viewport: Viewport,
    phase: NavPhase,
    sink: S,
}

impl<S: OverlaySink> NavigationStateMachine<S> {
    /// Creates an idle session with the camera orbiting `look_target`.
    pub fn new(
        config: NavConfig,
        camera_position: Vector3<f64>,
        look_target: Vector3<f64>,
        viewport: Viewport,
        sink: S,
    ) -> Self {
        let mut camera = CameraRig::new(camera_position);
        let mut controls = OrbitControls::new(look_target);
        controls.update(&mut camera);
        Self {
            planner: PathPlanner::from(&config),
            config,
            camera,
            controls,
            viewport,
            phase: NavPhase::Idle,
            sink,
        }
    }

    pub fn mode(&self) -> NavigationMode { self.phase.mode() }
    pub fn config(&self) -> &NavConfig { &self.config }
    pub fn camera(&self) -> &CameraRig { &self.camera }
    pub fn controls(&self) -> &OrbitControls { &self.controls }
    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn sink(&self) -> &S { &self.sink }
    pub fn sink_mut(&mut self) -> &mut S { &mut self.sink }

    /// Plan of the flight in progress.
    pub fn active_plan(&self) -> Option<&FlightPlan> {
        match &self.phase {
            NavPhase::Flying(flight) => Some(flight.plan()),
            _ => None,
        }
    }

    /// Orientation pair of the settle in progress.
    pub fn settle_transform(&self) -> Option<&SettleTransform> {
        match &self.phase {
            NavPhase::Settling { settler, .. } => Some(settler.transform()),
            _ => None,
        }
    }

    /// Star currently being travelled to or settled on.
    pub fn destination(&self) -> Option<&Arc<StarEntity>> {
        match &self.phase {
            NavPhase::Idle => None,
            NavPhase::Flying(flight) => Some(flight.star()),
            NavPhase::Settling { star, .. } => Some(star),
        }
    }

    /// Debug path to draw while flying; `None` once the flight has ended.
    pub fn path_preview(&self) -> Option<Vec<Vector3<f64>>> {
        self.active_plan().map(|plan| plan.preview(self.config.path_preview_points))
    }

    /// Offers a picked star. Starts a flight only while idle.
    pub fn on_pick_event(&mut self, star: Arc<StarEntity>) -> PickSignal {
        let mode = self.mode();
        if !mode.accepts_picks() {
            warn!("Dropping pick of {} while {mode}", star.name());
            return PickSignal::Dropped(mode);
        }
        match self.planner.plan(self.camera.position(), star.position()) {
            Ok(plan) => {
                log!(
                    "Flying to {} ({:.1} units, stopping {:.1} short)",
                    star.name(),
                    (plan.target() - plan.start()).norm(),
                    self.planner.clearance()
                );
                let flight = FlightController::new(plan, star, &self.config);
                self.enter(NavPhase::Flying(flight));
                PickSignal::Accepted
            }
            Err(e) => {
                warn!("Cannot fly to {}: {e}", star.name());
                PickSignal::Degenerate(e)
            }
        }
    }

    /// Handles a click at pixel `(px, py)`. Busy sessions skip picking entirely.
    pub fn on_click<P: PickingService + ?Sized>(&mut self, px: f64, py: f64, picker: &P) -> PickSignal {
        let mode = self.mode();
        if !mode.accepts_picks() {
            event!("Ignoring click at ({px:.0}, {py:.0}) while {mode}");
            return PickSignal::Dropped(mode);
        }
        let ndc = self.viewport.to_ndc(px, py);
        match picker.pick(&self.camera, &self.viewport, ndc) {
            Some(star) => self.on_pick_event(star),
            None => PickSignal::Miss,
        }
    }

    /// Queues orbit input; ignored unless idle.
    pub fn on_orbit_input(&mut self, d_azimuth: f64, d_polar: f64) {
        self.controls.rotate(d_azimuth, d_polar);
    }

    /// Queues zoom input; ignored unless idle.
    pub fn on_zoom(&mut self, scale: f64) { self.controls.dolly(scale); }

    /// Applies a window resize. Independent of navigation mode.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport.resize(width, height);
        event!("Viewport resized to {width}x{height} while {}", self.mode());
    }

    /// Advances the session by `dt` of elapsed time.
    pub fn on_tick(&mut self, dt: Duration) -> TickSignal {
        match &mut self.phase {
            NavPhase::Idle => {
                self.controls.update(&mut self.camera);
                TickSignal::Idle
            }
            NavPhase::Flying(flight) => {
                match flight.advance(dt, &mut self.camera, &mut self.controls) {
                    FlightProgress::InFlight(u) => {
                        event!("Flight progress {u:.3}");
                        TickSignal::Flying(u)
                    }
                    FlightProgress::Complete => {
                        self.arrive();
                        TickSignal::Arrived
                    }
                }
            }
            NavPhase::Settling { settler, .. } => {
                match settler.advance(dt, &mut self.camera, &mut self.controls) {
                    SettleProgress::Settling(p) => {
                        event!("Settle progress {p:.3}");
                        TickSignal::Settling(p)
                    }
                    SettleProgress::Complete => {
                        self.enter(NavPhase::Idle);
                        TickSignal::Settled
                    }
                }
            }
        }
    }

    /// Aborts a flight or settle and returns to free control. No overlay event
    /// fires for an aborted flight.
    ///
    /// # Returns
    /// - `false` if the session was already idle.
    pub fn cancel(&mut self) -> bool {
        if self.mode() == NavigationMode::Idle {
            return false;
        }
        if let Some(star) = self.destination() {
            warn!("Navigation to {} cancelled while {}", star.name(), self.mode());
        }
        self.enter(NavPhase::Idle);
        true
    }

    /// Ends the flight: captures the settle orientations, then notifies the overlay.
    fn arrive(&mut self) {
        let star = match &self.phase {
            NavPhase::Flying(flight) => Arc::clone(flight.star()),
            _ => return,
        };
        let settler = OrientationSettler::begin(&self.camera, star.position(), &self.config);
        self.enter(NavPhase::Settling { settler, star: Arc::clone(&star) });
        self.sink.show(&StarReport::from(star.as_ref()));
    }

    fn enter(&mut self, next: NavPhase) {
        let (from, to) = (self.mode(), next.mode());
        debug_assert!(from.can_abort_to(to), "illegal navigation transition {from} -> {to}");
        log!("Navigation {from} -> {to}");
        self.phase = next;
        self.controls.set_enabled(to.orbit_control_active());
    }
}
