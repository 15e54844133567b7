//! Headless tour: a tick loop that keeps clicking random stars.

use crate::catalog::StarCatalog;
use crate::config::{NavConfig, SessionConfig};
use crate::mode_control::{NavigationStateMachine, PickSignal, TickSignal};
use crate::overlay::OverlaySink;
use crate::picking::{RayPicker, Viewport};
use crate::{event, info, log, warn};
use nalgebra::Vector3;
use rand::Rng;
use std::sync::Arc;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

/// How a tour ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TourSummary {
    /// Completed flights, counted when settling finished.
    pub stops: usize,
    pub ticks: u64,
    /// Whether the tour was stopped from outside before reaching all stops.
    pub cancelled: bool,
}

/// Drives a navigation session from a fixed-rate tick loop, standing in for
/// the display refresh callback and the user's clicks.
pub struct TourSession<S: OverlaySink> {
    nav: NavigationStateMachine<S>,
    picker: RayPicker,
    tick_interval: std::time::Duration,
    tour_stops: usize,
}

impl<S: OverlaySink> TourSession<S> {
    const START_POSITION: [f64; 3] = [0.0, 0.0, 8.0];

    pub fn new(nav_cfg: NavConfig, cfg: &SessionConfig, catalog: Arc<StarCatalog>, sink: S) -> Self {
        let (width, height) = cfg.viewport;
        let nav = NavigationStateMachine::new(
            nav_cfg,
            Vector3::from(Self::START_POSITION),
            Vector3::zeros(),
            Viewport::new(width, height),
            sink,
        );
        Self {
            nav,
            picker: RayPicker::new(catalog),
            tick_interval: cfg.tick_interval(),
            tour_stops: cfg.tour_stops,
        }
    }

    pub fn navigation(&self) -> &NavigationStateMachine<S> { &self.nav }

    /// Runs until `tour_stops` flights have settled or `c_tok` is cancelled.
    pub async fn run(&mut self, c_tok: CancellationToken) -> TourSummary {
        let mut summary = TourSummary { stops: 0, ticks: 0, cancelled: false };
        if self.tour_stops == 0 || self.picker.catalog().is_empty() {
            warn!("Nothing to tour: {} stars, {} stops", self.picker.catalog().len(), self.tour_stops);
            return summary;
        }
        info!(
            "Touring {} of {} stars at {:.0} Hz",
            self.tour_stops,
            self.picker.catalog().len(),
            1.0 / self.tick_interval.as_secs_f64()
        );

        let mut interval = tokio::time::interval(self.tick_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last_tick = Instant::now();
        loop {
            tokio::select! {
                () = c_tok.cancelled() => {
                    warn!("Tour cancelled after {} of {} stops", summary.stops, self.tour_stops);
                    summary.cancelled = true;
                    break;
                }
                now = interval.tick() => {
                    let dt = now.saturating_duration_since(last_tick);
                    last_tick = now;
                    summary.ticks += 1;
                    match self.nav.on_tick(dt) {
                        TickSignal::Idle => self.visit_random_star(),
                        TickSignal::Settled => {
                            summary.stops += 1;
                            log!("Tour stop {}/{} reached", summary.stops, self.tour_stops);
                            if summary.stops >= self.tour_stops {
                                break;
                            }
                        }
                        TickSignal::Flying(_) | TickSignal::Arrived | TickSignal::Settling(_) => (),
                    }
                }
            }
        }
        summary
    }

    /// Clicks a random star where it appears on screen, or picks it directly
    /// when it is out of view.
    fn visit_random_star(&mut self) {
        let catalog = Arc::clone(self.picker.catalog());
        let idx = rand::rng().random_range(0..catalog.len());
        let star = Arc::clone(&catalog.stars()[idx]);

        let viewport = self.nav.viewport();
        let on_screen = viewport
            .project(self.nav.camera(), &star.position())
            .filter(|(px, py)| viewport.contains(*px, *py));
        let signal = match on_screen {
            Some((px, py)) => {
                event!("Clicking {} at ({px:.0}, {py:.0})", star.name());
                match self.nav.on_click(px, py, &self.picker) {
                    PickSignal::Miss => self.nav.on_pick_event(star),
                    signal => signal,
                }
            }
            None => self.nav.on_pick_event(star),
        };
        event!("Pick result: {signal:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarEntity;
    use crate::overlay::StarReport;
    use std::time::Duration;

    fn fast_nav() -> NavConfig {
        NavConfig { flight_rate: 25.0, settle_rate: 60.0, ..NavConfig::default() }
    }

    fn session_cfg(tour_stops: usize) -> SessionConfig {
        SessionConfig { tick_hz: 400.0, tour_stops, ..SessionConfig::default() }
    }

    fn catalog() -> Arc<StarCatalog> {
        let stars = [("Vega", 0.0, 0.0, 0.0), ("Altair", 40.0, 5.0, -10.0), ("Deneb", -30.0, 20.0, 60.0)]
            .into_iter()
            .map(|(name, x, y, z)| {
                StarEntity::new(name, Vector3::new(x, y, z), Some(String::from("A0V")), 25.0, 9600.0, 2.4, 40.0, 2.1)
            })
            .collect();
        Arc::new(StarCatalog::from_stars(stars).unwrap())
    }

    #[tokio::test]
    async fn test_tour_reaches_all_stops() {
        let mut session = TourSession::new(fast_nav(), &session_cfg(2), catalog(), Vec::<StarReport>::new());
        let summary = session.run(CancellationToken::new()).await;
        assert_eq!(summary.stops, 2);
        assert!(!summary.cancelled);
        assert_eq!(session.navigation().sink().len(), 2);
        assert!(session.navigation().controls().is_enabled());
    }

    #[tokio::test]
    async fn test_tour_stops_on_cancel() {
        let mut session =
            TourSession::new(NavConfig::default(), &session_cfg(5), catalog(), Vec::<StarReport>::new());
        let c_tok = CancellationToken::new();
        let watchdog = {
            let c_tok = c_tok.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(100)).await;
                c_tok.cancel();
            })
        };
        let summary = session.run(c_tok).await;
        watchdog.await.unwrap();
        assert!(summary.cancelled);
        assert_eq!(summary.stops, 0);
        assert!(summary.ticks > 0);
        assert!(session.navigation().sink().is_empty());
    }

    #[tokio::test]
    async fn test_empty_tour_returns_immediately() {
        let empty = Arc::new(StarCatalog::default());
        let mut session = TourSession::new(fast_nav(), &session_cfg(3), empty, Vec::<StarReport>::new());
        let summary = session.run(CancellationToken::new()).await;
        assert_eq!(summary, TourSummary { stops: 0, ticks: 0, cancelled: false });
    }
}
