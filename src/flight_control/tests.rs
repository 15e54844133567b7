use super::{
    CameraRig, DegenerateFlightError, FlightController, FlightProgress, OrbitControls,
    OrientationSettler, PathPlanner, SettleProgress, SettleTransform,
};
use crate::catalog::StarEntity;
use crate::config::NavConfig;
use approx::assert_relative_eq;
use nalgebra::{UnitQuaternion, Vector3};
use rand::Rng;
use std::{f64::consts::PI, sync::Arc, time::Duration};

const FRAME: Duration = Duration::from_nanos(16_666_667);

fn get_rand_pos() -> Vector3<f64> {
    let mut rng = rand::rng();
    Vector3::new(
        rng.random_range(-500.0..500.0),
        rng.random_range(-500.0..500.0),
        rng.random_range(-500.0..500.0),
    )
}

fn get_rand_orientation() -> UnitQuaternion<f64> {
    let mut rng = rand::rng();
    UnitQuaternion::from_euler_angles(
        rng.random_range(-PI..PI),
        rng.random_range(-PI / 2.0..PI / 2.0),
        rng.random_range(-PI..PI),
    )
}

fn test_star(position: Vector3<f64>) -> Arc<StarEntity> {
    Arc::new(StarEntity::new("Test", position, Some("G2V".into()), 1.0, 5772.0, 1.0, 1.0, 1.0))
}

fn planner() -> PathPlanner { PathPlanner::from(&NavConfig::default()) }

#[test]
fn test_stop_point_keeps_clearance_along_approach() {
    let planner = planner();
    for _ in 0..200 {
        let (start, target) = (get_rand_pos(), get_rand_pos());
        let plan = planner.plan(start, target).unwrap();
        assert_relative_eq!((target - plan.stop()).norm(), 2.2, epsilon = 1e-9);
        let approach = (target - start).normalize();
        let back_off = (target - plan.stop()).normalize();
        assert_relative_eq!(approach, back_off, epsilon = 1e-9);
    }
}

#[test]
fn test_control_point_is_raised_midpoint() {
    let plan = planner().plan(Vector3::new(0.0, 0.0, 8.0), Vector3::new(10.0, 0.0, 0.0)).unwrap();
    let expected = (plan.start() + plan.stop()) / 2.0 + Vector3::new(0.0, 2.0, 0.0);
    assert_relative_eq!(plan.control_point(), expected, epsilon = 1e-12);
    assert_eq!(plan.target(), Vector3::new(10.0, 0.0, 0.0));
}

#[test]
fn test_plan_endpoints_are_exact() {
    let planner = planner();
    for _ in 0..50 {
        let (start, target) = (get_rand_pos(), get_rand_pos());
        let plan = planner.plan(start, target).unwrap();
        assert_eq!(plan.position_at(0.0), start);
        assert_eq!(plan.position_at(1.0), plan.stop());
        let preview = plan.preview(150);
        assert_eq!(preview.len(), 151);
        assert_eq!(preview.first().copied(), Some(start));
        assert_eq!(preview.last().copied(), Some(plan.stop()));
    }
}

#[test]
fn test_degenerate_flights_are_rejected() {
    let planner = planner();
    let p = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(planner.plan(p, p).unwrap_err(), DegenerateFlightError::Coincident);
    assert_eq!(
        planner.plan(p, p + Vector3::new(1e-12, 0.0, 0.0)).unwrap_err(),
        DegenerateFlightError::Coincident
    );
    assert_eq!(
        planner.plan(p, Vector3::new(f64::NAN, 0.0, 0.0)).unwrap_err(),
        DegenerateFlightError::Unresolvable
    );
    assert_eq!(
        planner.plan(Vector3::new(f64::INFINITY, 0.0, 0.0), p).unwrap_err(),
        DegenerateFlightError::Unresolvable
    );
}

#[test]
fn test_non_finite_clearance_is_unresolvable() {
    let start = Vector3::new(0.0, 0.0, 8.0);
    let target = Vector3::new(10.0, 0.0, 0.0);
    for clearance in [f64::INFINITY, f64::NAN] {
        let planner = PathPlanner::new(clearance, 2.0, 200);
        assert_eq!(planner.plan(start, target).unwrap_err(), DegenerateFlightError::Unresolvable);
    }
    let planner = PathPlanner::new(2.2, f64::INFINITY, 200);
    assert_eq!(planner.plan(start, target).unwrap_err(), DegenerateFlightError::Unresolvable);
}

#[test]
fn test_flight_follows_curve_and_never_overshoots() {
    let cfg = NavConfig::default();
    let target = Vector3::new(10.0, 0.0, 0.0);
    let mut camera = CameraRig::new(Vector3::new(0.0, 0.0, 8.0));
    let mut controls = OrbitControls::default();
    let plan = planner().plan(camera.position(), target).unwrap();
    let mut flight = FlightController::new(plan.clone(), test_star(target), &cfg);

    let mut last_u = 0.0;
    let mut ticks = 0;
    loop {
        ticks += 1;
        let progress = flight.advance(FRAME, &mut camera, &mut controls);
        let u = flight.path_progress();
        assert!(u >= last_u, "path progress went backwards at tick {ticks}");
        assert!(u <= 1.0);
        assert_eq!(camera.position(), plan.position_at(u));
        last_u = u;
        if progress == FlightProgress::Complete {
            break;
        }
        assert!(ticks < 1000, "flight never completed");
    }
    // 0.24 per second at 60 Hz is 0.004 per tick
    assert!((249..=252).contains(&ticks), "flight took {ticks} ticks");
    assert_eq!(camera.position(), plan.stop());
    assert!(flight.is_complete());
}

#[test]
fn test_flight_progress_is_frame_rate_independent() {
    let cfg = NavConfig::default();
    let target = Vector3::new(40.0, 5.0, -20.0);
    let run = |hz: u32| {
        let mut camera = CameraRig::new(Vector3::new(0.0, 0.0, 8.0));
        let mut controls = OrbitControls::default();
        let plan = planner().plan(camera.position(), target).unwrap();
        let mut flight = FlightController::new(plan, test_star(target), &cfg);
        let step = Duration::from_secs(1) / hz;
        for _ in 0..(3 * hz) {
            flight.advance(step, &mut camera, &mut controls);
        }
        (flight.path_progress(), camera.position(), controls.target())
    };
    let (u30, pos30, aim30) = run(30);
    let (u120, pos120, aim120) = run(120);
    assert_relative_eq!(u30, u120, epsilon = 1e-6);
    assert_relative_eq!(pos30, pos120, epsilon = 1e-4);
    assert_relative_eq!(aim30, aim120, epsilon = 0.05);
}

#[test]
fn test_look_target_is_pre_aimed_late_in_flight() {
    let cfg = NavConfig::default();
    let target = Vector3::new(10.0, 0.0, 0.0);
    let mut camera = CameraRig::new(Vector3::new(0.0, 0.0, 8.0));
    let mut controls = OrbitControls::default();
    let plan = planner().plan(camera.position(), target).unwrap();
    let mut flight = FlightController::new(plan, test_star(target), &cfg);

    while flight.advance(FRAME, &mut camera, &mut controls) != FlightProgress::Complete {
        if flight.path_progress() <= cfg.pre_aim_threshold {
            assert_eq!(controls.target(), Vector3::zeros());
        }
    }
    let aimed = controls.target();
    assert!(aimed.x > 0.0 && aimed.x < 10.0, "look target did not move towards star: {aimed}");
}

#[test]
fn test_settle_transform_endpoints() {
    for _ in 0..100 {
        let (a, b) = (get_rand_orientation(), get_rand_orientation());
        let settle = SettleTransform::new(a, b);
        assert_eq!(settle.orientation_at(0.0), a);
        assert_eq!(settle.orientation_at(1.0), b);
        assert_eq!(settle.orientation_at(-0.5), a);
        assert_eq!(settle.orientation_at(7.0), b);
    }
}

#[test]
fn test_settle_transform_is_monotonic_shortest_arc() {
    for _ in 0..100 {
        let (a, b) = (get_rand_orientation(), get_rand_orientation());
        let settle = SettleTransform::new(a, b);
        let total = a.angle_to(&b);
        assert!(total <= PI + 1e-9);
        let mut last = 0.0;
        for i in 1..=50 {
            let p = f64::from(i) / 50.0;
            let q = settle.orientation_at(p);
            let travelled = a.angle_to(&q);
            assert!(travelled + 1e-9 >= last, "slerp moved backwards at {p}");
            assert_relative_eq!(travelled, total * p, epsilon = 1e-6);
            last = travelled;
        }
    }
}

#[test]
fn test_settler_ends_looking_at_target() {
    let cfg = NavConfig::default();
    let arrival = get_rand_orientation();
    let target = Vector3::new(10.0, 0.0, 0.0);
    let mut camera = CameraRig::with_orientation(Vector3::new(8.0, 1.0, 1.0), arrival);
    let mut controls = OrbitControls::default();
    let mut settler = OrientationSettler::begin(&camera, target, &cfg);

    // capturing leaves the live orientation untouched
    assert_eq!(camera.orientation(), arrival);
    assert_eq!(settler.transform().start(), arrival);

    let mut ticks = 0;
    while settler.advance(FRAME, &mut camera, &mut controls) != SettleProgress::Complete {
        ticks += 1;
        assert!(ticks < 200, "settle never completed");
    }
    // 1.2 per second at 60 Hz is 0.02 per tick
    assert!((48..=50).contains(&ticks), "settle took {ticks} ticks");
    assert_eq!(camera.orientation(), settler.transform().end());
    let expected = (target - camera.position()).normalize();
    assert_relative_eq!(camera.forward(), expected, epsilon = 1e-9);
    assert!(controls.target().x > 0.0);
}

#[test]
fn test_look_rotation() {
    let eye = Vector3::new(1.0, 2.0, 3.0);
    for target in [
        Vector3::new(5.0, 2.0, 3.0),
        Vector3::new(1.0, 10.0, 3.0),
        Vector3::new(1.0, -10.0, 3.0),
        Vector3::new(-4.0, 7.0, -9.0),
    ] {
        let rot = CameraRig::look_rotation(&eye, &target).unwrap();
        let forward = rot * -Vector3::z();
        assert_relative_eq!(forward, (target - eye).normalize(), epsilon = 1e-9);
    }
    assert!(CameraRig::look_rotation(&eye, &eye).is_none());

    let mut camera = CameraRig::new(Vector3::new(0.0, 0.0, 8.0));
    camera.look_at(&Vector3::zeros());
    assert_relative_eq!(camera.forward(), -Vector3::z(), epsilon = 1e-12);
    // level view keeps +Y up
    assert_relative_eq!(camera.orientation() * Vector3::y(), Vector3::y(), epsilon = 1e-12);
}

#[test]
fn test_orbit_controls_respect_enabled_flag() {
    let mut camera = CameraRig::new(Vector3::new(0.0, 0.0, 8.0));
    let mut controls = OrbitControls::default();
    controls.set_enabled(false);
    controls.rotate(1.0, 0.5);
    controls.dolly(0.5);
    controls.update(&mut camera);
    assert_relative_eq!(camera.position(), Vector3::new(0.0, 0.0, 8.0), epsilon = 1e-9);

    controls.set_enabled(true);
    controls.rotate(1.0, 0.0);
    controls.update(&mut camera);
    assert!(camera.position().x > 0.0);
    assert_relative_eq!(camera.position().norm(), 8.0, epsilon = 1e-9);
    assert_relative_eq!(camera.forward(), -camera.position().normalize(), epsilon = 1e-9);
}

#[test]
fn test_orbit_controls_clamp_distance_and_damp() {
    let mut camera = CameraRig::new(Vector3::new(0.0, 0.0, 8.0));
    let mut controls = OrbitControls::default();
    controls.dolly(1000.0);
    controls.update(&mut camera);
    assert_relative_eq!(camera.position().norm(), OrbitControls::DEFAULT_MAX_DISTANCE, epsilon = 1e-9);
    controls.dolly(1e-9);
    controls.update(&mut camera);
    assert_relative_eq!(camera.position().norm(), OrbitControls::DEFAULT_MIN_DISTANCE, epsilon = 1e-9);

    // a single rotation impulse keeps easing out over later updates
    controls.rotate(0.5, 0.0);
    controls.update(&mut camera);
    let first = camera.position();
    controls.update(&mut camera);
    let second = camera.position();
    controls.update(&mut camera);
    let third = camera.position();
    let (d1, d2) = ((second - first).norm(), (third - second).norm());
    assert!(d1 > 0.0 && d2 > 0.0 && d2 < d1);
}
