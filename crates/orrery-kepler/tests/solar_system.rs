//! End-to-end runs over the bundled element tables.

use orrery_kepler::catalog::{all_bodies, near_earth_asteroids, solar_system};
use orrery_kepler::{KeplerSolver, OrbitSampler, SimulationContext, SimulationStepper};

fn solar_context(sim_speed: f64) -> SimulationContext {
    SimulationContext::from_definitions(&solar_system(), &KeplerSolver::default(), sim_speed)
        .unwrap()
}

#[test]
fn test_year_of_ticks_brings_earth_back() {
    let stepper = SimulationStepper::default();
    let mut context = solar_context(1.0);
    let start = context.world_position("Earth").unwrap();

    for _ in 0..365 {
        let report = stepper.tick(&mut context);
        assert!(report.is_clean(), "failures: {:?}", report.failures);
    }

    let end = context.world_position("Earth").unwrap();
    // One reference year is 365.25 ticks; a quarter day of travel remains.
    assert!((end - start).length() < 0.01, "drift {}", (end - start).length());
    assert_eq!(context.tick_count(), 365);
}

#[test]
fn test_faster_speed_covers_more_anomaly() {
    let stepper = SimulationStepper::default();
    let mut slow = solar_context(0.5);
    let mut fast = solar_context(2.0);
    for _ in 0..20 {
        stepper.tick(&mut slow);
        stepper.tick(&mut fast);
    }
    let slow_time = slow.body("Mars").unwrap().state().elapsed_time();
    let fast_time = fast.body("Mars").unwrap().state().elapsed_time();
    let start_time = solar_context(1.0).body("Mars").unwrap().state().elapsed_time();
    let n = slow.body("Mars").unwrap().elements().mean_motion();
    assert!((slow_time - start_time - 20.0 * 0.5 * n).abs() < 1e-9);
    assert!((fast_time - start_time - 20.0 * 2.0 * n).abs() < 1e-9);
}

#[test]
fn test_moon_rides_along_with_earth() {
    let context = solar_context(1.0);
    let earth = context.world_position("Earth").unwrap();
    let moon_local = context.positions()["Moon"];
    let moon_world = context.world_position("Moon").unwrap();
    assert!((moon_world - (earth + moon_local)).length() < 1e-12);
}

#[test]
fn test_every_trace_closes() {
    let context =
        SimulationContext::from_definitions(&all_bodies(), &KeplerSolver::default(), 1.0).unwrap();
    let sampler = OrbitSampler::default();
    for body in context.bodies() {
        let trace = context.trace(body.name(), &sampler).unwrap();
        let gap = (trace.positions[0] - *trace.positions.last().unwrap()).length();
        assert!(gap < 1e-2, "{} trace gap {gap}", body.name());
    }
}

#[test]
fn test_tracing_does_not_disturb_state() {
    let context = solar_context(1.0);
    let before = context.snapshots();
    let sampler = OrbitSampler::default();
    for body in context.bodies() {
        context.trace(body.name(), &sampler);
    }
    assert_eq!(context.snapshots(), before);
}

#[test]
fn test_asteroids_survive_many_fast_ticks() {
    let stepper = SimulationStepper::default();
    let mut context = SimulationContext::from_definitions(
        &near_earth_asteroids(),
        &KeplerSolver::default(),
        5.0,
    )
    .unwrap();
    for _ in 0..500 {
        let report = stepper.tick(&mut context);
        assert!(report.is_clean(), "failures: {:?}", report.failures);
    }
    for snapshot in context.snapshots() {
        let r = snapshot.local_position.length();
        let peri = snapshot.elements.periapsis_distance();
        let apo = snapshot.elements.apoapsis_distance();
        assert!(
            r >= peri - 1e-9 && r <= apo + 1e-9,
            "{} at r={r} outside [{peri}, {apo}]",
            snapshot.name
        );
    }
}
