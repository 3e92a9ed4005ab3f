use approx::assert_relative_eq;
use bevy::prelude::*;
use flightsim::{
    components::{AircraftConfig, AircraftModel, AircraftState, ChaseCamera},
    plugins::Screen,
};

use crate::common::{aircraft_state, assert_aircraft_state_valid, assert_state_eq, TestAppBuilder};

#[test]
fn test_first_entry_spawns_aircraft_and_runs() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.count::<AircraftState>(), 0);
    assert!(!app.flight_loop().is_running());

    app.start_flight();

    assert_eq!(app.screen(), Screen::Flying);
    assert_eq!(app.count::<AircraftState>(), 1);
    assert_eq!(app.count::<ChaseCamera>(), 1);
    assert!(app.flight_loop().is_active());
    assert_eq!(app.flight_loop().frames(), 1);

    // One coasting frame from the start point
    let state = aircraft_state(&mut app);
    let config = AircraftConfig::default();
    assert_relative_eq!(state.speed, 1.0 - config.deceleration, epsilon = 1e-12);
    assert_relative_eq!(state.position.z, state.speed, epsilon = 1e-12);
}

#[test]
fn test_coasting_flight_stays_valid() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    app.run_steps(200);

    let state = aircraft_state(&mut app);
    assert_aircraft_state_valid(&state, &AircraftConfig::default());
    assert_eq!(state.speed, 0.0);
    assert_eq!(app.flight_loop().frames(), 201);
}

#[test]
fn test_model_transform_follows_state() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    app.run_steps(10);

    let state = aircraft_state(&mut app);
    let world = app.app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<AircraftModel>>();
    let transform = query.single(world);

    assert_relative_eq!(transform.translation.z, state.position.z as f32, epsilon = 1e-4);
    assert_relative_eq!(transform.translation.y, state.position.y as f32, epsilon = 1e-4);
    assert_eq!(transform.scale, Vec3::splat(5.0));
}

#[test]
fn test_chase_camera_trails_aircraft() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    app.run_steps(5);

    let state = aircraft_state(&mut app);
    let world = app.app.world_mut();
    let mut query = world.query_filtered::<&Transform, With<ChaseCamera>>();
    let camera = query.single(world);

    assert_relative_eq!(camera.translation.y, state.position.y as f32 + 15.0, epsilon = 1e-3);
    assert_relative_eq!(camera.translation.z, state.position.z as f32 - 50.0, epsilon = 1e-3);
}

#[test]
fn test_leaving_stops_loop_and_keeps_state() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    app.run_steps(20);

    app.set_screen(Screen::Menu);
    app.run_frame();
    assert_eq!(app.screen(), Screen::Menu);
    assert!(!app.flight_loop().is_running());

    let frozen = aircraft_state(&mut app);
    let frames = app.flight_loop().frames();
    app.run_steps(30);

    assert_state_eq(&aircraft_state(&mut app), &frozen);
    assert_eq!(app.flight_loop().frames(), frames);
}

#[test]
fn test_resume_continues_same_flight() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    app.run_steps(20);
    let before = aircraft_state(&mut app);

    app.set_screen(Screen::Menu);
    app.run_frame();
    app.start_flight();

    assert_eq!(app.count::<AircraftState>(), 1);
    assert_eq!(app.count::<ChaseCamera>(), 1);

    // Exactly one more frame past where the flight was left.
    let after = aircraft_state(&mut app);
    assert!(after.position.z > before.position.z);
    assert!(after.position.z - before.position.z <= before.speed);
}

#[test]
fn test_fixed_tick_rate_runs_flight() {
    let mut app = TestAppBuilder::new().with_tick_rate(1000.0).build();
    app.start_flight();
    app.run_steps(50);

    let state = aircraft_state(&mut app);
    assert_aircraft_state_valid(&state, &AircraftConfig::default());
    assert!(app.flight_loop().is_active());
}
