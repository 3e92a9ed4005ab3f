use approx::assert_relative_eq;
use bevy::prelude::*;
use flightsim::{
    components::{AircraftConfig, FlightControls, PlayerController},
    plugins::Screen,
};

use crate::common::{aircraft_state, assert_aircraft_state_valid, TestAppBuilder};

#[test]
fn test_throttle_key_accelerates_and_climbs() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    let start = aircraft_state(&mut app);

    app.press(KeyCode::ArrowUp);
    app.run_steps(100);

    let state = aircraft_state(&mut app);
    let config = AircraftConfig::default();
    assert_relative_eq!(state.speed, config.max_speed, epsilon = 1e-9);
    assert!(state.attitude.pitch < 0.0);
    assert!(state.position.y > start.position.y);
    assert_aircraft_state_valid(&state, &config);
}

#[test]
fn test_turn_keys_change_heading() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();

    app.press(KeyCode::KeyA);
    app.run_steps(10);
    let left = aircraft_state(&mut app).attitude.yaw;
    assert!(left > 0.0);

    app.release(KeyCode::KeyA);
    app.press(KeyCode::KeyD);
    app.run_steps(20);
    let right = aircraft_state(&mut app).attitude.yaw;
    assert!(right < 0.0);
}

#[test]
fn test_dive_is_limited_and_grounded() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();

    app.press(KeyCode::ArrowDown);
    app.press(KeyCode::ArrowUp);
    app.run_steps(400);

    let state = aircraft_state(&mut app);
    assert_aircraft_state_valid(&state, &AircraftConfig::default());
    assert_eq!(state.position.y, 0.0);
}

#[test]
fn test_leaving_screen_releases_controls() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();

    app.press(KeyCode::KeyW);
    app.press(KeyCode::KeyA);
    app.run_frame();
    assert!(app.query_single::<FlightControls>().is_some_and(|c| c.throttle));

    app.set_screen(Screen::Menu);
    app.run_frame();

    let released = app.query_single::<FlightControls>().map(|c| c.any());
    assert_eq!(released, Some(false));
}

#[test]
fn test_detached_controller_ignores_keys() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    if let Some(mut controller) = app.query_single_mut::<PlayerController>() {
        *controller = PlayerController::detached();
    }

    app.press(KeyCode::KeyW);
    app.run_steps(5);

    let controls = app.query_single::<FlightControls>().copied();
    assert_eq!(controls, Some(FlightControls::default()));
}

#[test]
fn test_escape_returns_to_menu() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();

    app.tap(KeyCode::Escape);
    app.run_frame();

    assert_eq!(app.screen(), Screen::Menu);
    assert!(!app.flight_loop().is_running());
}

#[test]
fn test_pause_freezes_and_resumes() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight();
    app.run_steps(3);

    app.tap(KeyCode::KeyP);
    assert!(app.flight_loop().is_paused());
    let paused_at = aircraft_state(&mut app);
    let frames = app.flight_loop().frames();

    app.run_steps(10);
    assert_eq!(aircraft_state(&mut app), paused_at);
    assert_eq!(app.flight_loop().frames(), frames);

    app.tap(KeyCode::KeyP);
    assert!(app.flight_loop().is_active());
    app.run_frame();
    assert!(app.flight_loop().frames() > frames);
}
