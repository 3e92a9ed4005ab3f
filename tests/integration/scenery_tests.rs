use bevy::prelude::*;
use flightsim::{
    components::{
        AircraftBlueprint, AircraftModel, AircraftState, ChaseCamera, Cloud, PropellerBlades,
        SkyDome, Terrain,
    },
    plugins::Screen,
    resources::{SceneryState, SetupAlert, SimConfig},
};

use crate::common::{broken_terrain_config, light_scenery_config, TestAppBuilder};

#[test]
fn test_scenery_built_on_first_flight() {
    let mut app = TestAppBuilder::new()
        .with_config(light_scenery_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.run_frame();

    assert!(app.get_state::<SceneryState>().is_some_and(|s| s.built));
    assert_eq!(app.count::<Terrain>(), 1);
    assert_eq!(app.count::<SkyDome>(), 1);
    assert_eq!(app.count::<Cloud>(), 30);
    assert_eq!(app.count::<DirectionalLight>(), 1);
    assert!(app.get_state::<AmbientLight>().is_some());
}

#[test]
fn test_scenery_built_once() {
    let mut app = TestAppBuilder::new()
        .with_config(light_scenery_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.set_screen(Screen::Menu);
    app.run_frame();
    app.start_flight();

    assert_eq!(app.count::<Terrain>(), 1);
    assert_eq!(app.count::<Cloud>(), 30);
}

#[test]
fn test_aircraft_gets_model_meshes() {
    let mut app = TestAppBuilder::new()
        .with_config(light_scenery_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.run_frame();

    let blueprint = AircraftBlueprint::cessna_172();
    assert_eq!(app.count::<PropellerBlades>(), 1);

    let world = app.app.world_mut();
    let mut aircraft = world.query_filtered::<&Children, With<AircraftModel>>();
    let children = aircraft.single(world).len();
    // Every part plus the propeller group
    assert_eq!(children, blueprint.parts.len() + 1);

    let mut propeller = world.query_filtered::<&Children, With<PropellerBlades>>();
    assert_eq!(propeller.single(world).len(), blueprint.propeller.blades.len());
}

#[test]
fn test_propeller_spins_with_speed() {
    let mut app = TestAppBuilder::new()
        .with_config(light_scenery_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.run_steps(3);

    let world = app.app.world_mut();
    let mut propeller = world.query_filtered::<&Transform, With<PropellerBlades>>();
    let rotation = propeller.single(world).rotation;
    assert!(rotation.angle_between(Quat::IDENTITY) > 0.0);
}

#[test]
fn test_chase_camera_toggles_with_screen() {
    let mut app = TestAppBuilder::new()
        .with_config(light_scenery_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.run_frame();

    let active = |app: &mut crate::common::TestApp| {
        let world = app.app.world_mut();
        let mut query = world.query_filtered::<&Camera, With<ChaseCamera>>();
        query.single(world).is_active
    };
    assert!(active(&mut app));

    app.set_screen(Screen::Menu);
    app.run_frame();
    assert!(!active(&mut app));

    app.start_flight();
    assert!(active(&mut app));
}

#[test]
fn test_scenery_failure_reports_alert() {
    let mut app = TestAppBuilder::new()
        .with_config(broken_terrain_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.run_frame();

    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.count::<Terrain>(), 0);
    assert!(app
        .get_state::<SetupAlert>()
        .and_then(|alert| alert.message())
        .is_some_and(|message| message.contains("grass")));
}

#[test]
fn test_scenery_failure_leaves_flight_unstarted() {
    let mut app = TestAppBuilder::new()
        .with_config(broken_terrain_config())
        .with_scenery()
        .build();
    app.start_flight();
    assert_eq!(app.flight_loop().frames(), 0);

    app.run_frame();

    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.count::<AircraftState>(), 0);
    assert_eq!(app.count::<ChaseCamera>(), 0);
    assert!(!app.flight_loop().is_running());
    assert_eq!(app.flight_loop().frames(), 0);
}

#[test]
fn test_flight_starts_fresh_after_scenery_failure() {
    let mut app = TestAppBuilder::new()
        .with_config(broken_terrain_config())
        .with_scenery()
        .build();
    app.start_flight();
    app.run_frame();
    assert_eq!(app.screen(), Screen::Menu);

    if let Some(mut config) = app.get_state_mut::<SimConfig>() {
        config.terrain.texture_size = 32;
    }
    app.start_flight();

    assert_eq!(app.screen(), Screen::Flying);
    assert_eq!(app.get_state::<SetupAlert>().and_then(|a| a.message()), None);
    assert_eq!(app.count::<Terrain>(), 1);
    assert_eq!(app.count::<AircraftState>(), 1);
    assert!(app.flight_loop().is_running());
    assert_eq!(app.flight_loop().frames(), 1);
}
