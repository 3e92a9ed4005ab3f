use bevy::prelude::*;
use flightsim::{
    components::{AircraftState, AlertText, MenuButton, ScreenRoot},
    plugins::Screen,
    resources::SetupAlert,
    systems::SETUP_FAILURE_PREFIX,
};

use crate::common::{broken_aircraft_config, TestApp, TestAppBuilder};

/// Simulates a click on the first button of the given kind.
fn click(app: &mut TestApp, target: MenuButton) {
    let world = app.app.world_mut();
    let mut query = world.query::<(&MenuButton, &mut Interaction)>();
    let mut clicked = false;
    for (button, mut interaction) in query.iter_mut(world) {
        if *button == target {
            *interaction = Interaction::Pressed;
            clicked = true;
        }
    }
    assert!(clicked, "no {:?} button on screen", target);
    // One frame to handle the click, one to apply the transition.
    app.run_steps(2);
}

fn screen_roots(app: &mut TestApp) -> Vec<Screen> {
    let world = app.app.world_mut();
    let mut query = world.query::<&ScreenRoot>();
    query.iter(world).map(|root| root.0).collect()
}

#[test]
fn test_starts_on_menu() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.screen(), Screen::Menu);
    assert!(screen_roots(&mut app).iter().all(|s| *s == Screen::Menu));
    assert!(!screen_roots(&mut app).is_empty());
    assert_eq!(app.count::<MenuButton>(), 3);
    assert_eq!(app.count::<AlertText>(), 0);
}

#[test]
fn test_instructions_and_back() {
    let mut app = TestAppBuilder::new().build();

    click(&mut app, MenuButton::Instructions);
    assert_eq!(app.screen(), Screen::Instructions);
    assert!(screen_roots(&mut app).iter().all(|s| *s == Screen::Instructions));
    assert_eq!(app.count::<MenuButton>(), 1);

    click(&mut app, MenuButton::Back);
    assert_eq!(app.screen(), Screen::Menu);
}

#[test]
fn test_quit_and_restart() {
    let mut app = TestAppBuilder::new().build();

    click(&mut app, MenuButton::Quit);
    assert_eq!(app.screen(), Screen::Quit);

    click(&mut app, MenuButton::Restart);
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.count::<MenuButton>(), 3);
}

#[test]
fn test_start_button_begins_flight() {
    let mut app = TestAppBuilder::new().build();

    click(&mut app, MenuButton::Start);
    assert_eq!(app.screen(), Screen::Flying);
    assert!(screen_roots(&mut app).is_empty());
    assert_eq!(app.count::<AircraftState>(), 1);
    assert!(app.flight_loop().is_active());
}

#[test]
fn test_setup_failure_returns_to_menu_with_alert() {
    let mut app = TestAppBuilder::new()
        .with_config(broken_aircraft_config())
        .build();

    app.start_flight();
    app.run_frame();

    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.count::<AircraftState>(), 0);
    assert!(!app.flight_loop().is_running());
    assert_eq!(app.count::<AlertText>(), 1);

    let message = app
        .get_state::<SetupAlert>()
        .and_then(|alert| alert.message())
        .map(str::to_owned);
    assert!(message.is_some_and(|m| m.starts_with(SETUP_FAILURE_PREFIX) && m.contains("max_speed")));
}

#[test]
fn test_alert_cleared_when_menu_is_left() {
    let mut app = TestAppBuilder::new()
        .with_config(broken_aircraft_config())
        .build();
    app.start_flight();
    app.run_frame();

    click(&mut app, MenuButton::Instructions);
    assert_eq!(app.get_state::<SetupAlert>().and_then(|a| a.message()), None);

    click(&mut app, MenuButton::Back);
    assert_eq!(app.count::<AlertText>(), 0);
}
