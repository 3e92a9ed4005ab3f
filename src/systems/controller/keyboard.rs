use bevy::prelude::*;

use crate::components::{FlightControls, PlayerController};
use crate::plugins::Screen;
use crate::resources::FlightLoop;

const THROTTLE_KEYS: [KeyCode; 2] = [KeyCode::ArrowUp, KeyCode::KeyW];
const DIVE_KEYS: [KeyCode; 2] = [KeyCode::ArrowDown, KeyCode::KeyS];
const LEFT_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];

/// Maps the pressed keys onto the control flags of the player aircraft.
///
/// Flags are rebuilt from scratch every frame, so a key released while the
/// window was unfocused can never stay stuck.
pub fn keyboard_control_system(
    mut query: Query<(&mut FlightControls, &PlayerController)>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    for (mut controls, controller) in query.iter_mut() {
        if !controller.input_enabled {
            continue;
        }
        let next = controls_from_keys(&keyboard);
        if *controls != next {
            debug!("Controls changed: {:?}", next);
            *controls = next;
        }
    }
}

/// Control flags for the current key set.
pub fn controls_from_keys(keyboard: &ButtonInput<KeyCode>) -> FlightControls {
    let forward = keyboard.any_pressed(THROTTLE_KEYS);
    FlightControls {
        throttle: forward,
        pitch_up: forward,
        pitch_down: keyboard.any_pressed(DIVE_KEYS),
        turn_left: keyboard.any_pressed(LEFT_KEYS),
        turn_right: keyboard.any_pressed(RIGHT_KEYS),
    }
}

/// Releases every control flag, used when the flight screen is left.
pub fn release_controls_system(mut query: Query<&mut FlightControls>) {
    for mut controls in query.iter_mut() {
        controls.release_all();
    }
}

pub fn escape_to_menu_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, returning to menu");
        next_screen.set(Screen::Menu);
    }
}

pub fn pause_toggle_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut flight_loop: ResMut<FlightLoop>,
) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        let paused = flight_loop.toggle_pause();
        info!("Flight loop {}", if paused { "paused" } else { "resumed" });
    }
}
