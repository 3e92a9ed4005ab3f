use bevy::prelude::*;

use crate::{
    components::{
        model_transform, AircraftConfig, AircraftModel, AircraftState, FlightControls,
        PITCH_DEADBAND, PITCH_LIMIT,
    },
    resources::FlightLoop,
};

/// Advances every aircraft by one flight frame.
pub fn flight_update_system(
    mut query: Query<(&mut AircraftState, &AircraftConfig, &FlightControls)>,
    mut flight_loop: ResMut<FlightLoop>,
) {
    for (mut state, config, controls) in query.iter_mut() {
        update_aircraft(&mut state, config, controls);
        trace!(
            "position: {:?}, speed: {:.3}, pitch: {:.3}, yaw: {:.3}",
            state.position,
            state.speed,
            state.attitude.pitch,
            state.attitude.yaw
        );
    }
    flight_loop.tick();
}

/// Copies the flight state onto the rendered model.
pub fn sync_model_transform_system(
    mut query: Query<(&AircraftState, &AircraftConfig, &mut Transform), With<AircraftModel>>,
) {
    for (state, config, mut transform) in query.iter_mut() {
        *transform = model_transform(state, config);
    }
}

/// Updates the state of a single aircraft by one frame.
///
/// The step order matters: gravity is applied with the new speed, and the
/// attitude climb uses the new pitch.
///
/// # Arguments
/// * `state` - The mutable state of the aircraft to update.
/// * `config` - Tuning constants, all expressed per frame.
/// * `controls` - Control flags held during this frame.
pub fn update_aircraft(
    state: &mut AircraftState,
    config: &AircraftConfig,
    controls: &FlightControls,
) {
    // Throttle
    let speed = if controls.throttle {
        state.speed + config.acceleration
    } else {
        state.speed - config.deceleration
    };
    state.speed = speed.clamp(0.0, config.max_speed);

    // Gravity offset by speed dependent lift
    let lift = state.speed * config.lift_factor;
    let descent = config.gravity * (1.0 - 2.0 * lift);
    state.position.y = (state.position.y - descent).max(0.0);

    // Heading, free rotation
    if controls.turn_left {
        state.attitude.yaw += config.turn_rate;
    }
    if controls.turn_right {
        state.attitude.yaw -= config.turn_rate;
    }

    state.attitude.pitch = next_pitch(state.attitude.pitch, config.pitch_rate, controls);

    // Climb or dive from attitude
    let climb = -state.attitude.pitch.sin() * state.speed;
    state.position.y = (state.position.y + climb).max(0.0);

    let yaw = state.attitude.yaw;
    state.position.x += yaw.sin() * state.speed;
    state.position.z += yaw.cos() * state.speed;
}

/// Pitch after one frame; dive wins over climb, no input recovers toward level.
fn next_pitch(pitch: f64, rate: f64, controls: &FlightControls) -> f64 {
    let pitch = if controls.pitch_down {
        pitch + rate
    } else if controls.pitch_up {
        pitch - rate
    } else if pitch > PITCH_DEADBAND {
        pitch - rate / 2.0
    } else if pitch < -PITCH_DEADBAND {
        pitch + rate / 2.0
    } else {
        0.0
    };
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}
