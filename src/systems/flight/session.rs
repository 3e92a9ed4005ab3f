use bevy::prelude::*;

use crate::components::{
    model_transform, AircraftModel, AircraftState, ChaseCamera, FlightControls, PlayerController,
};
use crate::resources::{FlightLoop, FlightSession, SetupError, SimConfig};

/// Checks the config before anything of the first flight is built.
pub fn validate_setup_system(
    config: Res<SimConfig>,
    session: Res<FlightSession>,
) -> Result<(), SetupError> {
    if !session.initialized {
        config.validate()?;
    }
    Ok(())
}

/// Starts the flight loop, spawning the aircraft on the first entry only.
///
/// Later entries resume the existing flight where it was left.
pub fn begin_flight_system(
    mut commands: Commands,
    config: Res<SimConfig>,
    mut session: ResMut<FlightSession>,
    mut flight_loop: ResMut<FlightLoop>,
) {
    if session.initialized {
        info!("Resuming flight");
    } else {
        spawn_flight(&mut commands, &config);
        session.initialized = true;
        info!("Flight initialized");
    }

    flight_loop.start();
    info!("Starting flight loop");
}

pub fn end_flight_system(mut flight_loop: ResMut<FlightLoop>) {
    flight_loop.stop();
    info!(
        "Stopping flight loop after {} frames",
        flight_loop.frames()
    );
}

fn spawn_flight(commands: &mut Commands, config: &SimConfig) {
    let aircraft = &config.aircraft;
    let state = AircraftState::from_config(aircraft);
    let transform = model_transform(&state, aircraft);

    commands.spawn((
        state,
        aircraft.clone(),
        FlightControls::default(),
        PlayerController::new(),
        AircraftModel,
        transform,
        Visibility::default(),
        Name::new(aircraft.name.clone()),
    ));

    let chase = ChaseCamera::from_config(&config.camera);
    let heading = state.heading_vector();
    let heading = Vec3::new(heading.x as f32, heading.y as f32, heading.z as f32);
    let camera_transform = chase.transform(transform.translation, heading);
    commands.spawn((chase, camera_transform, Name::new("chase_camera")));
}
