use bevy::ecs::schedule::ScheduleLabel;
use bevy::prelude::*;

use crate::plugins::Screen;
use crate::resources::{
    flight_loop_active, setup_succeeded, FlightLoop, FlightSession, SetupAlert, SimConfig,
};
use crate::systems::{
    begin_flight_system, chase_camera_system, clear_alert_system, end_flight_system,
    escape_to_menu_system, flight_update_system, keyboard_control_system, pause_toggle_system,
    propeller_spin_system, release_controls_system, report_setup_failure,
    sync_model_transform_system, validate_setup_system,
};
use crate::utils::RngManager;

/// Per-frame order of the flight loop.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Update,
    Sync,
    Camera,
}

/// Stages of entering the flight screen.
///
/// A failed stage raises the setup alert and every later stage is skipped, so
/// the aircraft is only spawned and the loop only started once the config and
/// the scenery are in place.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SetupSet {
    Config,
    Scenery,
    Flight,
}

/// Aircraft, controls and the explicit flight loop.
///
/// Needs [`ScreenPlugin`](crate::plugins::ScreenPlugin) for the screen states.
pub struct FlightPlugin {
    config: SimConfig,
}

impl FlightPlugin {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    fn add_flight_systems(app: &mut App, schedule: impl ScheduleLabel + Clone) {
        app.configure_sets(
            schedule.clone(),
            (
                FlightSet::Input,
                FlightSet::Update,
                FlightSet::Sync,
                FlightSet::Camera,
            )
                .chain(),
        )
        .add_systems(
            schedule,
            (
                keyboard_control_system.in_set(FlightSet::Input),
                flight_update_system.in_set(FlightSet::Update),
                (sync_model_transform_system, propeller_spin_system).in_set(FlightSet::Sync),
                chase_camera_system.in_set(FlightSet::Camera),
            )
                .run_if(flight_loop_active),
        );
    }
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(RngManager::new(self.config.seed))
            .init_resource::<FlightLoop>()
            .init_resource::<FlightSession>()
            .init_resource::<SetupAlert>()
            .configure_sets(
                OnEnter(Screen::Flying),
                (SetupSet::Config, SetupSet::Scenery, SetupSet::Flight).chain(),
            )
            .configure_sets(
                OnEnter(Screen::Flying),
                SetupSet::Scenery.run_if(setup_succeeded),
            )
            .configure_sets(
                OnEnter(Screen::Flying),
                SetupSet::Flight.run_if(setup_succeeded),
            )
            .add_systems(
                OnEnter(Screen::Flying),
                (
                    clear_alert_system,
                    validate_setup_system.pipe(report_setup_failure),
                )
                    .chain()
                    .in_set(SetupSet::Config),
            )
            .add_systems(
                OnEnter(Screen::Flying),
                begin_flight_system.in_set(SetupSet::Flight),
            )
            .add_systems(
                OnExit(Screen::Flying),
                (end_flight_system, release_controls_system),
            )
            .add_systems(
                Update,
                (escape_to_menu_system, pause_toggle_system).run_if(in_state(Screen::Flying)),
            );

        match self.config.tick_rate_hz {
            Some(hz) => {
                info!("Running flight model at a fixed {} Hz", hz);
                app.insert_resource(Time::<Fixed>::from_hz(hz));
                Self::add_flight_systems(app, FixedUpdate);
            }
            None => Self::add_flight_systems(app, Update),
        }
    }
}
