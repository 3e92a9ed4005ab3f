use bevy::prelude::*;

use crate::plugins::{Screen, SetupSet};
use crate::resources::SceneryState;
use crate::systems::{
    activate_chase_camera_system, attach_aircraft_meshes_system, attach_chase_camera_system,
    build_scenery_system, deactivate_chase_camera_system, report_setup_failure,
};

/// Meshes, materials, lights and the 3D camera.
///
/// Builds on the entities and config that [`FlightPlugin`](crate::plugins::FlightPlugin) provides.
pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneryState>()
            .add_systems(
                OnEnter(Screen::Flying),
                (
                    build_scenery_system
                        .pipe(report_setup_failure)
                        .in_set(SetupSet::Scenery),
                    activate_chase_camera_system.in_set(SetupSet::Flight),
                ),
            )
            .add_systems(OnExit(Screen::Flying), deactivate_chase_camera_system)
            .add_systems(
                Update,
                (attach_aircraft_meshes_system, attach_chase_camera_system),
            );
    }
}
