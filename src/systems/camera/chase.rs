use bevy::prelude::*;

use crate::components::{AircraftState, ChaseCamera, PlayerController};

/// Places every chase camera behind and above the player aircraft.
pub fn chase_camera_system(
    mut camera_query: Query<(&ChaseCamera, &mut Transform), Without<PlayerController>>,
    target_query: Query<&AircraftState, With<PlayerController>>,
) {
    let Ok(state) = target_query.get_single() else {
        return;
    };

    let target = Vec3::new(
        state.position.x as f32,
        state.position.y as f32,
        state.position.z as f32,
    );
    let heading = state.heading_vector();
    let heading = Vec3::new(heading.x as f32, heading.y as f32, heading.z as f32);

    for (camera, mut transform) in camera_query.iter_mut() {
        *transform = camera.transform(target, heading);
    }
}
