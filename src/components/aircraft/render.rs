use bevy::prelude::*;

use crate::components::aircraft::{AircraftConfig, AircraftState};

/// Marks the root entity whose transform mirrors an [`AircraftState`].
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AircraftModel;

/// Marks the propeller group, spun about its local Z (thrust) axis.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PropellerBlades;

/// Render transform of the model for a given flight state.
pub fn model_transform(state: &AircraftState, config: &AircraftConfig) -> Transform {
    Transform {
        translation: Vec3::new(
            state.position.x as f32,
            state.position.y as f32,
            state.position.z as f32,
        ),
        rotation: state.attitude.to_quat(),
        scale: Vec3::splat(config.model_scale),
    }
}
