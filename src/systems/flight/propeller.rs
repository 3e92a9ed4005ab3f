use bevy::prelude::*;

use crate::components::{AircraftConfig, AircraftState, PropellerBlades};

/// Spins the propeller group about its thrust axis in proportion to speed.
pub fn propeller_spin_system(
    aircraft: Query<(&AircraftState, &AircraftConfig, &Children)>,
    mut blades: Query<&mut Transform, With<PropellerBlades>>,
) {
    for (state, config, children) in aircraft.iter() {
        let angle = propeller_step(state, config);
        if angle == 0.0 {
            continue;
        }
        for &child in children.iter() {
            if let Ok(mut transform) = blades.get_mut(child) {
                transform.rotate_local_z(angle);
            }
        }
    }
}

/// Propeller rotation for one frame (radians).
pub fn propeller_step(state: &AircraftState, config: &AircraftConfig) -> f32 {
    config.propeller_spin_rate * config.throttle_fraction(state.speed) as f32
}
