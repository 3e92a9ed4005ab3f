use crate::common::TestApp;
use bevy::prelude::*;
use flightsim::components::AircraftState;

/// Copy of the player aircraft state, panicking when there is none.
#[track_caller]
pub fn aircraft_state(test_app: &mut TestApp) -> AircraftState {
    match test_app.query_single::<AircraftState>() {
        Some(state) => *state,
        None => panic!("Aircraft state not found"),
    }
}

/// Waits for a specific condition to be met within a maximum number of steps
pub fn wait_for_condition<F>(test_app: &mut TestApp, condition: F, max_steps: usize) -> bool
where
    F: Fn(&mut App) -> bool,
{
    for _ in 0..max_steps {
        if condition(&mut test_app.app) {
            return true;
        }
        test_app.run_frame();
    }
    condition(&mut test_app.app)
}
