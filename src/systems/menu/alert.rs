use bevy::prelude::*;

use crate::plugins::Screen;
use crate::resources::{SetupAlert, SetupError};

/// Prefix of the message shown on the menu after a failed setup.
pub const SETUP_FAILURE_PREFIX: &str = "There was an error setting up the 3D environment";

/// Catches a failed scene setup, logs it and falls back to the menu.
pub fn report_setup_failure(
    In(result): In<Result<(), SetupError>>,
    mut alert: ResMut<SetupAlert>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if let Err(err) = result {
        error!("Scene setup failed: {}", err);
        alert.raise(format!("{SETUP_FAILURE_PREFIX}: {err}"));
        next_screen.set(Screen::Menu);
    }
}

pub fn clear_alert_system(mut alert: ResMut<SetupAlert>) {
    alert.clear();
}
