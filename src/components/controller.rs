use bevy::prelude::*;

/// Marks the aircraft driven by the keyboard.
#[derive(Component, Debug)]
pub struct PlayerController {
    /// When false the keyboard is ignored and the controls stay released.
    pub input_enabled: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            input_enabled: true,
        }
    }

    pub fn detached() -> Self {
        Self {
            input_enabled: false,
        }
    }
}
