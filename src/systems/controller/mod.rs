mod keyboard;

pub use keyboard::{
    controls_from_keys, escape_to_menu_system, keyboard_control_system, pause_toggle_system,
    release_controls_system,
};
