mod alert;
mod buttons;
mod screens;

pub use alert::{clear_alert_system, report_setup_failure, SETUP_FAILURE_PREFIX};
pub use buttons::{button_highlight_system, menu_button_system};
pub use screens::{
    despawn_screen_system, spawn_instructions_screen, spawn_menu_screen, spawn_quit_screen,
    INSTRUCTIONS,
};
