mod camera;
mod controller;
pub mod flight;
mod menu;
pub mod render;
pub mod terrain;

pub use camera::chase_camera_system;
pub use controller::{
    controls_from_keys, escape_to_menu_system, keyboard_control_system, pause_toggle_system,
    release_controls_system,
};
pub use flight::{
    begin_flight_system, end_flight_system, flight_update_system, propeller_spin_system,
    propeller_step, sync_model_transform_system, update_aircraft, validate_setup_system,
};
pub use menu::{
    button_highlight_system, clear_alert_system, despawn_screen_system, menu_button_system,
    report_setup_failure, spawn_instructions_screen, spawn_menu_screen, spawn_quit_screen,
    INSTRUCTIONS, SETUP_FAILURE_PREFIX,
};
pub use render::{
    activate_chase_camera_system, attach_aircraft_meshes_system, attach_chase_camera_system,
    build_scenery_system, deactivate_chase_camera_system,
};
pub use terrain::{NoiseGenerator, TerrainGenerator, TerrainGrid};
