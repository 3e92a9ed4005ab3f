mod chase;

pub use chase::chase_camera_system;
