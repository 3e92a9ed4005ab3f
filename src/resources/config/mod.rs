pub mod camera;
pub mod log;
pub mod render;
pub mod scenery;
pub mod simulation;

pub use camera::CameraConfig;
pub use log::LogConfig;
pub use render::RenderConfig;
pub use scenery::{SkyConfig, TerrainConfig};
pub use simulation::SimConfig;
