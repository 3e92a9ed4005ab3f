pub mod config;
pub mod errors;
mod session;

pub use config::{CameraConfig, LogConfig, RenderConfig, SimConfig, SkyConfig, TerrainConfig};
pub use errors::{ConfigError, SetupError};
pub use session::{
    flight_loop_active, setup_succeeded, FlightLoop, FlightSession, SceneryState, SetupAlert,
};
