mod aircraft;
mod start;

pub use aircraft::{AircraftConfig, PITCH_DEADBAND, PITCH_LIMIT};
pub use start::StartConfig;
