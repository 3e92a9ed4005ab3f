pub mod config;
pub mod model;
pub mod render;
pub mod state;

pub use config::{AircraftConfig, StartConfig, PITCH_DEADBAND, PITCH_LIMIT};
pub use model::{AircraftBlueprint, Finish, ModelPart, PartShape, PropellerBlueprint};
pub use render::{model_transform, AircraftModel, PropellerBlades};
pub use state::{AircraftState, Attitude, FlightControls};
