pub mod aircraft;
pub mod camera;
pub mod controller;
pub mod scenery;
pub mod screen;

pub use aircraft::{
    model_transform, AircraftBlueprint, AircraftConfig, AircraftModel, AircraftState, Attitude,
    Finish, FlightControls, ModelPart, PartShape, PropellerBlades, PropellerBlueprint,
    StartConfig, PITCH_DEADBAND, PITCH_LIMIT,
};
pub use camera::ChaseCamera;
pub use controller::PlayerController;
pub use scenery::{Cloud, SceneryEntity, SkyDome, Terrain};
pub use screen::{AlertText, MenuButton, ScreenRoot};
