mod flight;
mod scenery;
mod screens;

pub use flight::{FlightPlugin, FlightSet, SetupSet};
pub use scenery::SceneryPlugin;
pub use screens::{Screen, ScreenPlugin};
