use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance behind the aircraft.
    pub distance: f32,
    /// Height above the aircraft.
    pub height: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 50.0,
            height: 15.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 20000.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::invalid(
                "camera.fov_degrees",
                format!("must lie in (0, 180), got {}", self.fov_degrees),
            ));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::invalid(
                "camera.near",
                "near must be positive and smaller than far",
            ));
        }
        Ok(())
    }
}
