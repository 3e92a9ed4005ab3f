use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Window and lighting settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub window_title: String,
    pub screen_width: u32,
    pub screen_height: u32,
    pub vsync: bool,
    /// sRGB background colour behind the sky dome.
    pub clear_color: [u8; 3],
    pub ambient_brightness: f32,
    pub sun_illuminance: f32,
    pub sun_position: [f32; 3],
    pub shadows: bool,
    pub shadow_map_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_title: "Flight Sim".to_string(),
            screen_width: 1280,
            screen_height: 720,
            vsync: true,
            clear_color: [0x87, 0xCE, 0xEB],
            ambient_brightness: 500.0,
            sun_illuminance: 8000.0,
            sun_position: [100.0, 300.0, 200.0],
            shadows: true,
            shadow_map_size: 2048,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::invalid(
                "render.screen_width",
                "window dimensions must be non-zero",
            ));
        }
        if !self.shadow_map_size.is_power_of_two() {
            return Err(ConfigError::invalid(
                "render.shadow_map_size",
                format!("must be a power of two, got {}", self.shadow_map_size),
            ));
        }
        Ok(())
    }
}
