use serde::{Deserialize, Serialize};

use crate::resources::ConfigError;

/// Finest terrain grid accepted, in cells along each edge.
pub const MAX_SUBDIVISIONS: u32 = 2048;

/// Largest ground texture accepted, in pixels along each edge.
pub const MAX_TEXTURE_SIZE: u32 = 8192;

/// Ground plane shape and texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Edge length of the square ground plane.
    pub size: f32,
    /// Grid cells along each edge.
    pub subdivisions: u32,
    /// Peak height of the rolling hills.
    pub hill_amplitude: f32,
    /// Angular frequency of the hills per world unit.
    pub hill_frequency: f32,
    /// Vertices further than this from the origin stay flat.
    pub hill_radius: f32,
    /// Height of the noise detail layer, zero disables it.
    pub detail_amplitude: f32,
    pub detail_scale: f32,
    pub detail_octaves: u32,
    pub texture_size: u32,
    pub texture_repeat: f32,
    pub base_color: [u8; 3],
    pub speckle_count: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            size: 10000.0,
            subdivisions: 128,
            hill_amplitude: 100.0,
            hill_frequency: 0.01,
            hill_radius: 4800.0,
            detail_amplitude: 6.0,
            detail_scale: 400.0,
            detail_octaves: 3,
            texture_size: 512,
            texture_repeat: 16.0,
            base_color: [0x2d, 0x57, 0x2c],
            speckle_count: 5000,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_SUBDIVISIONS).contains(&self.subdivisions) {
            return Err(ConfigError::invalid(
                "terrain.subdivisions",
                format!("must lie in [1, {MAX_SUBDIVISIONS}], got {}", self.subdivisions),
            ));
        }
        // Zero is left to texture generation, which reports it as a setup failure
        if self.texture_size > MAX_TEXTURE_SIZE {
            return Err(ConfigError::invalid(
                "terrain.texture_size",
                format!("must be at most {MAX_TEXTURE_SIZE}, got {}", self.texture_size),
            ));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::invalid(
                "terrain.size",
                format!("must be positive, got {}", self.size),
            ));
        }
        if self.detail_amplitude > 0.0 && (self.detail_octaves == 0 || self.detail_scale <= 0.0) {
            return Err(ConfigError::invalid(
                "terrain.detail_octaves",
                "detail noise needs at least one octave and a positive scale",
            ));
        }
        Ok(())
    }
}

/// Sky dome gradient and cloud scattering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub dome_radius: f32,
    pub dome_segments: u32,
    /// Height in pixels of the 1 pixel wide gradient texture.
    pub gradient_height: u32,
    pub zenith_color: [u8; 3],
    pub middle_color: [u8; 3],
    pub horizon_color: [u8; 3],
    pub cloud_count: u32,
    pub cloud_radius: [f32; 2],
    pub cloud_distance: [f32; 2],
    /// Lowest cloud height and the random span above it.
    pub cloud_base: f32,
    pub cloud_spread: f32,
    pub cloud_opacity: f32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            dome_radius: 10000.0,
            dome_segments: 32,
            gradient_height: 128,
            zenith_color: [0x1e, 0x57, 0x99],
            middle_color: [0x7d, 0xb9, 0xe8],
            horizon_color: [0xd3, 0xf4, 0xff],
            cloud_count: 30,
            cloud_radius: [50.0, 150.0],
            cloud_distance: [2000.0, 4000.0],
            cloud_base: 100.0,
            cloud_spread: 800.0,
            cloud_opacity: 0.8,
        }
    }
}

impl SkyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, [low, high]) in [
            ("sky.cloud_radius", self.cloud_radius),
            ("sky.cloud_distance", self.cloud_distance),
        ] {
            if !(low > 0.0 && high > low) {
                return Err(ConfigError::invalid(
                    field,
                    format!("expected 0 < min < max, got [{low}, {high}]"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.cloud_opacity) {
            return Err(ConfigError::invalid(
                "sky.cloud_opacity",
                format!("must lie in [0, 1], got {}", self.cloud_opacity),
            ));
        }
        Ok(())
    }
}
