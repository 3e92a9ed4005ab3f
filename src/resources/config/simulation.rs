use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

use super::{CameraConfig, LogConfig, RenderConfig, SkyConfig, TerrainConfig};
use crate::components::AircraftConfig;
use crate::resources::errors::{ConfigError, Result};

/// Every tunable of the game, loadable from YAML or JSON.
///
/// Missing fields fall back to their defaults so partial files are fine.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub aircraft: AircraftConfig,
    pub camera: CameraConfig,
    pub render: RenderConfig,
    pub terrain: TerrainConfig,
    pub sky: SkyConfig,
    pub log: LogConfig,
    /// Master seed for the procedural scenery.
    pub seed: u64,
    /// Run the flight model at a fixed rate instead of once per frame.
    pub tick_rate_hz: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            aircraft: AircraftConfig::default(),
            camera: CameraConfig::default(),
            render: RenderConfig::default(),
            terrain: TerrainConfig::default(),
            sky: SkyConfig::default(),
            log: LogConfig::default(),
            seed: 42,
            tick_rate_hz: None,
        }
    }
}

enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

impl SimConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let file = File::open(path)?;
        let config = match format {
            Format::Yaml => serde_yaml::from_reader(file)?,
            Format::Json => serde_json::from_reader(file)?,
        };
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let file = File::create(path)?;
        match format {
            Format::Yaml => serde_yaml::to_writer(file, self)?,
            Format::Json => serde_json::to_writer_pretty(file, self)?,
        }
        Ok(())
    }

    /// Per-user config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("flightsim").join("config.yaml"))
    }

    /// Loads `explicit` if given, else the per-user file if present, else defaults.
    ///
    /// Returns the path the config came from alongside it. Values are not
    /// validated here; flight setup does that and reports failures on the menu.
    pub fn discover(explicit: Option<PathBuf>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => Some(path),
            None => Self::default_path().filter(|path| path.exists()),
        };

        match path {
            Some(path) => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Checks the settings consumed while the app is assembled: window,
    /// logging and the flight schedule.
    pub fn validate_startup(&self) -> Result<()> {
        self.render.validate()?;
        self.log.level()?;

        if let Some(hz) = self.tick_rate_hz {
            if !(hz.is_finite() && hz > 0.0) {
                return Err(ConfigError::invalid(
                    "tick_rate_hz",
                    format!("must be positive, got {hz}"),
                ));
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.validate_startup()?;
        self.aircraft.validate()?;
        self.camera.validate()?;
        self.terrain.validate()?;
        self.sky.validate()?;
        Ok(())
    }
}
