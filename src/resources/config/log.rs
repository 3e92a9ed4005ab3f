use bevy::log::Level;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::resources::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level for this crate and anything not matched by `filter`.
    pub level: String,
    /// Extra `tracing` directives, comma separated.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            filter: "wgpu=error,naga=warn".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<Level, ConfigError> {
        Level::from_str(&self.level).map_err(|_| {
            ConfigError::invalid("log.level", format!("unknown level '{}'", self.level))
        })
    }
}
