use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;

use super::StartConfig;
use crate::resources::ConfigError;

/// Pitch can never exceed this magnitude (radians).
pub const PITCH_LIMIT: f64 = FRAC_PI_4;

/// Below this magnitude a decaying pitch snaps to exactly zero.
pub const PITCH_DEADBAND: f64 = 0.01;

/// Tuning constants of the simplified flight model.
///
/// All rates are expressed per flight frame, not per second.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfig {
    pub name: String,
    pub max_speed: f64,
    /// Speed gained per frame while the throttle is held.
    pub acceleration: f64,
    /// Speed lost per frame while the throttle is released.
    pub deceleration: f64,
    /// Yaw change per frame (radians).
    pub turn_rate: f64,
    /// Pitch change per frame (radians), half of it while recovering to level.
    pub pitch_rate: f64,
    /// Altitude lost per frame before lift is taken into account.
    pub gravity: f64,
    /// Scales how much forward speed offsets gravity.
    pub lift_factor: f64,
    /// Uniform scale applied to the rendered model.
    pub model_scale: f32,
    /// Propeller rotation per frame at max speed (radians).
    pub propeller_spin_rate: f32,
    pub start: StartConfig,
}

impl Default for AircraftConfig {
    fn default() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            max_speed: 5.0,
            acceleration: 0.05,
            deceleration: 0.02,
            turn_rate: 0.02,
            pitch_rate: 0.02,
            gravity: 0.01,
            lift_factor: 0.005,
            model_scale: 5.0,
            propeller_spin_rate: 0.3,
            start: StartConfig::default(),
        }
    }
}

impl AircraftConfig {
    /// Fraction of max speed, used to drive the propeller animation.
    pub fn throttle_fraction(&self, speed: f64) -> f64 {
        if self.max_speed > 0.0 {
            (speed / self.max_speed).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("aircraft.acceleration", self.acceleration),
            ("aircraft.deceleration", self.deceleration),
            ("aircraft.turn_rate", self.turn_rate),
            ("aircraft.pitch_rate", self.pitch_rate),
            ("aircraft.gravity", self.gravity),
            ("aircraft.lift_factor", self.lift_factor),
        ];
        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be finite and non-negative, got {value}"),
                ));
            }
        }

        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(ConfigError::invalid(
                "aircraft.max_speed",
                format!("must be positive, got {}", self.max_speed),
            ));
        }

        if !self.model_scale.is_finite() || self.model_scale <= 0.0 {
            return Err(ConfigError::invalid(
                "aircraft.model_scale",
                format!("must be positive, got {}", self.model_scale),
            ));
        }

        if self.start.position.iter().any(|v| !v.is_finite()) || self.start.position.y < 0.0 {
            return Err(ConfigError::invalid(
                "aircraft.start.position",
                "must be finite and above the ground plane",
            ));
        }

        if self.start.pitch.abs() > PITCH_LIMIT {
            return Err(ConfigError::invalid(
                "aircraft.start.pitch",
                format!("must lie within ±{PITCH_LIMIT}"),
            ));
        }

        Ok(())
    }
}
