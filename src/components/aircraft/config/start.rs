use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Where and how the aircraft begins a flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartConfig {
    /// World position (y is altitude).
    pub position: Vector3<f64>,
    /// Initial heading (radians).
    pub heading: f64,
    /// Initial pitch (radians, nose down positive).
    pub pitch: f64,
    /// Initial forward speed, clamped to the aircraft's max speed.
    pub speed: f64,
}

impl Default for StartConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 100.0, 0.0),
            heading: 0.0,
            pitch: 0.0,
            speed: 1.0,
        }
    }
}
