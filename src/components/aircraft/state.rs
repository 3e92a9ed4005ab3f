use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::aircraft::AircraftConfig;

/// Orientation of the aircraft as Euler angles (radians).
///
/// Angles are applied in X, Y, Z order to a model whose nose points along +Z,
/// so a positive pitch lowers the nose and a positive yaw swings it toward +X.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attitude {
    /// Rotation about the lateral axis, nose down positive.
    pub pitch: f64,
    /// Rotation about the vertical axis (heading).
    pub yaw: f64,
    /// Rotation about the longitudinal axis.
    pub roll: f64,
}

impl Attitude {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Render space rotation matching the X, Y, Z application order.
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.pitch as f32,
            self.yaw as f32,
            self.roll as f32,
        )
    }
}

/// Mutable flight state of a single aircraft, advanced once per flight frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    /// World position, y is altitude above the ground plane.
    pub position: Vector3<f64>,
    /// Current orientation.
    pub attitude: Attitude,
    /// Forward speed in world units per frame.
    pub speed: f64,
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::from_config(&AircraftConfig::default())
    }
}

impl AircraftState {
    pub fn new(position: Vector3<f64>, attitude: Attitude, speed: f64) -> Self {
        Self {
            position,
            attitude,
            speed,
        }
    }

    /// Fresh state at the configured start point.
    pub fn from_config(config: &AircraftConfig) -> Self {
        let start = &config.start;
        Self {
            position: start.position,
            attitude: Attitude::new(start.pitch, start.heading, 0.0),
            speed: start.speed.clamp(0.0, config.max_speed),
        }
    }

    /// Unit vector along the current heading in the horizontal plane.
    pub fn heading_vector(&self) -> Vector3<f64> {
        let yaw = self.attitude.yaw;
        Vector3::new(yaw.sin(), 0.0, yaw.cos())
    }
}

/// Boolean control flags consumed by the flight update.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightControls {
    /// Forward thrust, accelerates toward max speed when held.
    pub throttle: bool,
    pub turn_left: bool,
    pub turn_right: bool,
    /// Nose up (climb), drives pitch toward the negative limit.
    pub pitch_up: bool,
    /// Nose down (dive), drives pitch toward the positive limit.
    pub pitch_down: bool,
}

impl FlightControls {
    /// Controls with only the throttle held.
    pub fn throttle() -> Self {
        Self {
            throttle: true,
            ..Default::default()
        }
    }

    pub fn any(&self) -> bool {
        self.throttle || self.turn_left || self.turn_right || self.pitch_up || self.pitch_down
    }

    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
