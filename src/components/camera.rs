use bevy::prelude::*;

use crate::resources::CameraConfig;

/// Camera that trails the player aircraft along its heading.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct ChaseCamera {
    /// Horizontal distance behind the aircraft.
    pub distance: f32,
    /// Height above the aircraft.
    pub height: f32,
    /// Vertical field of view (degrees).
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl ChaseCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            distance: config.distance,
            height: config.height,
            fov_degrees: config.fov_degrees,
            near: config.near,
            far: config.far,
        }
    }

    /// Eye position and look target for an aircraft at `target` flying along
    /// the horizontal unit vector `heading`.
    pub fn pose(&self, target: Vec3, heading: Vec3) -> (Vec3, Vec3) {
        let eye = target - heading * self.distance + Vec3::Y * self.height;
        (eye, target)
    }

    pub fn transform(&self, target: Vec3, heading: Vec3) -> Transform {
        let (eye, target) = self.pose(target, heading);
        Transform::from_translation(eye).looking_at(target, Vec3::Y)
    }
}
