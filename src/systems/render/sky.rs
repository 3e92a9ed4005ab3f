use bevy::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::resources::SkyConfig;

/// One cloud sphere before it is turned into an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudPuff {
    pub center: Vec3,
    pub radius: f32,
}

/// Scatters cloud puffs on a ring around the origin.
///
/// Horizontal placement is `r sin(phi) cos(theta)`, `r sin(phi) sin(theta)`,
/// so most clouds sit well inside the outer distance.
pub fn scatter_clouds(config: &SkyConfig, rng: &mut impl Rng) -> Vec<CloudPuff> {
    let [min_radius, max_radius] = config.cloud_radius;
    let [min_distance, max_distance] = config.cloud_distance;

    (0..config.cloud_count)
        .map(|_| {
            let radius = rng.gen_range(min_radius..max_radius);
            let distance = rng.gen_range(min_distance..max_distance);
            let theta = rng.gen_range(0.0..TAU);
            let phi = rng.gen_range(0.0..FRAC_PI_2);
            let height = config.cloud_base + rng.gen::<f32>() * config.cloud_spread;

            CloudPuff {
                center: Vec3::new(
                    distance * phi.sin() * theta.cos(),
                    height,
                    distance * phi.sin() * theta.sin(),
                ),
                radius,
            }
        })
        .collect()
}
