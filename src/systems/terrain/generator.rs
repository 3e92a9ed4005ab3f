use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

use super::noise::NoiseGenerator;
use crate::resources::{SetupError, TerrainConfig};

const DETAIL_PERSISTENCE: f32 = 0.5;
const DETAIL_LACUNARITY: f32 = 2.0;

/// Heightfield of the ground plane.
pub struct TerrainGenerator {
    config: TerrainConfig,
    detail: NoiseGenerator,
}

impl TerrainGenerator {
    pub fn new(config: &TerrainConfig, seed: u64) -> Self {
        Self {
            config: config.clone(),
            detail: NoiseGenerator::new(seed),
        }
    }

    /// Height of the ground at world (x, z).
    ///
    /// Rolling hills inside the hill radius, flat beyond it.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let config = &self.config;
        if x.hypot(z) >= config.hill_radius {
            return 0.0;
        }

        let hills = (x * config.hill_frequency).sin()
            * (z * config.hill_frequency).cos()
            * config.hill_amplitude;

        let detail = if config.detail_amplitude > 0.0 {
            self.detail.get_noise(
                Vec2::new(x, z),
                config.detail_scale,
                config.detail_octaves,
                DETAIL_PERSISTENCE,
                DETAIL_LACUNARITY,
            ) * config.detail_amplitude
        } else {
            0.0
        };

        hills + detail
    }

    /// Builds the vertex grid, centred on the origin.
    pub fn grid(&self) -> Result<TerrainGrid, SetupError> {
        let cells = self.config.subdivisions;
        if cells == 0 {
            return Err(SetupError::Terrain(
                "terrain needs at least one subdivision".to_string(),
            ));
        }

        let overflow =
            || SetupError::Terrain(format!("{cells} subdivisions overflow the vertex index"));
        let side = cells.checked_add(1).ok_or_else(overflow)?;
        let vertex_count = side.checked_mul(side).ok_or_else(overflow)?;
        let index_count = cells
            .checked_mul(cells)
            .and_then(|quads| quads.checked_mul(6))
            .ok_or_else(overflow)?;

        let size = self.config.size;
        let step = size / cells as f32;
        let half = size / 2.0;
        let repeat = self.config.texture_repeat;

        let mut positions = Vec::with_capacity(vertex_count as usize);
        let mut uvs = Vec::with_capacity(vertex_count as usize);
        for row in 0..side {
            let z = -half + row as f32 * step;
            for col in 0..side {
                let x = -half + col as f32 * step;
                positions.push([x, self.height(x, z), z]);
                uvs.push([
                    col as f32 / cells as f32 * repeat,
                    row as f32 / cells as f32 * repeat,
                ]);
            }
        }

        let mut indices = Vec::with_capacity(index_count as usize);
        for row in 0..cells {
            for col in 0..cells {
                let a = row * side + col;
                let b = a + 1;
                let c = a + side;
                let d = c + 1;
                // Counter clockwise seen from above
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        Ok(TerrainGrid {
            positions,
            uvs,
            indices,
        })
    }
}

/// Raw mesh data of the terrain, kept separate from the engine mesh for testing.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl TerrainGrid {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn max_height(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| p[1])
            .fold(f32::NEG_INFINITY, f32::max)
    }

    pub fn into_mesh(self) -> Mesh {
        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, self.positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, self.uvs)
        .with_inserted_indices(Indices::U32(self.indices))
        .with_computed_normals()
    }
}
