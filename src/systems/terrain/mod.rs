pub mod generator;
pub mod noise;

pub use generator::{TerrainGenerator, TerrainGrid};
pub use noise::NoiseGenerator;
