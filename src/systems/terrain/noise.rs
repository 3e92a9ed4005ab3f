use glam::Vec2;
use noise::{NoiseFn, OpenSimplex};

/// Octave summed OpenSimplex noise, normalised to roughly [-1, 1].
pub struct NoiseGenerator {
    noise: OpenSimplex,
}

impl NoiseGenerator {
    pub fn new(seed: u64) -> Self {
        // OpenSimplex takes a 32 bit seed, fold the high half in.
        let seed = (seed ^ (seed >> 32)) as u32;
        Self {
            noise: OpenSimplex::new(seed),
        }
    }

    pub fn get_noise(
        &self,
        pos: Vec2,
        scale: f32,
        octaves: u32,
        persistence: f32,
        lacunarity: f32,
    ) -> f32 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut noise_value = 0.0;
        let mut weight = 0.0;

        for _ in 0..octaves {
            let sample_x = pos.x as f64 * frequency as f64 / scale as f64;
            let sample_y = pos.y as f64 * frequency as f64 / scale as f64;

            noise_value += self.noise.get([sample_x, sample_y]) as f32 * amplitude;

            weight += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if weight > 0.0 {
            noise_value / weight
        } else {
            0.0
        }
    }
}
