use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Hands out independent, reproducible RNG streams derived from one master seed.
///
/// Each stream is keyed by a name, so adding a new consumer never shifts the
/// numbers an existing one sees.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    pub fn stream(&self, name: &str) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.master_seed ^ stream_key(name))
    }
}

// FNV-1a, stable across toolchains unlike the std hasher.
fn stream_key(name: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    name.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
