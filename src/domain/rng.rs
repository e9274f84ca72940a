//! Deterministic random source for seeding the universe.
//!
//! Seeding is the only random operation in the simulation, but it has to
//! be injectable: a fixed seed reproduces the exact first generation,
//! which is how tests pin down scenarios and how `--seed` replays a run.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable random source handed to the engine at construction.
///
/// Backed by ChaCha8: the same seed always yields the same sequence of
/// draws regardless of platform.
#[derive(Clone, Debug)]
pub struct LifeRng {
    inner: ChaCha8Rng,
}

impl LifeRng {
    /// Create a source with a fixed seed (reproducible runs and tests)
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy (a fresh pattern per run)
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    /// Draw one aliveness decision with the given probability of alive
    pub fn alive(&mut self, probability: f64) -> bool {
        self.inner.random_bool(probability)
    }
}
