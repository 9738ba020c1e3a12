use crate::density::DensitySource;
use crate::global_variables::{RANDOM_DENSITY_MAX, RANDOM_DENSITY_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform densities in [0, 100] for both directions, drawn fresh each cycle.
#[derive(Debug, Clone)]
pub struct RandomDensity {
    rng: StdRng,
}

impl RandomDensity {
    /// Seeds from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("Seeding random densities with {}", seed);
        Self::seeded(seed)
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DensitySource for RandomDensity {
    fn next_pair(&mut self, _cycle: u32) -> (u32, u32) {
        let a = self.rng.random_range(RANDOM_DENSITY_MIN..=RANDOM_DENSITY_MAX);
        let b = self.rng.random_range(RANDOM_DENSITY_MIN..=RANDOM_DENSITY_MAX);
        (a, b)
    }

    fn varies_per_cycle(&self) -> bool {
        true
    }
}
