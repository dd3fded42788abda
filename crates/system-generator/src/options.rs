//! Generation options

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Input to one generation run
///
/// A seed of 0 asks for a fresh random seed; the seed actually used is
/// recorded on the generated system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorOptions {
    pub seed: u64,
    /// Roll for up to two companion stars
    pub multiple_stars: bool,
    /// Guarantee a Garden world around the primary, biasing the star towards
    /// a mass and age that can support one
    pub force_habitable_planet: bool,
    /// Let the first gas giant sit inside a companion's forbidden zone
    pub allow_first_gas_giant_in_forbidden_zone: bool,
}

impl GeneratorOptions {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn multiple_stars(mut self, enabled: bool) -> Self {
        self.multiple_stars = enabled;
        self
    }

    pub fn force_habitable_planet(mut self, enabled: bool) -> Self {
        self.force_habitable_planet = enabled;
        self
    }

    pub fn allow_first_gas_giant_in_forbidden_zone(mut self, enabled: bool) -> Self {
        self.allow_first_gas_giant_in_forbidden_zone = enabled;
        self
    }

    /// The seed to generate with: the configured seed, or a random nonzero
    /// one when the configured seed is 0
    pub fn resolve_seed(&self) -> u64 {
        match self.seed {
            0 => rand::rng().random_range(1..=u64::MAX),
            seed => seed,
        }
    }
}
