//! The generated star system

use serde::{Deserialize, Serialize};

use crate::star::Star;
use crate::world::World;

/// One generated star system
///
/// `seed` is the seed actually used; generating again with it reproduces
/// the same system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub seed: u64,
    pub stars: Vec<Star>,
    pub worlds: Vec<World>,
}

impl StarSystem {
    pub fn primary_star(&self) -> Option<&Star> {
        self.stars.iter().find(|star| star.is_primary)
    }

    pub fn companions(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter().filter(|star| !star.is_primary)
    }

    pub fn gas_giants(&self) -> impl Iterator<Item = &World> {
        self.worlds.iter().filter(|world| world.is_gas_giant())
    }

    pub fn planets(&self) -> impl Iterator<Item = &World> {
        self.worlds.iter().filter(|world| !world.is_gas_giant())
    }

    /// Total number of moons across every world
    pub fn moon_count(&self) -> usize {
        self.worlds.iter().map(|world| world.moons().len()).sum()
    }
}

impl std::fmt::Display for StarSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Star system (seed {})", self.seed)?;
        for star in &self.stars {
            writeln!(f, "  {}", star)?;
        }
        for world in &self.worlds {
            writeln!(f, "  {} ({} moons)", world, world.moons().len())?;
        }
        Ok(())
    }
}
