//! Moons of planets and gas giants

use rules::{MoonSize, WorldSize};
use serde::{Deserialize, Serialize};

/// A moon orbiting a world
///
/// Orbits are measured in Earth diameters from the parent's center. Tidal
/// effects are in the ruleset's relative units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Moon {
    pub size: MoonSize,
    /// Size class of a major moon; moonlets have none
    pub world_size: Option<WorldSize>,
    pub orbit: f64,
    pub orbital_period: f64,
    pub tidal_effect_on_world: f64,
    pub tidal_effect_from_planet: f64,
    pub density: f64,
    pub mass: f64,
    pub diameter: f64,
    pub eccentricity: f64,
    pub apoapsis: f64,
    pub periapsis: f64,
    pub rotation_period: f64,
    pub is_tide_locked: bool,
}

impl Moon {
    pub fn is_major(&self) -> bool {
        self.size == MoonSize::Major
    }
}
