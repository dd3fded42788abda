//! Stars and companion orbits

use rules::{Population, Separation};
use serde::{Deserialize, Serialize};

/// Orbital band around a companion's orbit where no stable planetary orbit
/// exists, in AU from the primary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForbiddenZone {
    pub inner: f64,
    pub outer: f64,
}

impl ForbiddenZone {
    /// Zone spanning a third of the closest approach to three times the
    /// furthest separation
    pub fn from_separation(min_separation: f64, max_separation: f64) -> Self {
        Self {
            inner: min_separation / 3.0,
            outer: max_separation * 3.0,
        }
    }

    pub fn contains(&self, orbit: f64) -> bool {
        orbit >= self.inner && orbit <= self.outer
    }
}

/// Orbit of a companion star around the primary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Companion {
    pub separation: Separation,
    /// Average distance to the primary in AU
    pub average_distance: f64,
    pub eccentricity: f64,
    /// Closest approach to the primary in AU
    pub min_separation: f64,
    /// Furthest distance from the primary in AU
    pub max_separation: f64,
    pub forbidden_zone: ForbiddenZone,
}

impl Companion {
    pub fn new(separation: Separation, average_distance: f64, eccentricity: f64) -> Self {
        let min_separation = (1.0 - eccentricity) * average_distance;
        let max_separation = (1.0 + eccentricity) * average_distance;
        Self {
            separation,
            average_distance,
            eccentricity,
            min_separation,
            max_separation,
            forbidden_zone: ForbiddenZone::from_separation(min_separation, max_separation),
        }
    }
}

/// A star in the system
///
/// Distances are in AU, mass and luminosity in solar units, age in years.
/// Only companion stars carry a [`Companion`] orbit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Star {
    pub mass: f64,
    pub age: f64,
    pub luminosity: f64,
    /// Stellar radius in AU
    pub radius: f64,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    pub spectral_type: String,
    pub population: Population,
    pub is_primary: bool,
    pub inner_limit_radius: f64,
    pub outer_limit_radius: f64,
    pub snow_line: f64,
    pub companion: Option<Companion>,
}

impl Star {
    pub fn is_companion(&self) -> bool {
        self.companion.is_some()
    }

    pub fn forbidden_zone(&self) -> Option<&ForbiddenZone> {
        self.companion.as_ref().map(|c| &c.forbidden_zone)
    }

    /// Age in billions of years
    pub fn age_gyr(&self) -> f64 {
        self.age / 1e9
    }
}

impl std::fmt::Display for Star {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} star, {:.2} M☉, {:.3} L☉, {:.2} Gyr",
            self.spectral_type,
            self.mass,
            self.luminosity,
            self.age_gyr()
        )
    }
}
