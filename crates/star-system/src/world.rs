//! Worlds orbiting the primary star
//!
//! A world is either a terrestrial [`Planet`] (asteroid belts included) or a
//! [`GasGiant`]. Both share the orbital and bulk properties in [`WorldBody`].

use rules::{
    AtmosphericPressureCategory, GasGiantSize, OverallResourceValue, WorldClassifier,
    WorldClimate, WorldSize,
};
use serde::{Deserialize, Serialize};

use crate::moon::Moon;

/// Properties shared by every kind of world
///
/// Orbital radius, apoapsis and periapsis are in AU, periods and rotation in
/// hours. Density, mass and diameter are relative to Earth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldBody {
    pub size: WorldSize,
    pub orbital_radius: f64,
    pub density: f64,
    pub mass: f64,
    pub diameter: f64,
    pub orbital_period: f64,
    pub eccentricity: f64,
    pub apoapsis: f64,
    pub periapsis: f64,
    pub moons: Vec<Moon>,
    pub rotation_period: f64,
    pub is_tide_locked: bool,
}

/// A terrestrial world or asteroid belt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    #[serde(flatten)]
    pub body: WorldBody,
    pub classifier: WorldClassifier,
    pub atmospheric_mass: f64,
    /// Fraction of the surface covered by water (0..1)
    pub water_coverage: f64,
    /// Average surface temperature in Kelvin
    pub average_surface_temperature: f64,
    /// Blackbody temperature in Kelvin
    pub black_body_temperature: f64,
    /// Surface gravity in G
    pub gravity: f64,
    /// Surface pressure in atmospheres
    pub pressure: f64,
    pub overall_resource_value: OverallResourceValue,
}

impl Planet {
    pub fn is_asteroid_belt(&self) -> bool {
        self.classifier == WorldClassifier::AsteroidBelt
    }

    pub fn climate(&self) -> WorldClimate {
        WorldClimate::from_temperature(self.average_surface_temperature)
    }

    pub fn pressure_category(&self) -> AtmosphericPressureCategory {
        AtmosphericPressureCategory::from_pressure(self.pressure)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasGiant {
    #[serde(flatten)]
    pub body: WorldBody,
    pub gas_giant_size: GasGiantSize,
}

/// Any world orbiting the primary star
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum World {
    Planet(Planet),
    GasGiant(GasGiant),
}

impl World {
    pub fn body(&self) -> &WorldBody {
        match self {
            Self::Planet(planet) => &planet.body,
            Self::GasGiant(giant) => &giant.body,
        }
    }

    pub fn size(&self) -> WorldSize {
        self.body().size
    }

    pub fn orbital_radius(&self) -> f64 {
        self.body().orbital_radius
    }

    pub fn diameter(&self) -> f64 {
        self.body().diameter
    }

    pub fn mass(&self) -> f64 {
        self.body().mass
    }

    pub fn moons(&self) -> &[Moon] {
        &self.body().moons
    }

    pub fn is_gas_giant(&self) -> bool {
        matches!(self, Self::GasGiant(_))
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            Self::Planet(planet) => Some(planet),
            Self::GasGiant(_) => None,
        }
    }

    pub fn as_gas_giant(&self) -> Option<&GasGiant> {
        match self {
            Self::GasGiant(giant) => Some(giant),
            Self::Planet(_) => None,
        }
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Planet(planet) if planet.is_asteroid_belt() => {
                write!(f, "Asteroid Belt at {:.2} AU", planet.body.orbital_radius)
            }
            Self::Planet(planet) => write!(
                f,
                "{} {} world at {:.2} AU",
                planet.body.size, planet.classifier, planet.body.orbital_radius
            ),
            Self::GasGiant(giant) => write!(
                f,
                "{} gas giant at {:.2} AU",
                giant.gas_giant_size, giant.body.orbital_radius
            ),
        }
    }
}
