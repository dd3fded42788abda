//! Stage B: candidate orbits around the primary

use rules::gas_giant::gas_giant_arrangement;
use rules::orbits::orbital_spacing;
use rules::GasGiantArrangement;
use star_system::{ForbiddenZone, Star};

use crate::error::Result;
use crate::generation::SystemGenerator;

/// Gas giant arrangement and the orbits worlds may occupy
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OrbitLayout {
    pub arrangement: GasGiantArrangement,
    pub spacing: f64,
    /// Candidate radii in AU, innermost first
    pub orbits: Vec<f64>,
}

/// Orbital elements of a world; radius and apsides in AU, period in hours
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OrbitalElements {
    pub radius: f64,
    pub period: f64,
    pub eccentricity: f64,
    pub apoapsis: f64,
    pub periapsis: f64,
}

impl OrbitalElements {
    pub fn new(radius: f64, eccentricity: f64, period: f64) -> Self {
        Self {
            radius,
            period,
            eccentricity,
            apoapsis: (1.0 + eccentricity) * radius,
            periapsis: (1.0 - eccentricity) * radius,
        }
    }
}

impl SystemGenerator {
    pub(crate) fn roll_orbit_layout(&mut self, star: &Star) -> Result<OrbitLayout> {
        let arrangement = gas_giant_arrangement(self.dice.roll_3d6())?;
        let spacing = orbital_spacing(self.dice.roll_3d6())?;
        Ok(OrbitLayout {
            arrangement,
            spacing,
            orbits: candidate_orbits(star, spacing),
        })
    }
}

/// Geometric sequence of orbits from the inner limit outwards
///
/// Keeps radii clear of the star's surface and strictly inside the formation
/// limits.
pub fn candidate_orbits(star: &Star, spacing: f64) -> Vec<f64> {
    let mut orbits = Vec::new();
    if spacing <= 1.0 || star.inner_limit_radius <= 0.0 {
        return orbits;
    }

    let mut radius = star.inner_limit_radius * spacing;
    while radius < star.outer_limit_radius {
        if radius > star.radius * 2.0
            && radius > star.inner_limit_radius
            && radius < star.outer_limit_radius
        {
            orbits.push(radius);
        }
        radius *= spacing;
    }
    orbits
}

/// Whether `orbit` lies inside any of the companions' forbidden zones
pub fn in_forbidden_zone(orbit: f64, zones: &[ForbiddenZone]) -> bool {
    zones.iter().any(|zone| zone.contains(orbit))
}
