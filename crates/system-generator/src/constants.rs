//! Physical constants and the ruleset's closed-form formulas
//!
//! Distances are in AU unless noted, stellar quantities in solar units and
//! world quantities relative to Earth.

use serde::{Deserialize, Serialize};
use units::{Length, Mass, KG_PER_SOLAR_MASS, KM_PER_AU};

/// Coefficients of every formula the generator evaluates
///
/// [`PhysicalConstants::STANDARD`] holds the ruleset values. The generator
/// takes its constants by value, so tests can run it against altered ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalConstants {
    pub days_per_year: f64,
    pub hours_per_day: f64,
    /// Stellar radius in AU = coefficient × √L / T²
    pub stellar_radius_coefficient: f64,
    pub inner_limit_mass_factor: f64,
    pub inner_limit_luminosity_factor: f64,
    pub outer_limit_mass_factor: f64,
    pub snow_line_coefficient: f64,
    /// Orbit of a habitable world = coefficient / B² × √L
    pub habitable_orbit_coefficient: f64,
    pub moon_period_coefficient: f64,
    pub tidal_coefficient: f64,
    /// Cumulative tidal effect at which a body locks
    pub tide_lock_threshold: f64,
    pub km_per_au: f64,
    pub kg_per_solar_mass: f64,
}

impl PhysicalConstants {
    pub const STANDARD: Self = Self {
        days_per_year: 365.26,
        hours_per_day: 24.0,
        stellar_radius_coefficient: 155_000.0,
        inner_limit_mass_factor: 0.1,
        inner_limit_luminosity_factor: 0.01,
        outer_limit_mass_factor: 40.0,
        snow_line_coefficient: 4.85,
        habitable_orbit_coefficient: 77_300.0,
        moon_period_coefficient: 0.166,
        tidal_coefficient: 2_230_000.0,
        tide_lock_threshold: 50.0,
        km_per_au: KM_PER_AU,
        kg_per_solar_mass: KG_PER_SOLAR_MASS,
    };

    /// Stellar radius in AU from luminosity and effective temperature
    pub fn stellar_radius(&self, luminosity: f64, temperature: f64) -> f64 {
        self.stellar_radius_coefficient * luminosity.sqrt() / temperature.powi(2)
    }

    /// Closest orbit a planet can form at
    pub fn inner_limit(&self, mass: f64, luminosity: f64) -> f64 {
        let by_mass = self.inner_limit_mass_factor * mass;
        let by_luminosity = self.inner_limit_luminosity_factor * mass * luminosity.sqrt();
        by_mass.max(by_luminosity)
    }

    /// Furthest orbit a planet can form at
    pub fn outer_limit(&self, mass: f64) -> f64 {
        self.outer_limit_mass_factor * mass
    }

    /// Snow line from the star's initial luminosity
    pub fn snow_line(&self, initial_luminosity: f64) -> f64 {
        self.snow_line_coefficient * initial_luminosity.sqrt()
    }

    /// Orbital radius at which a world has the given blackbody temperature
    pub fn habitable_orbit(&self, blackbody_temperature: f64, luminosity: f64) -> f64 {
        self.habitable_orbit_coefficient / blackbody_temperature.powi(2) * luminosity.sqrt()
    }

    /// Orbital period in hours around a central mass
    pub fn orbital_period(&self, orbit: Length, central_mass: Mass) -> f64 {
        (orbit.powi(3) / central_mass.to_solar_masses()).sqrt()
            * self.days_per_year
            * self.hours_per_day
    }

    /// Period of a moon at `orbit` Earth diameters, masses in Earth masses
    pub fn moon_period(&self, orbit: f64, parent_mass: f64, moon_mass: f64) -> f64 {
        self.moon_period_coefficient * (orbit.powi(3) / (parent_mass + moon_mass)).sqrt()
    }

    /// Tidal effect a body of `mass` raises on a body of `diameter`
    pub fn tidal_effect(&self, mass: f64, diameter: f64, period: f64) -> f64 {
        self.tidal_coefficient * mass * diameter * period.powi(3)
    }

    /// Whether a tidal effect sustained over `age_gyr` locks a body of `mass`
    pub fn is_tide_locked(&self, tidal_effect: f64, age_gyr: f64, mass: f64) -> bool {
        tidal_effect * age_gyr / mass >= self.tide_lock_threshold
    }

    pub fn au_to_km(&self, distance: Length) -> f64 {
        distance.to_au() * self.km_per_au
    }

    pub fn solar_masses_to_kg(&self, mass: Mass) -> f64 {
        mass.to_solar_masses() * self.kg_per_solar_mass
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}
