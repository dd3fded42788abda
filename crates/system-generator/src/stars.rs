//! Stage A: stars

use rules::orbits::{eccentricity, orbital_separation, star_count};
use rules::stellar::{stellar_evolution, stellar_mass, HABITABLE_MASS_ROW, STELLAR_AGE};
use star_system::{Companion, Star};
use units::Mass;

use crate::error::Result;
use crate::generation::SystemGenerator;

/// Separation bonus for companions of a star forced to host a habitable world
const HABITABLE_SEPARATION_BONUS: i32 = 4;
/// Further separation bonus for the third star of such a system
const THIRD_STAR_SEPARATION_BONUS: i32 = 6;

impl SystemGenerator {
    pub(crate) fn roll_star_count(&mut self) -> Result<usize> {
        if !self.options.multiple_stars {
            return Ok(1);
        }
        Ok(star_count(self.dice.roll_3d6())?)
    }

    /// Generates the star at `index`; index 0 is the primary
    pub(crate) fn generate_star(&mut self, index: usize) -> Result<Star> {
        let mass = self.roll_stellar_mass()?;
        let (age_gyr, population) = self.roll_stellar_age()?;
        let evolution = stellar_evolution(mass)?;

        let luminosity = evolution.luminosity(age_gyr);
        let constants = &self.constants;
        let radius = constants.stellar_radius(luminosity, evolution.temperature);
        let inner_limit_radius = constants.inner_limit(mass, luminosity);
        let outer_limit_radius = constants.outer_limit(mass);
        let snow_line = constants.snow_line(evolution.l_min);

        let companion = match index {
            0 => None,
            _ => Some(self.roll_companion_orbit(index)?),
        };

        let star = Star {
            mass,
            age: age_gyr * 1e9,
            luminosity,
            radius,
            temperature: evolution.temperature,
            spectral_type: evolution.spectral_type.to_string(),
            population,
            is_primary: index == 0,
            inner_limit_radius,
            outer_limit_radius,
            snow_line,
            companion,
        };
        log::trace!(
            "Star {}: {} ({:.3e} kg)",
            index,
            star,
            self.constants.solar_masses_to_kg(Mass::from_solar_masses(star.mass))
        );
        Ok(star)
    }

    /// Two-stage mass roll; a forced habitable world replaces the first
    /// stage with a 1d6 roll limited to Sun-like rows
    fn roll_stellar_mass(&mut self) -> Result<f64> {
        let mut row = self.dice.roll_3d6();
        if self.options.force_habitable_planet {
            row = *HABITABLE_MASS_ROW.lookup(self.dice.roll(1, 6))?;
        }
        let mass_roll = self.dice.roll_3d6();
        Ok(stellar_mass(row, mass_roll)?)
    }

    /// Age in billions of years and the stellar population it falls in
    fn roll_stellar_age(&mut self) -> Result<(f64, rules::Population)> {
        let mut roll = self.dice.roll_3d6();
        if self.options.force_habitable_planet {
            roll = self.dice.roll_with(2, 6, 2);
        }
        let age = STELLAR_AGE.lookup(roll)?;
        let step_a = self.dice.roll_with(1, 6, -1);
        let step_b = self.dice.roll_with(1, 6, -1);
        Ok((age.age_gyr(step_a, step_b), age.population))
    }

    fn roll_companion_orbit(&mut self, index: usize) -> Result<Companion> {
        let mut modifier = 0;
        if self.options.force_habitable_planet {
            modifier += HABITABLE_SEPARATION_BONUS;
            if index == 2 {
                modifier += THIRD_STAR_SEPARATION_BONUS;
            }
        }

        let separation = orbital_separation(self.dice.roll_3d6_with(modifier))?;
        let average_distance = separation.radius_multiplier * f64::from(self.dice.roll(2, 6));
        let eccentricity_roll = self
            .dice
            .roll_3d6_with(separation.separation.eccentricity_modifier());
        let eccentricity = eccentricity(eccentricity_roll)?;

        Ok(Companion::new(
            separation.separation,
            average_distance,
            eccentricity,
        ))
    }
}
