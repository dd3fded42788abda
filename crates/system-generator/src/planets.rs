//! Planet synthesis, the forced habitable world (stage C) and the remaining
//! planets and asteroid belts (stage E)

use rules::orbits::eccentricity;
use rules::resources::resource_value;
use rules::surface::{
    blackbody_correction, core_density, core_type, pressure_factor, size_constraint,
    surface_temperature,
};
use rules::world::{overall_type, world_type, WorldType};
use rules::{ResourceValue, WorldClassifier, WorldSize};
use star_system::{ForbiddenZone, Planet, Star, World};
use units::{Length, Mass};

use crate::error::{GenerationError, Result};
use crate::generation::SystemGenerator;
use crate::moons::{Bulk, MoonParent};
use crate::orbits::{in_forbidden_zone, OrbitalElements};

const HABITABLE_WORLD: WorldType = (WorldSize::Standard, WorldClassifier::Garden);
const ASTEROID_BELT: WorldType = (WorldSize::None, WorldClassifier::AsteroidBelt);

/// Roll modifier for each neighbouring gas giant
const GAS_GIANT_NEIGHBOUR_MODIFIER: i32 = -3;

/// Physical properties of a synthesized world, before moons and rotation
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanetTemplate {
    pub size: WorldSize,
    pub classifier: WorldClassifier,
    pub atmospheric_mass: f64,
    pub water_coverage: f64,
    pub average_surface_temperature: f64,
    pub black_body_temperature: f64,
    pub density: f64,
    pub diameter: f64,
    pub gravity: f64,
    pub mass: f64,
    pub pressure: f64,
    pub resources: ResourceValue,
    pub orbit: OrbitalElements,
}

impl PlanetTemplate {
    /// Moonlets keep no atmosphere or surface water
    pub fn stripped(self) -> Self {
        Self {
            atmospheric_mass: 0.0,
            pressure: 0.0,
            water_coverage: 0.0,
            ..self
        }
    }

    pub fn bulk(&self) -> Bulk {
        Bulk {
            size: self.size,
            density: self.density,
            mass: self.mass,
            diameter: self.diameter,
        }
    }
}

impl SystemGenerator {
    /// Rolls every physical property of a world at `orbit` around a body of
    /// `parent_mass`
    ///
    /// The overall type and world type rolls are made even when the size and
    /// classifier are `predefined`, keeping the draw sequence fixed. This
    /// never generates moons, so moon templates come from here too.
    pub(crate) fn synthesize_planet(
        &mut self,
        predefined: Option<WorldType>,
        parent_mass: f64,
        orbit: f64,
    ) -> Result<PlanetTemplate> {
        let overall = overall_type(self.dice.roll_3d6())?;
        let type_roll = self.dice.roll_3d6();
        let (size, classifier) = match predefined {
            Some(world) => world,
            None => world_type(overall, type_roll)?,
        };

        let atmospheric_mass = f64::from(self.dice.roll_3d6()) / 10.0;

        let mut water_tenths = self.dice.roll_with(1, 6, 4);
        if water_tenths == 10 {
            water_tenths -= self.dice.roll(1, 4);
        }
        let water_coverage = f64::from(water_tenths) * 0.1;

        let temperature = surface_temperature(size, classifier)?.temperature(self.dice.roll_3d6());
        let black_body_temperature =
            blackbody_correction(size, classifier, atmospheric_mass, water_coverage)? * temperature;

        let core = core_type(size, classifier)?;
        let density = core_density(core, self.dice.roll_3d6())?;

        let constraint = size_constraint(size)?;
        let scale = (black_body_temperature / density).sqrt();
        let diameter = planet_diameter(
            scale * constraint.min,
            scale * constraint.max,
            self.dice.roll_with(2, 6, -2),
        );

        let gravity = density * diameter;
        let mass = density * diameter.powi(3);
        let pressure = atmospheric_mass * pressure_factor(size, classifier)? * gravity;
        let resources = resource_value(self.dice.roll_3d6())?;
        let eccentricity = eccentricity(self.dice.roll_3d6())?;
        let period = self
            .constants
            .orbital_period(Length::from_au(orbit), Mass::from_solar_masses(parent_mass));

        let template = PlanetTemplate {
            size,
            classifier,
            atmospheric_mass,
            water_coverage,
            average_surface_temperature: temperature,
            black_body_temperature,
            density,
            diameter,
            gravity,
            mass,
            pressure,
            resources,
            orbit: OrbitalElements::new(orbit, eccentricity, period),
        };

        if classifier == WorldClassifier::AsteroidBelt {
            return Ok(PlanetTemplate {
                atmospheric_mass: 0.0,
                pressure: 0.0,
                density: 0.0,
                ..template
            });
        }
        Ok(template)
    }

    /// Places a Garden world at the candidate orbit nearest the snow line
    /// from inside, pushed out to where its blackbody temperature belongs
    ///
    /// Candidates whose final orbit would fall in a companion's forbidden zone
    /// are passed over. The chosen candidate leaves the pool even when the
    /// world moves out.
    pub(crate) fn place_habitable_world(
        &mut self,
        star: &Star,
        orbits: &mut Vec<f64>,
        forbidden: &[ForbiddenZone],
    ) -> Result<World> {
        let template = self.synthesize_planet(Some(HABITABLE_WORLD), star.mass, star.snow_line)?;
        let habitable = self
            .constants
            .habitable_orbit(template.black_body_temperature, star.luminosity);

        let (index, radius) = orbits
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &orbit)| orbit <= star.snow_line)
            .map(|(index, &orbit)| (index, orbit.max(habitable)))
            .find(|&(_, radius)| !in_forbidden_zone(radius, forbidden))
            .ok_or_else(|| {
                GenerationError::degenerate(format!(
                    "no orbit inside the snow line at {:.3} AU clear of forbidden zones for a habitable world",
                    star.snow_line
                ))
            })?;
        let candidate = orbits.remove(index);

        let template = PlanetTemplate {
            orbit: OrbitalElements::new(
                radius,
                template.orbit.eccentricity,
                self.constants
                    .orbital_period(Length::from_au(radius), Mass::from_solar_masses(star.mass)),
            ),
            ..template
        };

        log::trace!(
            "Habitable world at {:.3} AU ({:.0} km), candidate orbit {:.3} AU",
            radius,
            self.constants.au_to_km(Length::from_au(radius)),
            candidate
        );
        self.finish_planet(template, star)
    }

    /// Fills every free orbit that is clear of forbidden zones
    pub(crate) fn place_planets(
        &mut self,
        star: &Star,
        orbits: &[f64],
        forbidden: &[ForbiddenZone],
        worlds: &mut Vec<World>,
    ) -> Result<()> {
        let mut placed = 0;
        for &orbit in orbits {
            if is_occupied(orbit, worlds) {
                continue;
            }
            if in_forbidden_zone(orbit, forbidden) {
                log::trace!("Orbit {:.3} AU lies in a forbidden zone", orbit);
                continue;
            }

            let modifier = gas_giant_neighbour_modifier(orbit, worlds);
            let predefined = match self.dice.roll_3d6_with(modifier) {
                roll if roll <= 3 => continue,
                4..=6 => Some(ASTEROID_BELT),
                _ => None,
            };

            let template = self.synthesize_planet(predefined, star.mass, orbit)?;
            let world = self.finish_planet(template, star)?;
            log::trace!("Placed {}", world);
            worlds.push(world);
            placed += 1;
        }
        log::debug!("Placed {} planets and asteroid belts", placed);
        Ok(())
    }

    /// Adds moons and rotation to a synthesized world
    fn finish_planet(&mut self, template: PlanetTemplate, star: &Star) -> Result<World> {
        let body = self.populate_world(
            template.bulk(),
            template.orbit,
            MoonParent::Planet(template.classifier),
            star,
        )?;
        Ok(World::Planet(Planet {
            body,
            classifier: template.classifier,
            atmospheric_mass: template.atmospheric_mass,
            water_coverage: template.water_coverage,
            average_surface_temperature: template.average_surface_temperature,
            black_body_temperature: template.black_body_temperature,
            gravity: template.gravity,
            pressure: template.pressure,
            overall_resource_value: template.resources.value,
        }))
    }
}

/// Diameter in Earth diameters, stepped in tenths from `min` to `max` by a
/// 2d6−2 roll
pub(crate) fn planet_diameter(min: f64, max: f64, roll: i32) -> f64 {
    min + f64::from(roll) * (max - min) / 10.0
}

#[allow(clippy::float_cmp)]
fn is_occupied(orbit: f64, worlds: &[World]) -> bool {
    worlds.iter().any(|world| world.orbital_radius() == orbit)
}

/// Modifier from gas giants orbiting immediately inside and outside `orbit`
pub(crate) fn gas_giant_neighbour_modifier(orbit: f64, worlds: &[World]) -> i32 {
    let inward = worlds
        .iter()
        .filter(|world| world.orbital_radius() < orbit)
        .max_by(|a, b| a.orbital_radius().total_cmp(&b.orbital_radius()));
    let outward = worlds
        .iter()
        .filter(|world| world.orbital_radius() > orbit)
        .min_by(|a, b| a.orbital_radius().total_cmp(&b.orbital_radius()));

    [inward, outward]
        .into_iter()
        .flatten()
        .filter(|world| world.is_gas_giant())
        .map(|_| GAS_GIANT_NEIGHBOUR_MODIFIER)
        .sum()
}
