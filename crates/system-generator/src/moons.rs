//! Stage F: moons
//!
//! Moon bodies are synthesized with the same routine as planets, around the
//! parent world instead of a star, and then given their own orbit, period,
//! tidal effects and rotation.

use rules::moons::{
    gas_giant_inner_modifier, gas_giant_major_modifier, gas_giant_outer_modifier,
    major_moon_size, major_moon_type, moon_size_modifier, planet_major_orbit_modifier,
    planet_moon_modifier,
};
use rules::rotation::MOON_ROTATION_MODIFIER;
use rules::world::WorldType;
use rules::{MoonSize, WorldClassifier, WorldSize};
use star_system::{Moon, Star, WorldBody};

use crate::error::Result;
use crate::generation::SystemGenerator;
use crate::orbits::OrbitalElements;

const MOONLET: WorldType = (WorldSize::Tiny, WorldClassifier::Rock);

/// Size and bulk of a world, relative to Earth
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bulk {
    pub size: WorldSize,
    pub density: f64,
    pub mass: f64,
    pub diameter: f64,
}

/// What kind of world a moon orbits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoonParent {
    GasGiant,
    Planet(WorldClassifier),
}

/// Where a moon sits around its parent, which decides its orbit roll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoonFamily {
    /// Moonlets close to a gas giant
    InnerMoonlet,
    /// Major moons of a gas giant
    GasGiantMajor,
    /// Moonlets far out from a gas giant
    OuterMoonlet,
    PlanetMajor,
    PlanetMoonlet,
}

impl MoonFamily {
    pub fn size(&self) -> MoonSize {
        match self {
            Self::GasGiantMajor | Self::PlanetMajor => MoonSize::Major,
            Self::InnerMoonlet | Self::OuterMoonlet | Self::PlanetMoonlet => MoonSize::Moonlet,
        }
    }
}

impl SystemGenerator {
    /// Generates moons for a world, then its rotation
    pub(crate) fn populate_world(
        &mut self,
        bulk: Bulk,
        orbit: OrbitalElements,
        parent: MoonParent,
        star: &Star,
    ) -> Result<WorldBody> {
        let moons = self.generate_moons(&bulk, orbit.radius, parent, star)?;
        let (rotation_period, is_tide_locked) =
            self.world_rotation(&bulk, orbit.period, &moons, star)?;

        Ok(WorldBody {
            size: bulk.size,
            orbital_radius: orbit.radius,
            density: bulk.density,
            mass: bulk.mass,
            diameter: bulk.diameter,
            orbital_period: orbit.period,
            eccentricity: orbit.eccentricity,
            apoapsis: orbit.apoapsis,
            periapsis: orbit.periapsis,
            moons,
            rotation_period,
            is_tide_locked,
        })
    }

    /// All counts are rolled before any moon is generated
    fn generate_moons(
        &mut self,
        bulk: &Bulk,
        orbital_radius: f64,
        parent: MoonParent,
        star: &Star,
    ) -> Result<Vec<Moon>> {
        let families = self.roll_moon_counts(bulk.size, orbital_radius, parent);

        let mut moons = Vec::with_capacity(families.iter().map(|(_, count)| count).sum());
        for (family, count) in families {
            for _ in 0..count {
                moons.push(self.generate_moon(family, bulk, star)?);
            }
        }
        if !moons.is_empty() {
            log::trace!("{} moons at {:.3} AU", moons.len(), orbital_radius);
        }
        Ok(moons)
    }

    pub(crate) fn roll_moon_counts(
        &mut self,
        size: WorldSize,
        orbital_radius: f64,
        parent: MoonParent,
    ) -> Vec<(MoonFamily, usize)> {
        match parent {
            MoonParent::GasGiant => {
                let inner = self.roll_moon_count(2, Some(gas_giant_inner_modifier(orbital_radius)));
                let major = self.roll_moon_count(1, gas_giant_major_modifier(orbital_radius));
                let outer = self.roll_moon_count(1, gas_giant_outer_modifier(orbital_radius));
                vec![
                    (MoonFamily::InnerMoonlet, inner),
                    (MoonFamily::GasGiantMajor, major),
                    (MoonFamily::OuterMoonlet, outer),
                ]
            }
            MoonParent::Planet(WorldClassifier::AsteroidBelt) => Vec::new(),
            MoonParent::Planet(_) => {
                let Some(modifier) = planet_moon_modifier(orbital_radius, size) else {
                    return Vec::new();
                };
                let majors = self.roll_moon_count(1, Some(modifier - 4));
                let moonlets = match majors {
                    0 => self.roll_moon_count(1, Some(modifier - 2)),
                    _ => 0,
                };
                vec![
                    (MoonFamily::PlanetMajor, majors),
                    (MoonFamily::PlanetMoonlet, moonlets),
                ]
            }
        }
    }

    /// Rolls `count`d6 plus the modifier, clamped at zero; no roll without a
    /// modifier
    fn roll_moon_count(&mut self, count: i32, modifier: Option<i32>) -> usize {
        modifier
            .map(|modifier| self.dice.roll_with(count, 6, modifier).max(0) as usize)
            .unwrap_or(0)
    }

    fn generate_moon(&mut self, family: MoonFamily, parent: &Bulk, star: &Star) -> Result<Moon> {
        let size_roll = self.dice.roll_3d6();
        let world_size = match family.size() {
            MoonSize::Major => Some(major_moon_size(parent.size, size_roll)?),
            MoonSize::Moonlet => None,
        };

        let orbit = self.roll_moon_orbit(family, parent.diameter)?;
        let template = match world_size {
            Some(size) => {
                self.synthesize_planet(Some(major_moon_type(size)?), parent.mass, orbit)?
            }
            None => self
                .synthesize_planet(Some(MOONLET), parent.mass, orbit)?
                .stripped(),
        };

        let constants = &self.constants;
        let orbital_period = constants.moon_period(orbit, parent.mass, template.mass);
        let tidal_effect_on_world =
            constants.tidal_effect(template.mass, parent.diameter, orbital_period);
        let tidal_effect_from_planet =
            constants.tidal_effect(parent.mass, template.diameter, orbital_period);
        let tide_locked =
            constants.is_tide_locked(tidal_effect_from_planet, star.age_gyr(), parent.mass);

        let (rotation_period, is_tide_locked) =
            self.resolve_rotation(tide_locked, MOON_ROTATION_MODIFIER, orbital_period)?;

        Ok(Moon {
            size: family.size(),
            world_size,
            orbit,
            orbital_period,
            tidal_effect_on_world,
            tidal_effect_from_planet,
            density: template.density,
            mass: template.mass,
            diameter: template.diameter,
            eccentricity: template.orbit.eccentricity,
            apoapsis: template.orbit.apoapsis,
            periapsis: template.orbit.periapsis,
            rotation_period,
            is_tide_locked,
        })
    }

    /// Orbit in Earth diameters from the parent's center
    pub(crate) fn roll_moon_orbit(&mut self, family: MoonFamily, parent_diameter: f64) -> Result<f64> {
        let multiple = match family {
            MoonFamily::InnerMoonlet | MoonFamily::PlanetMoonlet => {
                f64::from(self.dice.roll_with(1, 6, 4)) / 4.0
            }
            MoonFamily::GasGiantMajor => {
                let mut roll = self.dice.roll_with(3, 6, 3);
                if roll > 15 {
                    roll += self.dice.roll(2, 6);
                }
                f64::from(roll) / 2.0
            }
            MoonFamily::OuterMoonlet => f64::from(self.dice.roll_with(1, 180, 20)),
            MoonFamily::PlanetMajor => {
                let size_modifier = moon_size_modifier(self.dice.roll_3d6())?;
                let modifier = planet_major_orbit_modifier(size_modifier);
                f64::from(self.dice.roll_with(2, 6, modifier)) * 2.5
            }
        };
        Ok(multiple * parent_diameter)
    }
}
