//! Stage D: gas giants

use rules::gas_giant::{gas_giant_mass_density, gas_giant_size};
use rules::orbits::eccentricity;
use star_system::{ForbiddenZone, GasGiant, Star, World};
use units::{Length, Mass};

use crate::error::Result;
use crate::generation::SystemGenerator;
use crate::moons::{Bulk, MoonParent};
use crate::orbits::{in_forbidden_zone, OrbitLayout, OrbitalElements};

impl SystemGenerator {
    /// Rolls a gas giant for each candidate orbit the arrangement allows
    pub(crate) fn place_gas_giants(
        &mut self,
        star: &Star,
        layout: &OrbitLayout,
        forbidden: &[ForbiddenZone],
        worlds: &mut Vec<World>,
    ) -> Result<()> {
        let mut placed = 0;
        for &orbit in &layout.orbits {
            if in_forbidden_zone(orbit, forbidden) {
                let allowed =
                    placed == 0 && self.options.allow_first_gas_giant_in_forbidden_zone;
                if !allowed {
                    continue;
                }
            }

            let roll = self.dice.roll_3d6();
            let threshold = layout
                .arrangement
                .placement_threshold(orbit < star.snow_line);
            if !threshold.is_some_and(|threshold| roll <= threshold) {
                continue;
            }

            let size = gas_giant_size(self.dice.roll_3d6())?;
            let mass_density = gas_giant_mass_density(size, self.dice.roll_3d6())?;
            let diameter = mass_density.diameter();
            let eccentricity = eccentricity(self.dice.roll_3d6())?;

            if let Some(previous) = worlds.last() {
                if overlaps(orbit, diameter, previous.orbital_radius()) {
                    log::trace!(
                        "{} gas giant at {:.3} AU overlaps the world at {:.3} AU",
                        size,
                        orbit,
                        previous.orbital_radius()
                    );
                    continue;
                }
            }

            let bulk = Bulk {
                size: size.world_size(),
                density: mass_density.density,
                mass: mass_density.mass,
                diameter,
            };
            let elements = OrbitalElements::new(
                orbit,
                eccentricity,
                self.constants
                    .orbital_period(Length::from_au(orbit), Mass::from_solar_masses(star.mass)),
            );
            let body = self.populate_world(bulk, elements, MoonParent::GasGiant, star)?;
            let world = World::GasGiant(GasGiant {
                body,
                gas_giant_size: size,
            });
            log::trace!("Placed {}", world);
            worlds.push(world);
            placed += 1;
        }
        log::debug!("Placed {} gas giants", placed);
        Ok(())
    }
}

/// Whether a gas giant of `diameter` at `orbit` reaches the previously
/// placed world
///
/// The ruleset compares the half-diameter in Earth diameters directly with
/// the orbital distance in AU.
pub(crate) fn overlaps(orbit: f64, diameter: f64, previous_orbit: f64) -> bool {
    (orbit - previous_orbit).abs() <= diameter / 2.0
}
