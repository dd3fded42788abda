//! Stage G: rotation of worlds and moons

use rules::rotation::{is_unnatural, rotation_modifier, unnatural_rotation, UnnaturalRotation};
use star_system::{Moon, Star};

use crate::error::Result;
use crate::generation::SystemGenerator;
use crate::moons::Bulk;

impl SystemGenerator {
    /// Rotation of a world from the tides its moons raise on it
    pub(crate) fn world_rotation(
        &mut self,
        bulk: &Bulk,
        orbital_period: f64,
        moons: &[Moon],
        star: &Star,
    ) -> Result<(f64, bool)> {
        let tidal_effect: f64 = moons.iter().map(|moon| moon.tidal_effect_on_world).sum();
        let tide_locked = !moons.is_empty()
            && self
                .constants
                .is_tide_locked(tidal_effect, star.age_gyr(), bulk.mass);

        self.resolve_rotation(tide_locked, rotation_modifier(bulk.size), orbital_period)
    }

    /// Rotation period in hours and whether the body is tide-locked
    ///
    /// Locked bodies turn once per orbit; others roll 3d6 plus `modifier`,
    /// possibly replaced from the unnatural rotation table.
    pub(crate) fn resolve_rotation(
        &mut self,
        tide_locked: bool,
        modifier: i32,
        orbital_period: f64,
    ) -> Result<(f64, bool)> {
        let rotation = match tide_locked {
            true => orbital_period,
            false => self.roll_rotation(modifier)?,
        };
        Ok(clamp_rotation(rotation, tide_locked, orbital_period))
    }

    fn roll_rotation(&mut self, modifier: i32) -> Result<f64> {
        let rolled = self.dice.roll_3d6_with(modifier);
        if !is_unnatural(rolled, self.dice.last_natural()) {
            return Ok(f64::from(rolled));
        }

        match unnatural_rotation(self.dice.roll(2, 6))? {
            UnnaturalRotation::Keep => Ok(f64::from(rolled)),
            UnnaturalRotation::Days(multiplier) => {
                let days = f64::from(self.dice.roll_die(6)) * multiplier;
                Ok(days * self.constants.hours_per_day)
            }
        }
    }
}

/// A body never rotates slower than it orbits; one held to its orbital
/// period is tide-locked
pub(crate) fn clamp_rotation(rotation: f64, tide_locked: bool, orbital_period: f64) -> (f64, bool) {
    if rotation > orbital_period {
        (orbital_period, true)
    } else {
        (rotation, tide_locked)
    }
}
