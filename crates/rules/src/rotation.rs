//! Rotation tables

use dice::RollRange;

use crate::error::TableError;
use crate::table::RuleTable;
use crate::world::WorldSize;

/// Base modifier on the 3d6 rotation roll for a moon
pub const MOON_ROTATION_MODIFIER: i32 = 18;

/// Rotation rolls above this, or natural rolls of at least
/// [`UNNATURAL_NATURAL_ROLL`], go to the unnatural rotation table
pub const UNNATURAL_ROTATION_ROLL: i32 = 36;
pub const UNNATURAL_NATURAL_ROLL: i32 = 16;

/// Base modifier on the 3d6 rotation roll for a world, in hours
pub fn rotation_modifier(size: WorldSize) -> i32 {
    match size {
        WorldSize::Large => 6,
        WorldSize::Standard => 10,
        WorldSize::Small => 14,
        WorldSize::Tiny => 18,
        WorldSize::None => 0,
    }
}

/// Outcome of a 2d6 roll on the unnatural rotation table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnnaturalRotation {
    /// Keep the rolled rotation
    Keep,
    /// Rotation = 1d6 × 24 × multiplier hours
    Days(f64),
}

pub static UNNATURAL_ROTATION: RuleTable<UnnaturalRotation> = RuleTable::new(
    "unnatural rotation",
    &[
        (RollRange::at_most(6), UnnaturalRotation::Keep),
        (RollRange::exactly(7), UnnaturalRotation::Days(2.0)),
        (RollRange::exactly(8), UnnaturalRotation::Days(5.0)),
        (RollRange::exactly(9), UnnaturalRotation::Days(10.0)),
        (RollRange::exactly(10), UnnaturalRotation::Days(20.0)),
        (RollRange::exactly(11), UnnaturalRotation::Days(50.0)),
        (RollRange::at_least(12), UnnaturalRotation::Days(12.0)),
    ],
);

pub fn unnatural_rotation(roll: i32) -> Result<UnnaturalRotation, TableError> {
    UNNATURAL_ROTATION.lookup(roll).copied()
}

/// Whether a rotation roll must be replaced from the unnatural rotation table
pub fn is_unnatural(rotation: i32, last_natural: i32) -> bool {
    rotation > UNNATURAL_ROTATION_ROLL || last_natural >= UNNATURAL_NATURAL_ROLL
}
