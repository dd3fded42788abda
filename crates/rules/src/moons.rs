//! Moon tables
//!
//! Gas giants carry up to three moon families: inner moonlets, major moons
//! and outer moonlets. Each family's count is modified by how close the
//! parent orbits its star. Terrestrial planets carry major moons or, failing
//! that, moonlets.

use dice::RollRange;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::{KeyedTable, RuleTable};
use crate::world::{WorldClassifier, WorldSize, WorldType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoonSize {
    Moonlet,
    Major,
}

impl std::fmt::Display for MoonSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moonlet => write!(f, "Moonlet"),
            Self::Major => write!(f, "Major"),
        }
    }
}

/// Size steps of a major moon below its parent, by 3d6
pub static MOON_SIZE: RuleTable<i32> = RuleTable::new(
    "moon size",
    &[
        (RollRange::at_most(11), -3),
        (RollRange::new(12, 14), -2),
        (RollRange::at_least(15), -1),
    ],
);

pub fn moon_size_modifier(roll: i32) -> Result<i32, TableError> {
    MOON_SIZE.lookup(roll).copied()
}

/// Size class of a major moon; never smaller than Tiny
pub fn major_moon_size(parent: WorldSize, roll: i32) -> Result<WorldSize, TableError> {
    let index = (parent.index() + moon_size_modifier(roll)?).max(WorldSize::Tiny.index());
    WorldSize::from_index(index).ok_or_else(|| TableError::MissingKey {
        table: "moon size",
        key: format!("size index {}", index),
    })
}

/// Terrestrial type a major moon of each size is synthesized as
///
/// There is no Standard Rock world in the ruleset, so Standard-size major
/// moons are Hadean. A major moon is always smaller than its parent, so none
/// is ever Large.
pub static MAJOR_MOON_TYPE: KeyedTable<WorldSize, WorldType> = KeyedTable::new(
    "major moon type",
    &[
        (WorldSize::Tiny, (WorldSize::Tiny, WorldClassifier::Rock)),
        (WorldSize::Small, (WorldSize::Small, WorldClassifier::Rock)),
        (WorldSize::Standard, (WorldSize::Standard, WorldClassifier::Hadean)),
    ],
);

pub fn major_moon_type(size: WorldSize) -> Result<WorldType, TableError> {
    MAJOR_MOON_TYPE.get(&size).copied()
}

/// Extra Earth-diameter multiples on a planet's major-moon orbit, keyed by
/// the moon-size modifier rolled for it
pub fn planet_major_orbit_modifier(size_modifier: i32) -> i32 {
    match size_modifier {
        -2 => 2,
        -1 => 4,
        _ => 0,
    }
}

/// Modifier on the inner moonlet count of a gas giant at `orbit` AU
pub fn gas_giant_inner_modifier(orbit: f64) -> i32 {
    match orbit {
        r if r <= 0.1 => -10,
        r if r <= 0.5 => -8,
        r if r <= 0.75 => -6,
        r if r <= 1.5 => -3,
        _ => 0,
    }
}

/// Modifier on the major moon count of a gas giant, or `None` when the giant
/// orbits too close to hold major moons
pub fn gas_giant_major_modifier(orbit: f64) -> Option<i32> {
    match orbit {
        r if r <= 0.1 => None,
        r if r <= 0.5 => Some(-5),
        r if r <= 0.75 => Some(-4),
        r if r <= 1.5 => Some(-1),
        _ => Some(0),
    }
}

/// Modifier on the outer moonlet count of a gas giant, or `None` when the
/// giant orbits too close to hold outer moonlets
pub fn gas_giant_outer_modifier(orbit: f64) -> Option<i32> {
    match orbit {
        r if r <= 0.5 => None,
        r if r <= 0.75 => Some(-5),
        r if r <= 1.5 => Some(-4),
        r if r <= 3.0 => Some(-1),
        _ => Some(0),
    }
}

/// Modifier on a terrestrial planet's moon counts, or `None` when the planet
/// can hold no moons at all
pub fn planet_moon_modifier(orbit: f64, size: WorldSize) -> Option<i32> {
    let orbit_modifier = match orbit {
        r if r < 0.5 => return None,
        r if r < 0.75 => -3,
        r if r < 1.5 => -1,
        _ => 0,
    };
    let size_modifier = match size {
        WorldSize::None => return None,
        WorldSize::Tiny => -2,
        WorldSize::Small => -1,
        WorldSize::Standard => 0,
        WorldSize::Large => 1,
    };
    Some(orbit_modifier + size_modifier)
}
