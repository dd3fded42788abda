//! World vocabulary and the world-type tables
//!
//! A world is first given an overall type from a single 3d6 roll, then a
//! second 3d6 roll on that type's table gives its size and classifier.

use dice::RollRange;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::RuleTable;

/// Rough size class of a terrestrial world
///
/// `None` is reserved for asteroid belts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldSize {
    None,
    /// Moons and very small planets (e.g., Mercury)
    Tiny,
    /// Larger moons and small planets (e.g., Titan, Mars)
    Small,
    /// Earth-sized worlds
    Standard,
    /// Super-terrestrials with no counterpart in the solar system
    Large,
}

impl WorldSize {
    /// Ordinal used for relative size steps (Tiny = 0 .. Large = 3, None = -1)
    pub fn index(&self) -> i32 {
        match self {
            Self::None => -1,
            Self::Tiny => 0,
            Self::Small => 1,
            Self::Standard => 2,
            Self::Large => 3,
        }
    }

    /// Inverse of [`index`](Self::index); indices above Large have no size
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            -1 => Some(Self::None),
            0 => Some(Self::Tiny),
            1 => Some(Self::Small),
            2 => Some(Self::Standard),
            3 => Some(Self::Large),
            _ => None,
        }
    }
}

impl std::fmt::Display for WorldSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Tiny => write!(f, "Tiny"),
            Self::Small => write!(f, "Small"),
            Self::Standard => write!(f, "Standard"),
            Self::Large => write!(f, "Large"),
        }
    }
}

/// Classification of a terrestrial world (gas giants are not classified)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldClassifier {
    /// Atmosphere and water, but every ocean is frozen
    Ice,
    /// Shaped by intense volcanism (e.g., Io)
    Sulfur,
    /// Too small to hold an atmosphere, bare rock (e.g., Mercury, Luna)
    Rock,
    /// Could hold an atmosphere but is too cold for one (e.g., Triton)
    Hadean,
    /// Thick ammonia atmosphere, too cold for Earthlike life
    Ammonia,
    /// Global ocean, little or no lifeless land
    Ocean,
    /// Earthlike, with water, life and a breathable atmosphere
    Garden,
    /// Runaway greenhouse (e.g., Venus)
    Greenhouse,
    /// Atmosphere stripped away by its star
    Chthonian,
    AsteroidBelt,
}

impl std::fmt::Display for WorldClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ice => write!(f, "Ice"),
            Self::Sulfur => write!(f, "Sulfur"),
            Self::Rock => write!(f, "Rock"),
            Self::Hadean => write!(f, "Hadean"),
            Self::Ammonia => write!(f, "Ammonia"),
            Self::Ocean => write!(f, "Ocean"),
            Self::Garden => write!(f, "Garden"),
            Self::Greenhouse => write!(f, "Greenhouse"),
            Self::Chthonian => write!(f, "Chthonian"),
            Self::AsteroidBelt => write!(f, "Asteroid Belt"),
        }
    }
}

/// Overall character of a world, selecting which size/classifier table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverallType {
    Hostile,
    Barren,
    Garden,
}

impl std::fmt::Display for OverallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hostile => write!(f, "Hostile"),
            Self::Barren => write!(f, "Barren"),
            Self::Garden => write!(f, "Garden"),
        }
    }
}

/// Size and classifier pair rolled for a world
pub type WorldType = (WorldSize, WorldClassifier);

pub static OVERALL_TYPE: RuleTable<OverallType> = RuleTable::new(
    "overall world type",
    &[
        (RollRange::at_most(7), OverallType::Hostile),
        (RollRange::new(8, 13), OverallType::Barren),
        (RollRange::at_least(14), OverallType::Garden),
    ],
);

pub static HOSTILE_WORLDS: RuleTable<WorldType> = RuleTable::new(
    "hostile world",
    &[
        (RollRange::new(3, 4), (WorldSize::Standard, WorldClassifier::Chthonian)),
        (RollRange::new(5, 6), (WorldSize::Standard, WorldClassifier::Greenhouse)),
        (RollRange::new(7, 9), (WorldSize::Tiny, WorldClassifier::Sulfur)),
        (RollRange::new(10, 12), (WorldSize::Standard, WorldClassifier::Ammonia)),
        (RollRange::new(13, 14), (WorldSize::Large, WorldClassifier::Ammonia)),
        (RollRange::new(15, 16), (WorldSize::Large, WorldClassifier::Greenhouse)),
        (RollRange::new(17, 18), (WorldSize::Large, WorldClassifier::Chthonian)),
    ],
);

pub static BARREN_WORLDS: RuleTable<WorldType> = RuleTable::new(
    "barren world",
    &[
        (RollRange::exactly(3), (WorldSize::Small, WorldClassifier::Hadean)),
        (RollRange::exactly(4), (WorldSize::Small, WorldClassifier::Ice)),
        (RollRange::new(5, 6), (WorldSize::Small, WorldClassifier::Rock)),
        (RollRange::new(7, 8), (WorldSize::Tiny, WorldClassifier::Rock)),
        (RollRange::new(9, 10), (WorldSize::Tiny, WorldClassifier::Ice)),
        (RollRange::new(11, 12), (WorldSize::None, WorldClassifier::AsteroidBelt)),
        (RollRange::new(13, 14), (WorldSize::Standard, WorldClassifier::Ocean)),
        (RollRange::exactly(15), (WorldSize::Standard, WorldClassifier::Ice)),
        (RollRange::exactly(16), (WorldSize::Standard, WorldClassifier::Hadean)),
        (RollRange::exactly(17), (WorldSize::Large, WorldClassifier::Ocean)),
        (RollRange::exactly(18), (WorldSize::Large, WorldClassifier::Ice)),
    ],
);

pub static GARDEN_WORLDS: RuleTable<WorldType> = RuleTable::new(
    "garden world",
    &[
        (RollRange::new(3, 16), (WorldSize::Standard, WorldClassifier::Garden)),
        (RollRange::new(17, 18), (WorldSize::Large, WorldClassifier::Garden)),
    ],
);

pub fn overall_type(roll: i32) -> Result<OverallType, TableError> {
    OVERALL_TYPE.lookup(roll).copied()
}

/// Size and classifier for a world of the given overall type
pub fn world_type(overall: OverallType, roll: i32) -> Result<WorldType, TableError> {
    let table = match overall {
        OverallType::Hostile => &HOSTILE_WORLDS,
        OverallType::Barren => &BARREN_WORLDS,
        OverallType::Garden => &GARDEN_WORLDS,
    };
    table.lookup(roll).copied()
}
