//! Multiple-star and orbital tables

use dice::RollRange;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::RuleTable;

/// Separation class of a companion star from the primary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Separation {
    VeryClose,
    Close,
    Moderate,
    Wide,
    Distant,
}

impl Separation {
    /// Modifier applied to the companion eccentricity roll
    pub fn eccentricity_modifier(&self) -> i32 {
        match self {
            Self::VeryClose => -6,
            Self::Close => -4,
            Self::Moderate => -2,
            Self::Wide | Self::Distant => 0,
        }
    }
}

impl std::fmt::Display for Separation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VeryClose => write!(f, "Very Close"),
            Self::Close => write!(f, "Close"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Wide => write!(f, "Wide"),
            Self::Distant => write!(f, "Distant"),
        }
    }
}

/// Separation class and the AU multiplier applied to 2d6
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalSeparation {
    pub separation: Separation,
    pub radius_multiplier: f64,
}

impl OrbitalSeparation {
    const fn new(separation: Separation, radius_multiplier: f64) -> Self {
        Self {
            separation,
            radius_multiplier,
        }
    }
}

pub static STAR_COUNT: RuleTable<usize> = RuleTable::new(
    "star count",
    &[
        (RollRange::at_most(10), 1),
        (RollRange::new(11, 15), 2),
        (RollRange::at_least(16), 3),
    ],
);

pub static ORBITAL_SEPARATION: RuleTable<OrbitalSeparation> = RuleTable::new(
    "orbital separation",
    &[
        (
            RollRange::at_most(6),
            OrbitalSeparation::new(Separation::VeryClose, 0.05),
        ),
        (
            RollRange::new(7, 9),
            OrbitalSeparation::new(Separation::Close, 0.5),
        ),
        (
            RollRange::new(10, 11),
            OrbitalSeparation::new(Separation::Moderate, 2.0),
        ),
        (
            RollRange::new(12, 14),
            OrbitalSeparation::new(Separation::Wide, 10.0),
        ),
        (
            RollRange::at_least(15),
            OrbitalSeparation::new(Separation::Distant, 50.0),
        ),
    ],
);

/// Eccentricity of every orbit: companion stars, planets and gas giants
pub static ECCENTRICITY: RuleTable<f64> = RuleTable::new(
    "eccentricity",
    &[
        (RollRange::at_most(3), 0.0),
        (RollRange::exactly(4), 0.1),
        (RollRange::exactly(5), 0.2),
        (RollRange::exactly(6), 0.3),
        (RollRange::new(7, 8), 0.4),
        (RollRange::new(9, 11), 0.5),
        (RollRange::new(12, 13), 0.6),
        (RollRange::new(14, 15), 0.7),
        (RollRange::exactly(16), 0.8),
        (RollRange::exactly(17), 0.9),
        (RollRange::at_least(18), 0.95),
    ],
);

/// Ratio between successive candidate orbits
pub static ORBITAL_SPACING: RuleTable<f64> = RuleTable::new(
    "orbital spacing",
    &[
        (RollRange::at_most(4), 1.4),
        (RollRange::new(5, 6), 1.5),
        (RollRange::new(7, 8), 1.6),
        (RollRange::new(9, 12), 1.7),
        (RollRange::new(13, 14), 1.8),
        (RollRange::new(15, 16), 1.9),
        (RollRange::at_least(17), 2.0),
    ],
);

pub fn star_count(roll: i32) -> Result<usize, TableError> {
    STAR_COUNT.lookup(roll).copied()
}

pub fn orbital_separation(roll: i32) -> Result<OrbitalSeparation, TableError> {
    ORBITAL_SEPARATION.lookup(roll).copied()
}

pub fn eccentricity(roll: i32) -> Result<f64, TableError> {
    ECCENTRICITY.lookup(roll).copied()
}

pub fn orbital_spacing(roll: i32) -> Result<f64, TableError> {
    ORBITAL_SPACING.lookup(roll).copied()
}
