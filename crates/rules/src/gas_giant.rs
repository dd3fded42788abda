//! Gas giant arrangement, size and bulk tables

use dice::RollRange;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::RuleTable;
use crate::world::WorldSize;

/// How gas giants are distributed around a star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasGiantArrangement {
    None,
    /// Gas giants only beyond the snow line
    Conventional,
    /// Some gas giants migrated inside the snow line
    Eccentric,
    /// Hot jupiters close to the star
    Epistellar,
}

impl GasGiantArrangement {
    /// Highest 3d6 roll that places a gas giant at an orbit, or `None` when
    /// no gas giant may be placed there
    pub fn placement_threshold(&self, inside_snow_line: bool) -> Option<i32> {
        match (self, inside_snow_line) {
            (Self::None, _) => None,
            (Self::Conventional, true) => None,
            (Self::Conventional, false) => Some(15),
            (Self::Eccentric, true) => Some(8),
            (Self::Eccentric, false) => Some(14),
            (Self::Epistellar, true) => Some(6),
            (Self::Epistellar, false) => Some(14),
        }
    }
}

impl std::fmt::Display for GasGiantArrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Conventional => write!(f, "Conventional"),
            Self::Eccentric => write!(f, "Eccentric"),
            Self::Epistellar => write!(f, "Epistellar"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasGiantSize {
    Small,
    Medium,
    Large,
}

impl GasGiantSize {
    /// Terrestrial size class used for a gas giant's moons
    pub fn world_size(&self) -> WorldSize {
        match self {
            Self::Small => WorldSize::Small,
            Self::Medium => WorldSize::Standard,
            Self::Large => WorldSize::Large,
        }
    }

    pub fn mass_density_table(&self) -> &'static RuleTable<GasGiantMassDensity> {
        match self {
            Self::Small => &SMALL_GAS_GIANT,
            Self::Medium => &MEDIUM_GAS_GIANT,
            Self::Large => &LARGE_GAS_GIANT,
        }
    }
}

impl std::fmt::Display for GasGiantSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "Small"),
            Self::Medium => write!(f, "Medium"),
            Self::Large => write!(f, "Large"),
        }
    }
}

/// Mass in Earth masses and density relative to Earth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasGiantMassDensity {
    pub mass: f64,
    pub density: f64,
}

impl GasGiantMassDensity {
    const fn new(mass: f64, density: f64) -> Self {
        Self { mass, density }
    }

    /// Diameter in Earth diameters
    pub fn diameter(&self) -> f64 {
        (self.mass / self.density).cbrt()
    }
}

pub static GAS_GIANT_ARRANGEMENT: RuleTable<GasGiantArrangement> = RuleTable::new(
    "gas giant arrangement",
    &[
        (RollRange::at_most(10), GasGiantArrangement::None),
        (RollRange::new(11, 12), GasGiantArrangement::Conventional),
        (RollRange::new(13, 14), GasGiantArrangement::Eccentric),
        (RollRange::at_least(15), GasGiantArrangement::Epistellar),
    ],
);

pub static GAS_GIANT_SIZE: RuleTable<GasGiantSize> = RuleTable::new(
    "gas giant size",
    &[
        (RollRange::at_most(10), GasGiantSize::Small),
        (RollRange::new(11, 16), GasGiantSize::Medium),
        (RollRange::at_least(17), GasGiantSize::Large),
    ],
);

pub static SMALL_GAS_GIANT: RuleTable<GasGiantMassDensity> = RuleTable::new(
    "small gas giant mass",
    &[
        (RollRange::at_most(8), GasGiantMassDensity::new(10.0, 0.42)),
        (RollRange::new(9, 10), GasGiantMassDensity::new(15.0, 0.26)),
        (RollRange::exactly(11), GasGiantMassDensity::new(20.0, 0.22)),
        (RollRange::exactly(12), GasGiantMassDensity::new(30.0, 0.19)),
        (RollRange::exactly(13), GasGiantMassDensity::new(40.0, 0.17)),
        (RollRange::exactly(14), GasGiantMassDensity::new(50.0, 0.17)),
        (RollRange::exactly(15), GasGiantMassDensity::new(60.0, 0.17)),
        (RollRange::exactly(16), GasGiantMassDensity::new(70.0, 0.17)),
        (RollRange::at_least(17), GasGiantMassDensity::new(80.0, 0.17)),
    ],
);

pub static MEDIUM_GAS_GIANT: RuleTable<GasGiantMassDensity> = RuleTable::new(
    "medium gas giant mass",
    &[
        (RollRange::at_most(8), GasGiantMassDensity::new(100.0, 0.18)),
        (RollRange::new(9, 10), GasGiantMassDensity::new(150.0, 0.19)),
        (RollRange::exactly(11), GasGiantMassDensity::new(200.0, 0.20)),
        (RollRange::exactly(12), GasGiantMassDensity::new(250.0, 0.22)),
        (RollRange::exactly(13), GasGiantMassDensity::new(300.0, 0.24)),
        (RollRange::exactly(14), GasGiantMassDensity::new(350.0, 0.25)),
        (RollRange::exactly(15), GasGiantMassDensity::new(400.0, 0.26)),
        (RollRange::exactly(16), GasGiantMassDensity::new(450.0, 0.27)),
        (RollRange::at_least(17), GasGiantMassDensity::new(500.0, 0.28)),
    ],
);

pub static LARGE_GAS_GIANT: RuleTable<GasGiantMassDensity> = RuleTable::new(
    "large gas giant mass",
    &[
        (RollRange::at_most(8), GasGiantMassDensity::new(600.0, 0.31)),
        (RollRange::new(9, 10), GasGiantMassDensity::new(800.0, 0.35)),
        (RollRange::exactly(11), GasGiantMassDensity::new(1000.0, 0.4)),
        (RollRange::exactly(12), GasGiantMassDensity::new(1500.0, 0.6)),
        (RollRange::exactly(13), GasGiantMassDensity::new(2000.0, 0.8)),
        (RollRange::exactly(14), GasGiantMassDensity::new(2500.0, 1.0)),
        (RollRange::exactly(15), GasGiantMassDensity::new(3000.0, 1.2)),
        (RollRange::exactly(16), GasGiantMassDensity::new(3500.0, 1.4)),
        (RollRange::at_least(17), GasGiantMassDensity::new(4000.0, 1.6)),
    ],
);

pub fn gas_giant_arrangement(roll: i32) -> Result<GasGiantArrangement, TableError> {
    GAS_GIANT_ARRANGEMENT.lookup(roll).copied()
}

pub fn gas_giant_size(roll: i32) -> Result<GasGiantSize, TableError> {
    GAS_GIANT_SIZE.lookup(roll).copied()
}

pub fn gas_giant_mass_density(
    size: GasGiantSize,
    roll: i32,
) -> Result<GasGiantMassDensity, TableError> {
    size.mass_density_table().lookup(roll).copied()
}
