//! Surface tables keyed by world size and classifier
//!
//! Covers temperature, blackbody correction, core composition, size
//! constraints and atmospheric pressure, plus the climate and pressure
//! categories read back from the resulting values.

use dice::RollRange;
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::{KeyedTable, RuleTable};
use crate::world::{WorldClassifier, WorldSize, WorldType};

use crate::world::WorldClassifier as C;
use crate::world::WorldSize as S;

/// Average surface temperature band, in Kelvin
///
/// Temperature = `min` + `step` × (3d6 − 3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureStep {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl TemperatureStep {
    const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn temperature(&self, roll: i32) -> f64 {
        self.step * f64::from(roll - 3) + self.min
    }
}

pub static SURFACE_TEMPERATURE: KeyedTable<WorldType, TemperatureStep> = KeyedTable::new(
    "surface temperature",
    &[
        ((S::None, C::AsteroidBelt), TemperatureStep::new(140.0, 500.0, 24.0)),
        ((S::Tiny, C::Ice), TemperatureStep::new(80.0, 140.0, 4.0)),
        ((S::Tiny, C::Sulfur), TemperatureStep::new(80.0, 140.0, 4.0)),
        ((S::Tiny, C::Rock), TemperatureStep::new(140.0, 500.0, 24.0)),
        ((S::Small, C::Hadean), TemperatureStep::new(50.0, 80.0, 2.0)),
        ((S::Small, C::Ice), TemperatureStep::new(80.0, 140.0, 4.0)),
        ((S::Small, C::Rock), TemperatureStep::new(140.0, 500.0, 24.0)),
        ((S::Standard, C::Hadean), TemperatureStep::new(50.0, 80.0, 2.0)),
        ((S::Standard, C::Ammonia), TemperatureStep::new(140.0, 215.0, 5.0)),
        ((S::Standard, C::Ice), TemperatureStep::new(80.0, 230.0, 10.0)),
        ((S::Standard, C::Ocean), TemperatureStep::new(250.0, 340.0, 6.0)),
        ((S::Standard, C::Garden), TemperatureStep::new(250.0, 340.0, 6.0)),
        ((S::Standard, C::Greenhouse), TemperatureStep::new(500.0, 950.0, 30.0)),
        ((S::Standard, C::Chthonian), TemperatureStep::new(500.0, 950.0, 30.0)),
        ((S::Large, C::Ammonia), TemperatureStep::new(140.0, 215.0, 5.0)),
        ((S::Large, C::Ice), TemperatureStep::new(80.0, 230.0, 10.0)),
        ((S::Large, C::Ocean), TemperatureStep::new(230.0, 340.0, 6.0)),
        ((S::Large, C::Garden), TemperatureStep::new(230.0, 340.0, 6.0)),
        ((S::Large, C::Greenhouse), TemperatureStep::new(500.0, 950.0, 30.0)),
        ((S::Large, C::Chthonian), TemperatureStep::new(500.0, 950.0, 30.0)),
    ],
);

/// Atmospheric absorption factor: fixed, or banded by water coverage
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Absorption {
    Fixed(f64),
    ByWaterCoverage,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackbodyFactors {
    pub absorption: Absorption,
    pub greenhouse: f64,
}

impl BlackbodyFactors {
    const fn fixed(absorption: f64, greenhouse: f64) -> Self {
        Self {
            absorption: Absorption::Fixed(absorption),
            greenhouse,
        }
    }

    const fn ocean(greenhouse: f64) -> Self {
        Self {
            absorption: Absorption::ByWaterCoverage,
            greenhouse,
        }
    }

    pub fn absorption(&self, water_coverage: f64) -> f64 {
        match self.absorption {
            Absorption::Fixed(value) => value,
            Absorption::ByWaterCoverage => ocean_absorption(water_coverage),
        }
    }
}

pub static BLACKBODY_FACTORS: KeyedTable<WorldType, BlackbodyFactors> = KeyedTable::new(
    "blackbody correction",
    &[
        ((S::None, C::AsteroidBelt), BlackbodyFactors::fixed(0.97, 0.0)),
        ((S::Tiny, C::Ice), BlackbodyFactors::fixed(0.86, 0.0)),
        ((S::Tiny, C::Rock), BlackbodyFactors::fixed(0.97, 0.0)),
        ((S::Tiny, C::Sulfur), BlackbodyFactors::fixed(0.77, 0.0)),
        ((S::Small, C::Hadean), BlackbodyFactors::fixed(0.67, 0.0)),
        ((S::Small, C::Ice), BlackbodyFactors::fixed(0.93, 0.1)),
        ((S::Small, C::Rock), BlackbodyFactors::fixed(0.96, 0.0)),
        ((S::Standard, C::Hadean), BlackbodyFactors::fixed(0.67, 0.0)),
        ((S::Standard, C::Ammonia), BlackbodyFactors::fixed(0.84, 0.2)),
        ((S::Standard, C::Ice), BlackbodyFactors::fixed(0.86, 0.2)),
        ((S::Standard, C::Ocean), BlackbodyFactors::ocean(0.16)),
        ((S::Standard, C::Garden), BlackbodyFactors::fixed(0.88, 0.16)),
        ((S::Standard, C::Greenhouse), BlackbodyFactors::fixed(0.77, 2.0)),
        ((S::Standard, C::Chthonian), BlackbodyFactors::fixed(0.97, 0.0)),
        ((S::Large, C::Ammonia), BlackbodyFactors::fixed(0.84, 0.2)),
        ((S::Large, C::Ice), BlackbodyFactors::fixed(0.86, 0.2)),
        ((S::Large, C::Ocean), BlackbodyFactors::ocean(0.16)),
        ((S::Large, C::Garden), BlackbodyFactors::fixed(0.88, 0.16)),
        ((S::Large, C::Greenhouse), BlackbodyFactors::fixed(0.77, 2.0)),
        ((S::Large, C::Chthonian), BlackbodyFactors::fixed(0.97, 0.0)),
    ],
);

/// Absorption of an ocean world, banded by the fraction of surface under water
pub fn ocean_absorption(water_coverage: f64) -> f64 {
    if water_coverage <= 0.2 {
        0.95
    } else if water_coverage <= 0.5 {
        0.92
    } else if water_coverage <= 0.9 {
        0.88
    } else {
        0.84
    }
}

/// Multiplier applied to the average surface temperature to get the
/// blackbody temperature
pub fn blackbody_correction(
    size: WorldSize,
    classifier: WorldClassifier,
    atmospheric_mass: f64,
    water_coverage: f64,
) -> Result<f64, TableError> {
    let factors = BLACKBODY_FACTORS.get(&(size, classifier))?;
    Ok(factors.absorption(water_coverage) * (1.0 + atmospheric_mass * factors.greenhouse))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreType {
    Icy,
    SmallIron,
    LargeIron,
}

impl CoreType {
    pub fn density_table(&self) -> &'static RuleTable<f64> {
        match self {
            Self::Icy => &ICY_CORE_DENSITY,
            Self::SmallIron => &SMALL_IRON_CORE_DENSITY,
            Self::LargeIron => &LARGE_IRON_CORE_DENSITY,
        }
    }
}

impl std::fmt::Display for CoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Icy => write!(f, "Icy Core"),
            Self::SmallIron => write!(f, "Small Iron Core"),
            Self::LargeIron => write!(f, "Large Iron Core"),
        }
    }
}

pub static CORE_TYPE: KeyedTable<WorldType, CoreType> = KeyedTable::new(
    "core type",
    &[
        ((S::Tiny, C::Sulfur), CoreType::Icy),
        ((S::Tiny, C::Ice), CoreType::Icy),
        ((S::Small, C::Hadean), CoreType::Icy),
        ((S::Small, C::Ice), CoreType::Icy),
        ((S::Standard, C::Hadean), CoreType::Icy),
        ((S::Standard, C::Ammonia), CoreType::Icy),
        ((S::Large, C::Ammonia), CoreType::Icy),
        ((S::Tiny, C::Rock), CoreType::SmallIron),
        ((S::Small, C::Rock), CoreType::SmallIron),
        ((S::None, C::AsteroidBelt), CoreType::LargeIron),
        ((S::Standard, C::Ice), CoreType::LargeIron),
        ((S::Standard, C::Ocean), CoreType::LargeIron),
        ((S::Standard, C::Garden), CoreType::LargeIron),
        ((S::Standard, C::Greenhouse), CoreType::LargeIron),
        ((S::Standard, C::Chthonian), CoreType::LargeIron),
        ((S::Large, C::Ice), CoreType::LargeIron),
        ((S::Large, C::Ocean), CoreType::LargeIron),
        ((S::Large, C::Garden), CoreType::LargeIron),
        ((S::Large, C::Greenhouse), CoreType::LargeIron),
        ((S::Large, C::Chthonian), CoreType::LargeIron),
    ],
);

pub static ICY_CORE_DENSITY: RuleTable<f64> = RuleTable::new(
    "icy core density",
    &[
        (RollRange::at_most(6), 0.3),
        (RollRange::new(7, 10), 0.4),
        (RollRange::new(11, 14), 0.5),
        (RollRange::new(15, 17), 0.6),
        (RollRange::at_least(18), 0.7),
    ],
);

pub static SMALL_IRON_CORE_DENSITY: RuleTable<f64> = RuleTable::new(
    "small iron core density",
    &[
        (RollRange::at_most(6), 0.6),
        (RollRange::new(7, 10), 0.7),
        (RollRange::new(11, 14), 0.8),
        (RollRange::new(15, 17), 0.9),
        (RollRange::at_least(18), 1.0),
    ],
);

pub static LARGE_IRON_CORE_DENSITY: RuleTable<f64> = RuleTable::new(
    "large iron core density",
    &[
        (RollRange::at_most(6), 0.8),
        (RollRange::new(7, 10), 0.9),
        (RollRange::new(11, 14), 1.0),
        (RollRange::new(15, 17), 1.1),
        (RollRange::at_least(18), 1.2),
    ],
);

pub fn core_type(size: WorldSize, classifier: WorldClassifier) -> Result<CoreType, TableError> {
    CORE_TYPE.get(&(size, classifier)).copied()
}

/// Density relative to Earth for a core type
pub fn core_density(core: CoreType, roll: i32) -> Result<f64, TableError> {
    core.density_table().lookup(roll).copied()
}

/// Bounds on `sqrt(blackbody / density)` scaling for each size class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeConstraint {
    pub min: f64,
    pub max: f64,
}

impl SizeConstraint {
    const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

pub static SIZE_CONSTRAINTS: KeyedTable<WorldSize, SizeConstraint> = KeyedTable::new(
    "size constraints",
    &[
        (S::None, SizeConstraint::new(0.0, 0.0)),
        (S::Tiny, SizeConstraint::new(0.004, 0.024)),
        (S::Small, SizeConstraint::new(0.024, 0.03)),
        (S::Standard, SizeConstraint::new(0.03, 0.065)),
        (S::Large, SizeConstraint::new(0.065, 0.091)),
    ],
);

pub fn size_constraint(size: WorldSize) -> Result<SizeConstraint, TableError> {
    SIZE_CONSTRAINTS.get(&size).copied()
}

pub static PRESSURE_FACTOR: KeyedTable<WorldType, f64> = KeyedTable::new(
    "pressure factor",
    &[
        ((S::None, C::AsteroidBelt), 0.0),
        ((S::Tiny, C::Ice), 0.0),
        ((S::Tiny, C::Sulfur), 0.0),
        ((S::Tiny, C::Rock), 0.0),
        ((S::Small, C::Hadean), 0.0),
        ((S::Small, C::Ice), 10.0),
        ((S::Small, C::Rock), 0.0),
        ((S::Standard, C::Hadean), 0.0),
        ((S::Standard, C::Ammonia), 1.0),
        ((S::Standard, C::Ice), 1.0),
        ((S::Standard, C::Ocean), 1.0),
        ((S::Standard, C::Garden), 1.0),
        ((S::Standard, C::Greenhouse), 100.0),
        ((S::Standard, C::Chthonian), 0.0),
        ((S::Large, C::Ammonia), 5.0),
        ((S::Large, C::Ice), 5.0),
        ((S::Large, C::Ocean), 5.0),
        ((S::Large, C::Garden), 5.0),
        ((S::Large, C::Greenhouse), 500.0),
        ((S::Large, C::Chthonian), 0.0),
    ],
);

pub fn pressure_factor(size: WorldSize, classifier: WorldClassifier) -> Result<f64, TableError> {
    PRESSURE_FACTOR.get(&(size, classifier)).copied()
}

/// Climate band of a world's average surface temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldClimate {
    Frozen,
    VeryCold,
    Cold,
    Chilly,
    Cool,
    Normal,
    Warm,
    Tropical,
    Hot,
    VeryHot,
    Infernal,
}

impl WorldClimate {
    /// Climate for a temperature in Kelvin; an undefined temperature reads as `Normal`
    pub fn from_temperature(kelvin: f64) -> Self {
        if kelvin.is_nan() {
            return Self::Normal;
        }
        match kelvin {
            t if t < 244.0 => Self::Frozen,
            t if t <= 255.0 => Self::VeryCold,
            t if t <= 266.0 => Self::Cold,
            t if t <= 278.0 => Self::Chilly,
            t if t <= 289.0 => Self::Cool,
            t if t <= 300.0 => Self::Normal,
            t if t <= 311.0 => Self::Warm,
            t if t <= 322.0 => Self::Tropical,
            t if t <= 333.0 => Self::Hot,
            t if t <= 344.0 => Self::VeryHot,
            _ => Self::Infernal,
        }
    }
}

impl std::fmt::Display for WorldClimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Frozen => write!(f, "Frozen"),
            Self::VeryCold => write!(f, "Very Cold"),
            Self::Cold => write!(f, "Cold"),
            Self::Chilly => write!(f, "Chilly"),
            Self::Cool => write!(f, "Cool"),
            Self::Normal => write!(f, "Normal"),
            Self::Warm => write!(f, "Warm"),
            Self::Tropical => write!(f, "Tropical"),
            Self::Hot => write!(f, "Hot"),
            Self::VeryHot => write!(f, "Very Hot"),
            Self::Infernal => write!(f, "Infernal"),
        }
    }
}

/// Pressure band of a world's surface atmosphere, in Earth atmospheres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtmosphericPressureCategory {
    Trace,
    VeryThin,
    Thin,
    Standard,
    Dense,
    VeryDense,
    Superdense,
}

impl AtmosphericPressureCategory {
    /// Category for a pressure in atmospheres; an undefined pressure reads as `Standard`
    pub fn from_pressure(atmospheres: f64) -> Self {
        if atmospheres.is_nan() {
            return Self::Standard;
        }
        match atmospheres {
            p if p < 0.01 => Self::Trace,
            p if p <= 0.5 => Self::VeryThin,
            p if p <= 0.8 => Self::Thin,
            p if p <= 1.2 => Self::Standard,
            p if p <= 1.5 => Self::Dense,
            p if p <= 10.0 => Self::VeryDense,
            _ => Self::Superdense,
        }
    }
}

impl std::fmt::Display for AtmosphericPressureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "Trace"),
            Self::VeryThin => write!(f, "Very Thin"),
            Self::Thin => write!(f, "Thin"),
            Self::Standard => write!(f, "Standard"),
            Self::Dense => write!(f, "Dense"),
            Self::VeryDense => write!(f, "Very Dense"),
            Self::Superdense => write!(f, "Superdense"),
        }
    }
}

pub fn surface_temperature(
    size: WorldSize,
    classifier: WorldClassifier,
) -> Result<TemperatureStep, TableError> {
    SURFACE_TEMPERATURE.get(&(size, classifier)).copied()
}
