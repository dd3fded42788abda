//! Stellar tables: mass, age and evolution
//!
//! Mass is rolled in two stages: the first 3d6 roll selects a row, the second
//! selects a mass within it. The evolution table is keyed by that exact mass.

use dice::{RangeTable, RollRange};
use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::table::RuleTable;

pub static STELLAR_MASS: RuleTable<RangeTable<f64>> = RuleTable::new(
    "stellar mass",
    &[
        (
            RollRange::exactly(3),
            RangeTable::new(&[(RollRange::new(3, 10), 2.0), (RollRange::new(11, 18), 1.9)]),
        ),
        (
            RollRange::exactly(4),
            RangeTable::new(&[
                (RollRange::new(3, 8), 1.8),
                (RollRange::new(9, 11), 1.7),
                (RollRange::new(12, 18), 1.6),
            ]),
        ),
        (
            RollRange::exactly(5),
            RangeTable::new(&[
                (RollRange::new(3, 7), 1.5),
                (RollRange::new(8, 10), 1.45),
                (RollRange::new(11, 12), 1.4),
                (RollRange::new(13, 18), 1.35),
            ]),
        ),
        (
            RollRange::exactly(6),
            RangeTable::new(&[
                (RollRange::new(3, 7), 1.3),
                (RollRange::new(8, 9), 1.25),
                (RollRange::exactly(10), 1.2),
                (RollRange::new(11, 12), 1.15),
                (RollRange::new(13, 18), 1.1),
            ]),
        ),
        (
            RollRange::exactly(7),
            RangeTable::new(&[
                (RollRange::new(3, 7), 1.05),
                (RollRange::new(8, 9), 1.0),
                (RollRange::exactly(10), 0.95),
                (RollRange::new(11, 12), 0.9),
                (RollRange::new(13, 18), 0.85),
            ]),
        ),
        (
            RollRange::exactly(8),
            RangeTable::new(&[
                (RollRange::new(3, 7), 0.8),
                (RollRange::new(8, 9), 0.75),
                (RollRange::exactly(10), 0.7),
                (RollRange::new(11, 12), 0.65),
                (RollRange::new(13, 18), 0.6),
            ]),
        ),
        (
            RollRange::exactly(9),
            RangeTable::new(&[
                (RollRange::new(3, 8), 0.55),
                (RollRange::new(9, 11), 0.5),
                (RollRange::new(12, 18), 0.45),
            ]),
        ),
        (
            RollRange::exactly(10),
            RangeTable::new(&[
                (RollRange::new(3, 8), 0.4),
                (RollRange::new(9, 11), 0.35),
                (RollRange::new(12, 18), 0.3),
            ]),
        ),
        (RollRange::exactly(11), RangeTable::new(&[(RollRange::new(3, 18), 0.25)])),
        (RollRange::exactly(12), RangeTable::new(&[(RollRange::new(3, 18), 0.2)])),
        (RollRange::exactly(13), RangeTable::new(&[(RollRange::new(3, 18), 0.15)])),
        (RollRange::new(14, 18), RangeTable::new(&[(RollRange::new(3, 18), 0.1)])),
    ],
);

/// First-stage mass row used when a habitable world is forced, by 1d6
pub static HABITABLE_MASS_ROW: RuleTable<i32> = RuleTable::new(
    "habitable stellar mass row",
    &[
        (RollRange::exactly(1), 5),
        (RollRange::exactly(2), 6),
        (RollRange::new(3, 4), 7),
        (RollRange::new(5, 6), 8),
    ],
);

/// Stellar mass in solar masses from the two mass rolls
pub fn stellar_mass(row_roll: i32, mass_roll: i32) -> Result<f64, TableError> {
    STELLAR_MASS
        .lookup(row_roll)?
        .lookup(mass_roll)
        .copied()
        .ok_or(TableError::NoRow {
            table: "stellar mass",
            roll: mass_roll,
        })
}

/// Stellar population, from youngest to oldest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Population {
    ExtremePopulationI,
    YoungPopulationI,
    IntermediatePopulationI,
    OldPopulationI,
    IntermediatePopulationII,
    ExtremePopulationII,
}

impl std::fmt::Display for Population {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExtremePopulationI => write!(f, "Extreme Population I"),
            Self::YoungPopulationI => write!(f, "Young Population I"),
            Self::IntermediatePopulationI => write!(f, "Intermediate Population I"),
            Self::OldPopulationI => write!(f, "Old Population I"),
            Self::IntermediatePopulationII => write!(f, "Intermediate Population II"),
            Self::ExtremePopulationII => write!(f, "Extreme Population II"),
        }
    }
}

/// Age coefficients for a stellar population, in billions of years
///
/// Age = base + step_a × (1d6−1) + step_b × (1d6−1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarAge {
    pub population: Population,
    pub base: f64,
    pub step_a: f64,
    pub step_b: f64,
}

impl StellarAge {
    const fn new(population: Population, base: f64, step_a: f64, step_b: f64) -> Self {
        Self {
            population,
            base,
            step_a,
            step_b,
        }
    }

    /// Age in billions of years for the two step rolls
    pub fn age_gyr(&self, step_a_roll: i32, step_b_roll: i32) -> f64 {
        self.base + self.step_a * f64::from(step_a_roll) + self.step_b * f64::from(step_b_roll)
    }
}

pub static STELLAR_AGE: RuleTable<StellarAge> = RuleTable::new(
    "stellar age",
    &[
        (
            RollRange::at_most(3),
            StellarAge::new(Population::ExtremePopulationI, 0.0, 0.0, 0.0),
        ),
        (
            RollRange::new(4, 6),
            StellarAge::new(Population::YoungPopulationI, 0.1, 0.3, 0.05),
        ),
        (
            RollRange::new(7, 10),
            StellarAge::new(Population::IntermediatePopulationI, 2.0, 0.6, 0.1),
        ),
        (
            RollRange::new(11, 14),
            StellarAge::new(Population::OldPopulationI, 5.6, 0.6, 0.1),
        ),
        (
            RollRange::new(15, 17),
            StellarAge::new(Population::IntermediatePopulationII, 8.0, 0.6, 0.1),
        ),
        (
            RollRange::at_least(18),
            StellarAge::new(Population::ExtremePopulationII, 10.0, 0.6, 0.1),
        ),
    ],
);

/// One row of the stellar evolution table
///
/// Luminosities are in solar units, spans in billions of years. The lowest-mass
/// stars have no luminosity growth over their main sequence (`l_max` and
/// `m_span` absent); subgiant and giant spans exist only for the heaviest rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarEvolution {
    pub mass: f64,
    pub spectral_type: &'static str,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    pub l_min: f64,
    pub l_max: Option<f64>,
    /// Main-sequence lifetime
    pub m_span: Option<f64>,
    /// Subgiant lifetime
    pub s_span: Option<f64>,
    /// Giant lifetime
    pub g_span: Option<f64>,
}

impl StellarEvolution {
    const fn dwarf(mass: f64, spectral_type: &'static str, temperature: f64, l_min: f64) -> Self {
        Self {
            mass,
            spectral_type,
            temperature,
            l_min,
            l_max: None,
            m_span: None,
            s_span: None,
            g_span: None,
        }
    }

    const fn main_sequence(
        mass: f64,
        spectral_type: &'static str,
        temperature: f64,
        l_min: f64,
        l_max: f64,
        m_span: f64,
    ) -> Self {
        Self {
            l_max: Some(l_max),
            m_span: Some(m_span),
            ..Self::dwarf(mass, spectral_type, temperature, l_min)
        }
    }

    #[allow(clippy::too_many_arguments)]
    const fn evolving(
        mass: f64,
        spectral_type: &'static str,
        temperature: f64,
        l_min: f64,
        l_max: f64,
        m_span: f64,
        s_span: f64,
        g_span: f64,
    ) -> Self {
        Self {
            s_span: Some(s_span),
            g_span: Some(g_span),
            ..Self::main_sequence(mass, spectral_type, temperature, l_min, l_max, m_span)
        }
    }

    /// Luminosity at `age_gyr`, interpolated from `l_min` to `l_max` by the
    /// fraction of the main-sequence span elapsed
    ///
    /// Rows without a span shine at a constant `l_min`.
    pub fn luminosity(&self, age_gyr: f64) -> f64 {
        match (self.l_max, self.m_span) {
            (Some(l_max), Some(m_span)) => self.l_min + (age_gyr / m_span) * (l_max - self.l_min),
            _ => self.l_min,
        }
    }
}

pub static STELLAR_EVOLUTION: &[StellarEvolution] = &[
    StellarEvolution::dwarf(0.10, "M7", 3100.0, 0.0012),
    StellarEvolution::dwarf(0.15, "M6", 3200.0, 0.0036),
    StellarEvolution::dwarf(0.20, "M5", 3200.0, 0.0079),
    StellarEvolution::dwarf(0.25, "M4", 3300.0, 0.015),
    StellarEvolution::dwarf(0.30, "M4", 3300.0, 0.024),
    StellarEvolution::dwarf(0.35, "M3", 3400.0, 0.037),
    StellarEvolution::dwarf(0.40, "M2", 3500.0, 0.054),
    StellarEvolution::main_sequence(0.45, "M1", 3600.0, 0.07, 0.08, 70.0),
    StellarEvolution::main_sequence(0.50, "M0", 3800.0, 0.09, 0.11, 59.0),
    StellarEvolution::main_sequence(0.55, "K8", 4000.0, 0.11, 0.15, 50.0),
    StellarEvolution::main_sequence(0.60, "K6", 4200.0, 0.13, 0.20, 42.0),
    StellarEvolution::main_sequence(0.65, "K5", 4400.0, 0.15, 0.25, 37.0),
    StellarEvolution::main_sequence(0.70, "K4", 4600.0, 0.19, 0.35, 30.0),
    StellarEvolution::main_sequence(0.75, "K2", 4900.0, 0.23, 0.48, 24.0),
    StellarEvolution::main_sequence(0.80, "K0", 5200.0, 0.19, 0.65, 20.0),
    StellarEvolution::main_sequence(0.85, "G8", 5400.0, 0.23, 0.84, 17.0),
    StellarEvolution::main_sequence(0.90, "G6", 5500.0, 0.23, 1.0, 14.0),
    StellarEvolution::evolving(0.95, "G4", 5700.0, 0.56, 1.3, 12.0, 12.0, 1.1),
    StellarEvolution::evolving(1.00, "G2", 5800.0, 0.68, 1.6, 10.0, 10.0, 1.2),
    StellarEvolution::evolving(1.05, "G1", 5900.0, 0.87, 1.9, 8.8, 1.4, 0.8),
    StellarEvolution::evolving(1.10, "G0", 6000.0, 1.1, 2.2, 7.7, 1.2, 0.7),
    StellarEvolution::evolving(1.15, "F9", 6100.0, 1.3, 2.7, 6.7, 1.1, 0.6),
    StellarEvolution::evolving(1.20, "F8", 6300.0, 1.7, 3.0, 5.9, 0.9, 0.6),
    StellarEvolution::evolving(1.25, "F7", 6400.0, 2.1, 3.5, 5.2, 0.8, 0.5),
    StellarEvolution::evolving(1.30, "F6", 6500.0, 2.5, 3.9, 4.6, 0.7, 0.4),
    StellarEvolution::evolving(1.35, "F5", 6600.0, 3.1, 4.5, 4.1, 0.6, 0.4),
    StellarEvolution::evolving(1.40, "F4", 6700.0, 3.7, 5.1, 3.7, 0.6, 0.4),
    StellarEvolution::evolving(1.45, "F3", 6800.0, 4.3, 5.7, 3.3, 0.5, 0.3),
    StellarEvolution::evolving(1.50, "F2", 7000.0, 5.1, 6.5, 2.8, 0.4, 0.3),
    StellarEvolution::evolving(1.60, "F0", 7300.0, 6.7, 8.2, 2.5, 0.4, 0.2),
    StellarEvolution::evolving(1.70, "A9", 7500.0, 8.6, 10.0, 2.1, 0.3, 0.2),
    StellarEvolution::evolving(1.80, "A7", 7800.0, 11.0, 13.0, 1.8, 0.3, 0.2),
    StellarEvolution::evolving(1.90, "A6", 8000.0, 13.0, 16.0, 1.5, 0.3, 0.2),
    StellarEvolution::evolving(2.00, "A5", 8200.0, 16.0, 20.0, 1.3, 0.2, 0.1),
];

/// Evolution row for a mass produced by [`stellar_mass`]
///
/// Masses are matched exactly; both tables are written with the same literals.
#[allow(clippy::float_cmp)]
pub fn stellar_evolution(mass: f64) -> Result<&'static StellarEvolution, TableError> {
    STELLAR_EVOLUTION
        .iter()
        .find(|row| row.mass == mass)
        .ok_or_else(|| TableError::MissingKey {
            table: "stellar evolution",
            key: format!("mass {}", mass),
        })
}
