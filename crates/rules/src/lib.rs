//! Star-system generation ruleset tables
//!
//! Every outcome of the ruleset is either an ordered roll-range table scanned
//! first-match-wins, or a table keyed by an enum (or a tuple of enums). Lookups
//! return [`TableError`] when nothing matches: an incomplete table is a
//! configuration error, never a silently defaulted value.

pub mod error;
pub mod gas_giant;
pub mod moons;
pub mod orbits;
pub mod resources;
pub mod rotation;
pub mod stellar;
pub mod surface;
pub mod table;
pub mod world;

pub use error::TableError;
pub use gas_giant::{GasGiantArrangement, GasGiantMassDensity, GasGiantSize};
pub use moons::MoonSize;
pub use orbits::{OrbitalSeparation, Separation};
pub use resources::{OverallResourceValue, ResourceValue};
pub use stellar::{Population, StellarAge, StellarEvolution};
pub use surface::{AtmosphericPressureCategory, CoreType, TemperatureStep, WorldClimate};
pub use table::{KeyedTable, RuleTable};
pub use world::{OverallType, WorldClassifier, WorldSize};

#[cfg(test)]
mod gas_giant_test;
#[cfg(test)]
mod rotation_test;
#[cfg(test)]
mod surface_test;
#[cfg(test)]
mod table_test;
#[cfg(test)]
mod world_test;
