//! Typed astronomical quantities
//!
//! Orbits are measured in AU and stellar masses in solar masses. Wrapping
//! both keeps formulas that take one of each from having their arguments
//! swapped.

pub mod length;
pub mod mass;

pub use length::{Length, KM_PER_AU};
pub use mass::{Mass, KG_PER_SOLAR_MASS};

#[cfg(test)]
mod length_test;
#[cfg(test)]
mod mass_test;
