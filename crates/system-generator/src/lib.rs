//! Star system generation pipeline
//!
//! Generates a complete star system from a seed and a handful of options:
//! stars first, then candidate orbits around the primary, an optional forced
//! habitable world, gas giants, the remaining planets and asteroid belts,
//! and finally moons and rotation for every world.
//!
//! # Example
//! ```
//! use system_generator::{generate_star_system, GeneratorOptions};
//!
//! let options = GeneratorOptions::with_seed(131313);
//! let first = generate_star_system(&options).unwrap();
//! let second = generate_star_system(&options).unwrap();
//! assert_eq!(first, second);
//! assert_eq!(first.seed, 131313);
//! ```

pub mod constants;
pub mod error;
pub mod generation;
pub mod options;
pub mod orbits;

mod gas_giants;
mod moons;
mod planets;
mod rotation;
mod stars;

pub use constants::PhysicalConstants;
pub use error::{FailureKind, GenerationError};
pub use generation::{generate_star_system, SystemGenerator};
pub use options::GeneratorOptions;

#[cfg(test)]
mod generation_test;
#[cfg(test)]
mod options_test;
#[cfg(test)]
mod rotation_test;
