//! Star system output model
//!
//! A [`StarSystem`] is the value produced by one generation run: its stars,
//! the worlds orbiting the primary, and their moons. Every type here is plain
//! data, built once by the generator and never mutated afterwards.

pub mod moon;
pub mod star;
pub mod system;
pub mod world;

pub use moon::Moon;
pub use star::{Companion, ForbiddenZone, Star};
pub use system::StarSystem;
pub use world::{GasGiant, Planet, World, WorldBody};

#[cfg(test)]
mod moon_test;
