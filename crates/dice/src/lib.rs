//! Dice engine for tabletop rule systems
//!
//! This crate provides a seeded dice roller, an evaluator for dice notation
//! ("2d6+3") and the ordered roll-range tables that rulesets are written in.

pub mod formula;
pub mod range;
pub mod roller;

pub use range::{RangeTable, RollRange};
pub use roller::DiceRoller;

#[cfg(test)]
mod formula_test;
#[cfg(test)]
mod range_test;
