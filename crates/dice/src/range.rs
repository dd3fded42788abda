//! Inclusive roll ranges and first-match range tables

use serde::{Deserialize, Serialize};

/// An inclusive range of roll results
///
/// Open-ended rows (for modified rolls that fall outside 3..=18) use
/// [`RollRange::at_most`] and [`RollRange::at_least`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RollRange {
    pub min: i32,
    pub max: i32,
}

impl RollRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// A range matching exactly one roll
    pub const fn exactly(roll: i32) -> Self {
        Self::new(roll, roll)
    }

    /// Every roll up to and including `max`
    pub const fn at_most(max: i32) -> Self {
        Self::new(i32::MIN, max)
    }

    /// Every roll from `min` upwards
    pub const fn at_least(min: i32) -> Self {
        Self::new(min, i32::MAX)
    }

    pub const fn contains(&self, roll: i32) -> bool {
        roll >= self.min && roll <= self.max
    }

    pub const fn overlaps(&self, other: &RollRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl std::fmt::Display for RollRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (i32::MIN, max) => write!(f, "..={}", max),
            (min, i32::MAX) => write!(f, "{}..", min),
            (min, max) if min == max => write!(f, "{}", min),
            (min, max) => write!(f, "{}..={}", min, max),
        }
    }
}

/// An ordered list of roll ranges mapped to values
///
/// Lookups scan the rows in order and return the first row containing the
/// roll. Tables are static ruleset data, so rows are borrowed for `'static`.
#[derive(Debug)]
pub struct RangeTable<T: 'static> {
    rows: &'static [(RollRange, T)],
}

impl<T> RangeTable<T> {
    pub const fn new(rows: &'static [(RollRange, T)]) -> Self {
        Self { rows }
    }

    /// Value of the first row whose range contains `roll`
    pub fn lookup(&self, roll: i32) -> Option<&'static T> {
        let rows: &'static [(RollRange, T)] = self.rows;
        rows.iter()
            .find(|(range, _)| range.contains(roll))
            .map(|(_, value)| value)
    }

    pub fn rows(&self) -> &'static [(RollRange, T)] {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether no two rows share a roll
    pub fn is_disjoint(&self) -> bool {
        self.rows.iter().enumerate().all(|(i, (a, _))| {
            self.rows[i + 1..]
                .iter()
                .all(|(b, _)| !a.overlaps(b))
        })
    }

    /// Whether every roll in `min..=max` matches some row
    pub fn covers(&self, min: i32, max: i32) -> bool {
        (min..=max).all(|roll| self.lookup(roll).is_some())
    }
}
