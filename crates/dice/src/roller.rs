//! Seeded dice roller

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::formula;

/// Number of dice in the ruleset's standard roll
pub const STANDARD_DICE: i32 = 3;

/// Faces on an ordinary die
pub const D6: i32 = 6;

/// A seeded source of dice rolls
///
/// Every draw advances one ChaCha stream, so a given seed together with a given
/// ordered sequence of calls always yields the same results. A roller belongs
/// to exactly one generation run; callers that want several runs create one
/// roller per run.
///
/// # Example
/// ```
/// use dice::DiceRoller;
///
/// let mut dice = DiceRoller::new(42);
/// let roll = dice.roll_3d6_with(2);
/// assert!((5..=20).contains(&roll));
/// assert_eq!(dice.last_natural(), roll - 2);
/// ```
#[derive(Debug)]
pub struct DiceRoller {
    rng: ChaChaRng,
    last_natural: i32,
}

impl DiceRoller {
    /// Create a roller whose stream is fully determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaChaRng::seed_from_u64(seed),
            last_natural: 0,
        }
    }

    /// Roll a single die with `sides` faces
    ///
    /// Dice with fewer than one face contribute 0. Single-die rolls do not
    /// touch [`last_natural`](Self::last_natural).
    pub fn roll_die(&mut self, sides: i32) -> i32 {
        if sides < 1 {
            return 0;
        }
        self.rng.random_range(1..=sides)
    }

    /// Sum `count` independent rolls of a die with `sides` faces
    pub fn roll(&mut self, count: i32, sides: i32) -> i32 {
        let total = (0..count.max(0))
            .map(|_| self.roll_die(sides))
            .fold(0, i32::saturating_add);
        self.last_natural = total;
        total
    }

    /// Sum `count` dice and add a fixed `modifier`
    ///
    /// The natural value recorded is the sum before the modifier is applied.
    pub fn roll_with(&mut self, count: i32, sides: i32, modifier: i32) -> i32 {
        self.roll(count, sides).saturating_add(modifier)
    }

    /// The ruleset's standard 3d6 roll (3..=18)
    pub fn roll_3d6(&mut self) -> i32 {
        self.roll(STANDARD_DICE, D6)
    }

    /// A standard 3d6 roll plus `modifier`
    pub fn roll_3d6_with(&mut self, modifier: i32) -> i32 {
        self.roll_with(STANDARD_DICE, D6, modifier)
    }

    /// Unmodified result of the most recent multi-dice roll
    ///
    /// Used to detect "natural" high rolls regardless of any modifier applied.
    pub fn last_natural(&self) -> i32 {
        self.last_natural
    }

    /// Evaluate a dice-notation formula such as `"2d6+3"`
    ///
    /// See [`formula::evaluate`] for the grammar.
    pub fn roll_formula(&mut self, formula: &str) -> i32 {
        formula::evaluate(self, formula)
    }
}
