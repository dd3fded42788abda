//! Dice notation evaluation
//!
//! Three precedence levels, lowest to highest:
//!
//! | Operator | Meaning                                  |
//! |----------|------------------------------------------|
//! | `+`      | sum of the terms                         |
//! | `*`      | product of the factors                   |
//! | `d`      | `NdF`: sum of N rolls of an F-faced die  |
//!
//! Chained dice associate left to right: `"2d6d8"` rolls 2d6 and then rolls
//! that many d8. The notation is permissive rather than validated, matching the
//! tabletop tools it comes from:
//!
//! - a die count that does not parse as an integer counts as 0,
//! - a die count of 0 rolls a single die (`"d6"` is `"1d6"`),
//! - a face count that does not parse means six faces,
//! - a term without `d` is a constant (`"3"` is 3).
//!
//! Sums and products saturate at the bounds of `i32`.

use crate::roller::{DiceRoller, D6};

/// Evaluate `formula` against `roller`
///
/// # Example
/// ```
/// use dice::DiceRoller;
/// use dice::formula::evaluate;
///
/// let mut dice = DiceRoller::new(7);
/// let value = evaluate(&mut dice, "1d6+3");
/// assert!((4..=9).contains(&value));
/// ```
pub fn evaluate(roller: &mut DiceRoller, formula: &str) -> i32 {
    formula
        .split('+')
        .map(|term| product(roller, term))
        .fold(0, i32::saturating_add)
}

fn product(roller: &mut DiceRoller, term: &str) -> i32 {
    term.split('*')
        .map(|factor| dice_term(roller, factor))
        .fold(1, i32::saturating_mul)
}

fn dice_term(roller: &mut DiceRoller, factor: &str) -> i32 {
    let mut operands = factor.split('d');
    let mut total = operands
        .next()
        .and_then(|count| count.trim().parse::<i32>().ok())
        .unwrap_or(0);

    for faces in operands {
        let faces = faces.trim().parse::<i32>().unwrap_or(D6);
        let count = if total == 0 { 1 } else { total };
        total = (0..count)
            .map(|_| roller.roll_die(faces))
            .fold(0, i32::saturating_add);
    }

    total
}
