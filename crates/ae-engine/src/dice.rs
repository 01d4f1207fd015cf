//! The 3d4 travel roll.
//!
//! Three four-sided dice are either rolled or entered by hand. Their sum,
//! shifted by the alarm level, picks the table row; the first die picks the
//! column.
//!
//! Sums are taken in `i64`: manual dice and modifiers are unchecked `i32`
//! values, and a huge total has to stay off the table rather than wrap.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sides on each travel die.
pub const D4_SIDES: i32 = 4;

/// How the three dice are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DiceInput {
    /// Roll three independent d4.
    #[default]
    Random,
    /// Use values rolled at the table. They are not range-checked.
    Manual(i32, i32, i32),
}

/// The three dice of a travel roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceResult {
    /// Die values in roll order.
    pub dice: [i32; 3],
}

impl DiceResult {
    /// Wrap three die values.
    pub fn new(d1: i32, d2: i32, d3: i32) -> Self {
        Self { dice: [d1, d2, d3] }
    }

    /// Sum of the three dice.
    pub fn base_sum(&self) -> i64 {
        self.dice.iter().copied().map(i64::from).sum()
    }

    /// Table row after applying the alarm level.
    pub fn final_row(&self, alarm_level: i64) -> i64 {
        self.base_sum() + alarm_level
    }

    /// Table column: the value of the first die.
    pub fn final_column(&self) -> i32 {
        self.dice[0]
    }
}

impl std::fmt::Display for DiceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.dice;
        write!(f, "[{a}, {b}, {c}] = {}", self.base_sum())
    }
}

/// Produce the dice for a roll.
pub fn roll_dice<R: Rng + ?Sized>(input: DiceInput, rng: &mut R) -> DiceResult {
    match input {
        DiceInput::Manual(a, b, c) => DiceResult::new(a, b, c),
        DiceInput::Random => DiceResult {
            dice: std::array::from_fn(|_| rng.random_range(1..=D4_SIDES)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn derived_values() {
        let dice = DiceResult::new(2, 3, 1);
        assert_eq!(dice.base_sum(), 6);
        assert_eq!(dice.final_row(1), 7);
        assert_eq!(dice.final_column(), 2);
    }

    #[test]
    fn negative_alarm_lowers_row() {
        let dice = DiceResult::new(1, 1, 1);
        assert_eq!(dice.final_row(-2), 1);
    }

    #[test]
    fn manual_values_pass_through_unchecked() {
        let mut rng = StdRng::seed_from_u64(0);
        let dice = roll_dice(DiceInput::Manual(9, 0, -3), &mut rng);
        assert_eq!(dice.dice, [9, 0, -3]);
        assert_eq!(dice.base_sum(), 6);
    }

    #[test]
    fn extreme_manual_values_do_not_overflow() {
        let mut rng = StdRng::seed_from_u64(0);
        let dice = roll_dice(DiceInput::Manual(i32::MAX, 1, 1), &mut rng);
        assert_eq!(dice.base_sum(), i64::from(i32::MAX) + 2);
        assert_eq!(dice.final_row(1), i64::from(i32::MAX) + 3);

        let dice = DiceResult::new(i32::MIN, i32::MIN, i32::MIN);
        assert_eq!(dice.final_row(-1), 3 * i64::from(i32::MIN) - 1);
    }

    #[test]
    fn random_values_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let dice = roll_dice(DiceInput::Random, &mut rng);
            for value in dice.dice {
                assert!((1..=4).contains(&value));
            }
            assert!((3..=12).contains(&dice.base_sum()));
        }
    }

    #[test]
    fn every_face_reachable() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.extend(roll_dice(DiceInput::Random, &mut rng).dice);
        }
        assert_eq!(seen.len(), 4, "missing faces: {seen:?}");
    }

    #[test]
    fn random_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(
            roll_dice(DiceInput::Random, &mut rng1),
            roll_dice(DiceInput::Random, &mut rng2)
        );
    }

    #[test]
    fn display() {
        assert_eq!(DiceResult::new(2, 3, 1).to_string(), "[2, 3, 1] = 6");
    }
}
