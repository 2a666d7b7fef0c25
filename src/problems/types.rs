//! Problem data structures: operators, difficulty levels, and problems.

use crate::constants::{MAX_LEVEL, MIN_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic operator of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Applies the operator to two operands.
    ///
    /// Returns `None` when the result would be negative, overflow, or leave a
    /// remainder, none of which a valid problem may produce.
    pub fn apply(&self, first: u32, second: u32) -> Option<u32> {
        match self {
            Self::Add => first.checked_add(second),
            Self::Subtract => first.checked_sub(second),
            Self::Multiply => first.checked_mul(second),
            Self::Divide => {
                if second == 0 || first % second != 0 {
                    None
                } else {
                    Some(first / second)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Difficulty level. Each tier unlocks one more operator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    Hatchling,
    Fledgling,
    Drake,
    Elder,
}

/// Operators available at each level, indexed by `Level as usize`.
const OPERATORS_BY_LEVEL: [&[Operator]; 4] = [
    &[Operator::Add],
    &[Operator::Add, Operator::Subtract],
    &[Operator::Add, Operator::Subtract, Operator::Multiply],
    &[
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ],
];

impl Level {
    pub const ALL: [Level; 4] = [Level::Hatchling, Level::Fledgling, Level::Drake, Level::Elder];

    /// Maps a level number (1-4) to a level. Anything else falls back to level 1.
    pub fn from_number(number: u32) -> Self {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&number) {
            return Level::Hatchling;
        }
        Self::ALL[(number - MIN_LEVEL) as usize]
    }

    pub fn number(&self) -> u32 {
        *self as u32 + MIN_LEVEL
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Hatchling => "Hatchling",
            Self::Fledgling => "Fledgling",
            Self::Drake => "Drake",
            Self::Elder => "Elder",
        }
    }

    /// The next level up, capped at the highest level.
    pub fn next(&self) -> Self {
        Self::from_number((self.number() + 1).min(MAX_LEVEL))
    }

    /// The next level down, floored at level 1.
    pub fn previous(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1).max(MIN_LEVEL))
    }

    pub fn is_max(&self) -> bool {
        self.number() == MAX_LEVEL
    }

    pub fn operators(&self) -> &'static [Operator] {
        OPERATORS_BY_LEVEL[*self as usize]
    }
}

/// A generated arithmetic problem. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub first: u32,
    pub second: u32,
    pub operator: Operator,
    pub answer: u32,
    pub explanation: String,
}

impl Problem {
    /// True when applying the operator to the operands yields the stored answer.
    pub fn is_consistent(&self) -> bool {
        self.operator.apply(self.first, self.second) == Some(self.answer)
    }

    /// Checks a parsed answer against the correct one.
    pub fn is_correct(&self, candidate: i64) -> bool {
        candidate == i64::from(self.answer)
    }

    /// Question text as shown to the player, e.g. `7 × 8 = ?`.
    pub fn question(&self) -> String {
        format!("{} {} {} = ?", self.first, self.operator, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_number_round_trips_valid_levels() {
        for level in Level::ALL {
            assert_eq!(Level::from_number(level.number()), level);
        }
    }

    #[test]
    fn test_level_from_number_falls_back_to_first() {
        assert_eq!(Level::from_number(0), Level::Hatchling);
        assert_eq!(Level::from_number(5), Level::Hatchling);
        assert_eq!(Level::from_number(u32::MAX), Level::Hatchling);
    }

    #[test]
    fn test_level_next_caps_at_max() {
        assert_eq!(Level::Hatchling.next(), Level::Fledgling);
        assert_eq!(Level::Drake.next(), Level::Elder);
        assert_eq!(Level::Elder.next(), Level::Elder);
    }

    #[test]
    fn test_level_previous_floors_at_first() {
        assert_eq!(Level::Elder.previous(), Level::Drake);
        assert_eq!(Level::Fledgling.previous(), Level::Hatchling);
        assert_eq!(Level::Hatchling.previous(), Level::Hatchling);
    }

    #[test]
    fn test_operators_unlock_one_per_level() {
        assert_eq!(Level::Hatchling.operators(), &[Operator::Add]);
        assert_eq!(
            Level::Fledgling.operators(),
            &[Operator::Add, Operator::Subtract]
        );
        assert_eq!(Level::Drake.operators().len(), 3);
        assert_eq!(Level::Elder.operators(), &Operator::ALL);
    }

    #[test]
    fn test_operator_apply_rejects_invalid_results() {
        assert_eq!(Operator::Subtract.apply(3, 5), None);
        assert_eq!(Operator::Divide.apply(7, 2), None);
        assert_eq!(Operator::Divide.apply(7, 0), None);
        assert_eq!(Operator::Divide.apply(42, 6), Some(7));
        assert_eq!(Operator::Multiply.apply(12, 12), Some(144));
    }

    #[test]
    fn test_problem_question_format() {
        let problem = Problem {
            first: 56,
            second: 8,
            operator: Operator::Divide,
            answer: 7,
            explanation: "Divide 56 by 8".to_string(),
        };
        assert_eq!(problem.question(), "56 ÷ 8 = ?");
        assert!(problem.is_consistent());
        assert!(problem.is_correct(7));
        assert!(!problem.is_correct(-7));
    }
}
