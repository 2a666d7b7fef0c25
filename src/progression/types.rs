//! Progression data structures.

use crate::problems::Level;
use serde::{Deserialize, Serialize};

/// The dragon's mood, driven only by the most recent answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mood {
    /// Idle state while waiting for an answer
    #[default]
    Hungry,
    Happy,
    Sad,
    SuperHappy,
}

impl Mood {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hungry => "hungry",
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::SuperHappy => "super-happy",
        }
    }
}

/// Discrete events for the presentation layer (sound, animation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    AnswerCorrect,
    AnswerIncorrect,
    LevelUp,
    ButtonPress,
    SpecialReward,
}

/// The player's counters. Level and coins are persisted; streak and combo
/// only live for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerProgress {
    pub level: Level,
    pub coins: u64,
    /// Correct answers toward the next level-up
    pub streak: u32,
    /// Correct answers since the last mistake
    pub combo: u32,
}

impl PlayerProgress {
    /// Progress restored from the two persisted counters.
    pub fn restored(level: Level, coins: u64) -> Self {
        Self {
            level,
            coins,
            streak: 0,
            combo: 0,
        }
    }
}

/// Feedback being displayed after a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub ticks_remaining: u32,
}

/// What a single accepted submission did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// The answer matched
    pub correct: bool,
    /// Coins awarded for this answer
    pub reward: u32,
    /// Combo reached the special reward threshold
    pub special_reward: bool,
    /// The level-up threshold fired (even if already at max level)
    pub leveled_up: bool,
    /// Player was demoted by one level
    pub demoted: bool,
    /// Level before the submission
    pub previous_level: Level,
    /// Level after the submission
    pub level: Level,
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
}

impl SubmitOutcome {
    pub fn level_changed(&self) -> bool {
        self.level != self.previous_level
    }

    pub fn coins_changed(&self) -> bool {
        self.reward > 0
    }
}
