//! Progression engine: answer checking, rewards, level changes, and the
//! feedback timeout that moves on to the next problem.

use super::error::SubmitError;
use super::types::{Feedback, GameEvent, Mood, PlayerProgress, SubmitOutcome};
use crate::constants::{
    BASE_REWARD, COMBO_BONUS, COMBO_BONUS_THRESHOLD, FEEDBACK_TICKS, LEVEL_UP_STREAK,
    SPECIAL_REWARD_BONUS, SPECIAL_REWARD_THRESHOLD,
};
use crate::problems::{generate_problem, Level, Problem};
use rand::Rng;
use tracing::info;

/// Parses a submitted answer. Surrounding whitespace is ignored; anything
/// else that is not a whole number is rejected.
pub fn parse_answer(raw: &str) -> Result<i64, SubmitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::EmptyInput);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| SubmitError::NotANumber(trimmed.to_string()))
}

/// Coins for a correct answer given the combo including that answer.
/// Returns the reward and whether the special reward was reached.
pub fn reward_for_combo(combo: u32) -> (u32, bool) {
    let mut reward = BASE_REWARD;
    if combo >= COMBO_BONUS_THRESHOLD {
        reward += COMBO_BONUS;
    }
    let special = combo >= SPECIAL_REWARD_THRESHOLD;
    if special {
        reward += SPECIAL_REWARD_BONUS;
    }
    (reward, special)
}

/// Owns the player's progress and the active problem.
#[derive(Debug, Clone, Default)]
pub struct ProgressionEngine {
    progress: PlayerProgress,
    problem: Option<Problem>,
    last_correct: Option<bool>,
    mood: Mood,
    feedback: Option<Feedback>,
}

impl ProgressionEngine {
    pub fn new(progress: PlayerProgress) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }

    pub fn progress(&self) -> &PlayerProgress {
        &self.progress
    }

    pub fn level(&self) -> Level {
        self.progress.level
    }

    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Correctness of the last submission, cleared when feedback expires.
    pub fn last_correct(&self) -> Option<bool> {
        self.last_correct
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn is_showing_feedback(&self) -> bool {
        self.feedback.is_some()
    }

    /// True when the current problem was already answered but the feedback
    /// timeout was cancelled before moving on.
    pub fn is_problem_answered(&self) -> bool {
        self.last_correct.is_some() && self.feedback.is_none()
    }

    /// Replaces the active problem.
    pub fn present_problem(&mut self, problem: Problem) {
        self.problem = Some(problem);
    }

    /// Generates a problem for the current level if none is active.
    pub fn ensure_problem<R: Rng>(&mut self, rng: &mut R) -> &Problem {
        let level = self.progress.level;
        self.problem.get_or_insert_with(|| generate_problem(level, rng))
    }

    /// Checks an answer against the active problem and applies the result.
    ///
    /// Rejected submissions leave every field untouched.
    pub fn submit(&mut self, raw: &str) -> Result<SubmitOutcome, SubmitError> {
        if self.feedback.is_some() {
            return Err(SubmitError::FeedbackPending);
        }
        let problem = self.problem.as_ref().ok_or(SubmitError::NoActiveProblem)?;
        let candidate = parse_answer(raw)?;
        let correct = problem.is_correct(candidate);

        let mut outcome = SubmitOutcome {
            correct,
            previous_level: self.progress.level,
            ..SubmitOutcome::default()
        };

        if correct {
            self.apply_correct(&mut outcome);
        } else {
            self.apply_incorrect(&mut outcome);
        }

        outcome.level = self.progress.level;
        self.last_correct = Some(correct);
        self.feedback = Some(Feedback {
            correct,
            ticks_remaining: FEEDBACK_TICKS,
        });

        Ok(outcome)
    }

    fn apply_correct(&mut self, outcome: &mut SubmitOutcome) {
        outcome.events.push(GameEvent::AnswerCorrect);

        let progress = &mut self.progress;
        progress.combo = progress.combo.saturating_add(1);

        let (reward, special) = reward_for_combo(progress.combo);
        outcome.reward = reward;
        outcome.special_reward = special;
        self.mood = if special {
            info!(combo = progress.combo, "special reward earned");
            outcome.events.push(GameEvent::SpecialReward);
            Mood::SuperHappy
        } else {
            Mood::Happy
        };

        progress.coins = progress.coins.saturating_add(u64::from(reward));
        progress.streak = progress.streak.saturating_add(1);

        if progress.streak >= LEVEL_UP_STREAK {
            progress.level = progress.level.next();
            progress.streak = 0;
            outcome.leveled_up = true;
            outcome.events.push(GameEvent::LevelUp);
            info!(level = progress.level.number(), "level up");
        }
    }

    fn apply_incorrect(&mut self, outcome: &mut SubmitOutcome) {
        outcome.events.push(GameEvent::AnswerIncorrect);
        self.mood = Mood::Sad;

        let progress = &mut self.progress;
        // TODO: confirm with product whether a miss right after a level-up should demote
        if progress.level > Level::Hatchling && progress.streak == 0 {
            progress.level = progress.level.previous();
            outcome.demoted = true;
            info!(level = progress.level.number(), "level down");
        }
        progress.streak = 0;
        progress.combo = 0;
    }

    /// Advances the feedback timeout by one tick. Returns true when it
    /// expired and the next problem was generated.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> bool {
        let Some(feedback) = self.feedback.as_mut() else {
            return false;
        };
        feedback.ticks_remaining = feedback.ticks_remaining.saturating_sub(1);
        if feedback.ticks_remaining > 0 {
            return false;
        }
        self.finish_feedback(rng);
        true
    }

    /// Clears feedback now: mood back to hungry, correctness cleared, and a
    /// fresh problem for the current level.
    pub fn finish_feedback<R: Rng>(&mut self, rng: &mut R) {
        self.feedback = None;
        self.mood = Mood::Hungry;
        self.last_correct = None;
        self.problem = Some(generate_problem(self.progress.level, rng));
    }

    /// Drops the pending feedback timeout without touching anything else.
    pub fn cancel_feedback(&mut self) -> Option<Feedback> {
        self.feedback.take()
    }

    /// Back to level 1 with no coins and no active problem.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
