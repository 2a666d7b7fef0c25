//! Game session: screens, keypad, sound toggle, reward banner, and saving
//! the counters whenever they change.

use super::input::AnswerInput;
use crate::constants::REWARD_BANNER_TICKS;
use crate::progression::{GameEvent, ProgressionEngine, SubmitOutcome};
use crate::save_manager::{load_progress, save_progress, CounterKey, CounterStore};
use rand::Rng;
use tracing::{debug, warn};

/// Which screen the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    Playing,
    Paused,
}

/// One player's game, wired to a counter store.
#[derive(Debug)]
pub struct DragonGame<S: CounterStore> {
    engine: ProgressionEngine,
    input: AnswerInput,
    screen: Screen,
    sound_enabled: bool,
    reward_banner_ticks: u32,
    events: Vec<GameEvent>,
    store: S,
}

impl<S: CounterStore> DragonGame<S> {
    /// Creates a session with level and coins restored from the store.
    pub fn new(store: S) -> Self {
        let progress = load_progress(&store);
        debug!(
            level = progress.level.number(),
            coins = progress.coins,
            "restored progress"
        );
        Self {
            engine: ProgressionEngine::new(progress),
            input: AnswerInput::new(),
            screen: Screen::Title,
            sound_enabled: false,
            reward_banner_ticks: 0,
            events: Vec::new(),
            store,
        }
    }

    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    pub fn input(&self) -> &AnswerInput {
        &self.input
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn is_reward_banner_visible(&self) -> bool {
        self.reward_banner_ticks > 0
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Leaves the title screen. Starting turns sound on.
    pub fn start<R: Rng>(&mut self, rng: &mut R) {
        self.sound_enabled = true;
        self.screen = Screen::Playing;
        self.events.push(GameEvent::ButtonPress);

        // Feedback cancelled on the way out leaves an answered problem behind
        if self.engine.is_problem_answered() {
            self.input.clear();
            self.engine.finish_feedback(rng);
        }
        self.engine.ensure_problem(rng);
    }

    pub fn pause(&mut self) {
        if self.screen == Screen::Playing {
            self.screen = Screen::Paused;
            self.events.push(GameEvent::ButtonPress);
        }
    }

    pub fn resume(&mut self) {
        if self.screen == Screen::Paused {
            self.screen = Screen::Playing;
            self.events.push(GameEvent::ButtonPress);
        }
    }

    /// Back to the title screen, dropping any pending feedback timeout.
    pub fn quit_to_title(&mut self) {
        if self.screen == Screen::Title {
            return;
        }
        self.engine.cancel_feedback();
        self.input.clear();
        self.reward_banner_ticks = 0;
        self.screen = Screen::Title;
        self.events.push(GameEvent::ButtonPress);
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
    }

    /// Keypad digit. Ignored outside the playing screen.
    pub fn press_digit(&mut self, digit: u8) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        self.events.push(GameEvent::ButtonPress);
        self.input.push_digit(digit)
    }

    /// Keypad delete. Ignored outside the playing screen.
    pub fn press_delete(&mut self) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        self.events.push(GameEvent::ButtonPress);
        self.input.delete()
    }

    /// Submits the typed answer. Rejected submissions change nothing and
    /// return `None`.
    pub fn press_check(&mut self) -> Option<SubmitOutcome> {
        if self.screen != Screen::Playing {
            return None;
        }
        let outcome = match self.engine.submit(self.input.as_str()) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!(%err, "submission ignored");
                return None;
            }
        };

        if outcome.special_reward {
            self.reward_banner_ticks = REWARD_BANNER_TICKS;
        }
        if outcome.level_changed() {
            self.persist(CounterKey::Level);
        }
        if outcome.coins_changed() {
            self.persist(CounterKey::Coins);
        }
        self.events.extend(outcome.events.iter().copied());
        Some(outcome)
    }

    /// Advances timers by one tick. Timers are frozen unless playing.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if self.screen != Screen::Playing {
            return;
        }
        self.reward_banner_ticks = self.reward_banner_ticks.saturating_sub(1);
        if self.engine.tick(rng) {
            self.input.clear();
        }
    }

    /// Takes the events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Starts over from level 1 with no coins.
    pub fn reset_progress<R: Rng>(&mut self, rng: &mut R) {
        self.engine.reset();
        self.input.clear();
        self.reward_banner_ticks = 0;
        if let Err(err) = save_progress(&mut self.store, self.engine.progress()) {
            warn!(%err, "failed to save reset progress");
        }
        if self.screen != Screen::Title {
            self.engine.ensure_problem(rng);
        }
    }

    fn persist(&mut self, key: CounterKey) {
        let progress = self.engine.progress();
        let value = match key {
            CounterKey::Level => u64::from(progress.level.number()),
            CounterKey::Coins => progress.coins,
        };
        if let Err(err) = self.store.write(key, value) {
            warn!(%err, counter = key.as_str(), "failed to save counter");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FEEDBACK_TICKS;
    use crate::save_manager::MemoryStore;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn type_answer(game: &mut DragonGame<MemoryStore>, answer: u32) {
        for digit in answer.to_string().bytes() {
            game.press_digit(digit - b'0');
        }
    }

    #[test]
    fn test_new_game_starts_on_title_without_problem() {
        let game = DragonGame::new(MemoryStore::new());
        assert_eq!(game.screen(), Screen::Title);
        assert!(!game.sound_enabled());
        assert!(game.engine().problem().is_none());
    }

    #[test]
    fn test_start_enables_sound_and_creates_problem() {
        let mut rng = create_test_rng();
        let mut game = DragonGame::new(MemoryStore::new());
        game.start(&mut rng);

        assert_eq!(game.screen(), Screen::Playing);
        assert!(game.sound_enabled());
        assert!(game.engine().problem().is_some());
        assert_eq!(game.drain_events(), vec![GameEvent::ButtonPress]);
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_keypad_ignored_on_title() {
        let mut game = DragonGame::new(MemoryStore::new());
        assert!(!game.press_digit(3));
        assert!(!game.press_delete());
        assert!(game.press_check().is_none());
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_correct_answer_persists_coins() {
        let mut rng = create_test_rng();
        let mut game = DragonGame::new(MemoryStore::new());
        game.start(&mut rng);

        let answer = game.engine().problem().unwrap().answer;
        type_answer(&mut game, answer);
        let outcome = game.press_check().expect("answer should be accepted");

        assert!(outcome.correct);
        assert_eq!(game.store().read(CounterKey::Coins), Some(1));
        assert_eq!(game.store().read(CounterKey::Level), None);
    }

    #[test]
    fn test_feedback_expiry_clears_input() {
        let mut rng = create_test_rng();
        let mut game = DragonGame::new(MemoryStore::new());
        game.start(&mut rng);

        type_answer(&mut game, 0);
        game.press_check().expect("answer should be accepted");
        assert_eq!(game.input().as_str(), "0");

        for _ in 0..FEEDBACK_TICKS {
            game.tick(&mut rng);
        }
        assert!(game.input().is_empty());
        assert!(!game.engine().is_showing_feedback());
    }

    #[test]
    fn test_pause_freezes_feedback() {
        let mut rng = create_test_rng();
        let mut game = DragonGame::new(MemoryStore::new());
        game.start(&mut rng);
        type_answer(&mut game, 0);
        game.press_check();

        game.pause();
        for _ in 0..FEEDBACK_TICKS * 2 {
            game.tick(&mut rng);
        }
        assert!(game.engine().is_showing_feedback());

        game.resume();
        for _ in 0..FEEDBACK_TICKS {
            game.tick(&mut rng);
        }
        assert!(!game.engine().is_showing_feedback());
    }

    #[test]
    fn test_quit_then_start_moves_to_fresh_problem() {
        let mut rng = create_test_rng();
        let mut game = DragonGame::new(MemoryStore::new());
        game.start(&mut rng);
        type_answer(&mut game, 0);
        game.press_check();

        game.quit_to_title();
        assert!(!game.engine().is_showing_feedback());
        assert!(game.engine().is_problem_answered());

        game.start(&mut rng);
        assert!(!game.engine().is_problem_answered());
        assert_eq!(game.engine().last_correct(), None);
        assert!(game.input().is_empty());
    }

    #[test]
    fn test_reset_progress_writes_defaults() {
        let mut store = MemoryStore::new();
        store.write(CounterKey::Level, 4).unwrap();
        store.write(CounterKey::Coins, 250).unwrap();

        let mut rng = create_test_rng();
        let mut game = DragonGame::new(store);
        assert_eq!(game.engine().progress().coins, 250);

        game.reset_progress(&mut rng);
        assert_eq!(game.store().read(CounterKey::Level), Some(1));
        assert_eq!(game.store().read(CounterKey::Coins), Some(0));
        assert!(game.engine().problem().is_none());
    }
}
