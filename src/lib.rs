//! Dragon Math - arithmetic practice game library
//!
//! This module exposes the game logic for testing and external use.

pub mod constants;
pub mod game;
pub mod problems;
pub mod progression;
pub mod save_manager;
pub mod utils;

pub use game::{DragonGame, Screen};
pub use problems::{generate_problem, Level, Operator, Problem};
pub use progression::{GameEvent, Mood, PlayerProgress, ProgressionEngine, SubmitError};
