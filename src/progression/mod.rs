//! Player progression: answer checking, rewards, streaks, and levels.

pub mod error;
pub mod logic;
pub mod types;

pub use error::*;
pub use logic::*;
pub use types::*;
