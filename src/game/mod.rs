//! Game session around the progression engine.

pub mod input;
pub mod session;

pub use input::*;
pub use session::*;
