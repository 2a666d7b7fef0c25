//! Utility modules: persistence helpers.

pub mod persistence;

pub use persistence::*;
