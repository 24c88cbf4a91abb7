//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (key names to logical actions, sampled once per tick)

pub mod input;

pub use input::{Action, KeyboardState};
