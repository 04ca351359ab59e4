//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] values for the core.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
