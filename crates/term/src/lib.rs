//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to a terminal
//! backend as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be unit-tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
