//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into discrete [`crate::types::GameAction`] commands.
//! Each key press yields at most one command; there is no auto-repeat.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_press};
