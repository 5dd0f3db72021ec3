//! Terminal input module.
//!
//! This module is intentionally independent of the rendering stack. It maps
//! `crossterm` key events into [`crate::types::GameAction`] so the shell can
//! stay a thin loop around blocking event reads. 2048 is turn-based, so there
//! is no repeat-rate state to track; one key event maps to at most one action.

pub mod map;

pub use twenty48_types as types;

pub use map::{handle_key_event, should_quit};
