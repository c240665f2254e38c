//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Terminals
//! deliver auto-repeat as repeated presses, so holding a key keeps moving the
//! piece without any extra repeat logic.

pub mod map;

pub use falling_blocks_types as types;

pub use map::{handle_key_event, should_quit};
