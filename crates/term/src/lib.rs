//! Terminal rendering for the falling-blocks game.
//!
//! Snapshots are drawn into a plain framebuffer, which the renderer then
//! flushes to the terminal as a diff against the previous frame. Board cells
//! are drawn two columns wide to roughly match glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falling_blocks_core as core;
pub use falling_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
