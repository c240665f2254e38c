//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the falling-block rules and state. It has **no I/O**: a host
//! feeds it frame timestamps and input commands and reads snapshots back.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetromino matrices and in-place rotation
//! - [`board`]: rectangular grid with collision, freeze and row sweep
//! - [`game_state`]: active/next piece, movement, kicks, locking, game over
//! - [`scoring`]: sweep points and level/speed progression
//! - [`clock`]: frame-driven gravity timer with pause
//! - [`rng`]: seedable uniform piece source
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn centred on row 0; if the spawn overlaps the stack the board,
//!   score and level are wiped and play continues with the new piece.
//! - Rotation that collides probes horizontal kicks (+1, -1, +2, ...) before
//!   giving up and rolling back.
//! - A sweep clearing `k` rows scores `10 * (2^k - 1)`.
//! - More than 10 lines since the last level up: level + 1, gravity 50ms
//!   faster, never faster than 100ms per row.
//!
//! # Example
//!
//! ```
//! use falling_blocks_core::GameState;
//! use falling_blocks_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::SoftDrop);
//!
//! // Frame timestamps drive gravity.
//! game.tick(0);
//! game.tick(16);
//!
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.level(), 1);
//! ```

pub mod board;
pub mod clock;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use falling_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::GameClock;
pub use game_state::{GameState, Piece};
pub use pieces::{create_piece, kick_offsets, Shape};
pub use rng::{PieceSource, SequenceSource, SimpleRng, UniformSource};
pub use scoring::{sweep_score, Progression, Rules, SweepOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
