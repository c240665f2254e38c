//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! Everything here is plain data, usable from the core engine, the terminal
//! front-end and the event log alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Cell Values
//!
//! A board cell is a `u8`: `0` is empty, `1..=7` identifies the piece kind that
//! left the block there. The value doubles as the palette index for renderers.
//!
//! | Kind | Value |
//! |------|-------|
//! | I | 1 |
//! | L | 2 |
//! | J | 3 |
//! | O | 4 |
//! | Z | 5 |
//! | S | 6 |
//! | T | 7 |
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `MIN_DROP_MS` | 100 | Gravity never gets faster than this |
//! | `LEVEL_STEP_MS` | 50 | Interval reduction per level |
//! | `LINES_PER_LEVEL` | 10 | Level up once the line counter exceeds this |
//! | `ROW_POINTS` | 10 | Points for the first row of a sweep |
//!
//! # Examples
//!
//! ```
//! use falling_blocks_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("o").unwrap();
//! assert_eq!(kind, PieceKind::O);
//! assert_eq!(kind.cell_value(), 4);
//! assert_eq!(PieceKind::from_cell(4), Some(PieceKind::O));
//!
//! assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame interval used by the terminal runner (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Gravity interval when a game starts (1000ms = 1 row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Drop interval floor
pub const MIN_DROP_MS: u32 = 100;

/// Drop interval reduction applied on every level up
pub const LEVEL_STEP_MS: u32 = 50;

/// Smallest accepted level step
pub const LEVEL_STEP_MIN_MS: u32 = 10;

/// Largest accepted level step
pub const LEVEL_STEP_MAX_MS: u32 = 50;

/// A level up happens once the cleared-line counter goes past this value
pub const LINES_PER_LEVEL: u32 = 10;

/// Points for the first row cleared in a sweep; each further row doubles
pub const ROW_POINTS: u32 = 10;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// Empty board cell
pub const EMPTY_CELL: u8 = 0;

/// The seven tetromino piece kinds
///
/// The discriminant is the cell value the piece writes into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I = 1,
    L = 2,
    J = 3,
    O = 4,
    Z = 5,
    S = 6,
    T = 7,
}

impl PieceKind {
    /// Draw order for uniform selection.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::O => "o",
            PieceKind::Z => "z",
            PieceKind::S => "s",
            PieceKind::T => "t",
        }
    }

    /// Uppercase letter, for panels and debug output
    pub fn letter(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
        }
    }

    /// Value written into the board for this kind
    pub fn cell_value(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`PieceKind::cell_value`]; `None` for empty or unknown values
    pub fn from_cell(value: u8) -> Option<Self> {
        match value {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::L),
            3 => Some(PieceKind::J),
            4 => Some(PieceKind::O),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::S),
            7 => Some(PieceKind::T),
            _ => None,
        }
    }
}

/// Commands accepted from input collaborators
///
/// Gameplay commands are ignored while the game is paused; `Pause` toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (locks it if it cannot move)
    SoftDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// Unknown commands yield `None` and are simply dropped by callers.
    ///
    /// # Examples
    ///
    /// ```
    /// use falling_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
        }
    }
}

/// Summary emitted whenever a piece locks.
///
/// Consumed by observers such as the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub level_up: bool,
    /// The following spawn collided and the board was wiped.
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
}
