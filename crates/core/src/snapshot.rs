//! Read-only copies of the game state for renderers and observers.

use serde::{Deserialize, Serialize};

use crate::game_state::Piece;
use crate::pieces::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for ActiveSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.clone(),
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board coordinates and values of the piece's blocks
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Locked cells, rows top to bottom
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<PieceKind>,
    pub paused: bool,
    pub started: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub games_over: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.active = None;
        self.next = None;
        self.paused = false;
        self.started = false;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.drop_interval_ms = 0;
        self.games_over = 0;
    }

    /// Cell value at (x, y) with the active piece drawn over the locked cells
    pub fn visible_cell(&self, x: i32, y: i32) -> u8 {
        if let Some(active) = &self.active {
            if let Some((_, _, v)) = active.blocks().find(|&(bx, by, _)| bx == x && by == y) {
                return v;
            }
        }
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i32 || y >= BOARD_HEIGHT as i32 {
            return EMPTY_CELL;
        }
        self.board[y as usize][x as usize]
    }

    pub fn playable(&self) -> bool {
        self.started && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            paused: false,
            started: false,
            score: 0,
            level: 0,
            lines: 0,
            drop_interval_ms: 0,
            games_over: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::rng::SequenceSource;
    use crate::scoring::Rules;

    #[test]
    fn snapshot_reflects_state() {
        let mut gs = GameState::with_source(SequenceSource::repeat(PieceKind::O), Rules::default());
        gs.start();
        gs.board_mut().set(0, 19, 2);

        let snap = gs.snapshot();
        assert_eq!(snap.board[19][0], 2);
        assert_eq!(snap.next, Some(PieceKind::O));
        assert_eq!(snap.level, 1);
        assert_eq!(snap.drop_interval_ms, 1000);
        assert!(snap.playable());

        let active = snap.active.as_ref().unwrap();
        assert_eq!((active.x, active.y), (4, 0));
        assert_eq!(snap.visible_cell(4, 0), 4);
        assert_eq!(snap.visible_cell(0, 19), 2);
        assert_eq!(snap.visible_cell(-1, 0), 0);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let mut gs = GameState::new(9);
        gs.start();
        let mut snap = GameSnapshot::default();
        gs.snapshot_into(&mut snap);
        assert!(snap.active.is_some());

        let fresh = GameState::new(9);
        fresh.snapshot_into(&mut snap);
        assert!(snap.active.is_none());
        assert!(!snap.started);
    }
}
