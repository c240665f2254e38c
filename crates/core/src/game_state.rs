//! Game state module - manages the complete game state
//!
//! This module ties together board, catalog, piece source, progression and
//! clock. It owns the falling piece and implements movement, rotation with
//! horizontal kicks, gravity, locking and the silent restart on game over.
//!
//! Lifecycle of a piece: spawned at the top centre, falls (accepting moves and
//! rotations), locks when a drop would collide. Locking freezes it into the
//! board, sweeps full rows, updates progression and spawns the next piece. If
//! that spawn collides immediately the board and progression are wiped and
//! play simply continues.

use crate::board::Board;
use crate::clock::GameClock;
use crate::pieces::{create_piece, kick_offsets, Shape};
use crate::rng::{PieceSource, UniformSource};
use crate::scoring::{Progression, Rules};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, LockEvent, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Board column of the shape's left edge
    pub x: i32,
    /// Board row of the shape's top edge
    pub y: i32,
}

impl Piece {
    /// Fresh piece of `kind`, horizontally centred on a board `board_width` wide
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = create_piece(kind);
        let x = (board_width / 2) as i32 - (shape.size() / 2) as i32;
        Self { kind, shape, x, y: 0 }
    }

    /// Check if the piece overlaps walls, floor or locked blocks
    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Absolute board coordinates and values of the piece's blocks
    pub fn blocks(&self) -> impl Iterator<Item = (i32, i32, u8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy, v)| (self.x + dx, self.y + dy, v))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformSource> {
    board: Board,
    active: Option<Piece>,
    next: Option<PieceKind>,
    source: S,
    rules: Rules,
    progression: Progression,
    clock: GameClock,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    started: bool,
    /// Number of silent restarts caused by a blocked spawn.
    games_over: u32,
}

impl GameState<UniformSource> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self::with_source(UniformSource::new(seed), rules)
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game that draws its pieces from `source`
    pub fn with_source(source: S, rules: Rules) -> Self {
        Self {
            board: Board::default(),
            active: None,
            next: None,
            source,
            rules,
            progression: Progression::new(&rules),
            clock: GameClock::new(),
            last_event: None,
            started: false,
            games_over: 0,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.clock.rebaseline();
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.clock.paused()
    }

    pub fn score(&self) -> u32 {
        self.progression.score()
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    /// Lines cleared since the last level up
    pub fn lines(&self) -> u32 {
        self.progression.lines()
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        self.progression.interval_ms()
    }

    pub fn games_over(&self) -> u32 {
        self.games_over
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Kind of the queued piece
    pub fn next_piece(&self) -> Option<PieceKind> {
        self.next
    }

    /// Fresh matrix of the queued piece, for previews
    pub fn next_shape(&self) -> Option<Shape> {
        self.next.map(create_piece)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.next;
        out.paused = self.paused();
        out.started = self.started;
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.drop_interval_ms = self.drop_interval_ms();
        out.games_over = self.games_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Promote the queued piece (drawing two on the first call) and place it
    /// at the top centre.
    ///
    /// Returns false when the new piece collides straight away: the board and
    /// progression are then reset and the new piece stays in play.
    pub fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.source.next_kind(),
        };
        self.next = Some(self.source.next_kind());

        let piece = Piece::spawn(kind, self.board.width());
        let blocked = piece.collides(&self.board);
        self.active = Some(piece);

        if blocked {
            self.board.clear();
            self.progression.reset(&self.rules);
            self.games_over = self.games_over.wrapping_add(1);
            return false;
        }

        true
    }

    /// Shift the active piece `dx` columns; reverted when blocked
    pub fn try_move(&mut self, dx: i32) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if self.board.collides(&piece.shape, piece.x + dx, piece.y) {
            return false;
        }
        piece.x += dx;
        true
    }

    /// Rotate the active piece, kicking it sideways if needed.
    ///
    /// When no kick offset frees the piece, both the rotation and the column
    /// are rolled back and false is returned.
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        let origin_x = piece.x;
        piece.shape.rotate(clockwise);

        if !self.board.collides(&piece.shape, origin_x, piece.y) {
            return true;
        }

        for offset in kick_offsets(piece.shape.size()) {
            if !self.board.collides(&piece.shape, origin_x + offset, piece.y) {
                piece.x = origin_x + offset;
                return true;
            }
        }

        piece.shape.rotate(!clockwise);
        piece.x = origin_x;
        false
    }

    /// Move the active piece one row down, locking it if it cannot move.
    ///
    /// Always restarts the gravity timer. Returns true when the piece locked.
    pub fn drop_piece(&mut self) -> bool {
        self.clock.reset_accumulator();

        let Some(piece) = self.active.as_mut() else {
            return false;
        };

        if !self.board.collides(&piece.shape, piece.x, piece.y + 1) {
            piece.y += 1;
            return false;
        }

        self.lock_piece();
        true
    }

    /// Freeze the active piece, sweep rows, score and spawn the next piece
    pub fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.freeze(&piece.shape, piece.x, piece.y);
        let rows = self.board.sweep();
        let outcome = self.progression.record_sweep(rows, &self.rules);
        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            lines_cleared: rows as u32,
            points: outcome.points,
            level_up: outcome.level_up,
            game_over: !spawned,
            score: self.score(),
            level: self.level(),
        });
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the clock to `now_ms`; drops the piece once the accumulated
    /// time exceeds the drop interval.
    ///
    /// No-op while paused or before the game started. Returns true when a
    /// drop happened.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.started || self.paused() {
            return false;
        }

        self.clock.advance(now_ms);

        if self.active.is_none() {
            return false;
        }

        if self.clock.is_due(self.progression.interval_ms()) {
            self.drop_piece();
            return true;
        }

        false
    }

    /// Pause or resume.
    ///
    /// Resuming discards the time spent paused and spawns a piece if none is
    /// in play.
    pub fn set_paused(&mut self, paused: bool) {
        if paused {
            self.clock.pause();
            return;
        }

        self.clock.resume();
        self.started = true;
        if self.active.is_none() {
            self.spawn_piece();
        }
    }

    /// Apply a game action
    ///
    /// Gameplay actions are ignored while paused.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                self.set_paused(!self.paused());
                true
            }
            _ if self.paused() => false,
            GameAction::MoveLeft => self.try_move(-1),
            GameAction::MoveRight => self.try_move(1),
            GameAction::SoftDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.drop_piece();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
