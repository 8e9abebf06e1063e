//! Game session: one complete game as an explicit state value.
//!
//! The session owns the board, the falling piece, the phase, the score and
//! the gravity interval, and reacts to one discrete [`GameAction`] at a time.
//! Every transition is synchronous and atomic; there is no internal timer and
//! no concurrency. The driver schedules `Tick` actions at `speed_ms` and
//! renders the [`Session::view`] projection after each action.
//!
//! Locking uses a two-phase protocol: a blocked descent first marks the piece
//! `settled` (one tick of grace in which it can still be moved or rotated
//! away, which clears the flag), and only a second consecutive blocked
//! descent merges it into the board and spawns a replacement.

use crate::core::{blocks_at, line_clear_points, Board, PieceGen};
use crate::types::{
    Color, GameAction, GamePhase, Rotation, Shape, BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH,
    DEFAULT_SPEED_MS, SPAWN_POSITION,
};

/// The falling, player-controlled piece.
///
/// Replaced wholesale on every accepted transform, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub rotation: Rotation,
    pub color: Color,
    pub x: i8,
    pub y: i8,
    /// Set when a descent was blocked; the lock trigger on the next one.
    pub settled: bool,
}

impl ActivePiece {
    /// A fresh piece at the spawn position.
    fn spawn(shape: Shape) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            shape,
            rotation: Rotation::Up,
            color: shape.color(),
            x,
            y,
            settled: false,
        }
    }

    /// Absolute board cells this piece occupies.
    pub fn blocks(&self) -> [(i8, i8); 4] {
        blocks_at(self.shape, self.rotation, self.x, self.y)
    }
}

/// Complete game state for a single session.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Option<ActivePiece>,
    phase: GamePhase,
    score: u32,
    speed_ms: u32,
    pieces: PieceGen,
}

impl Session {
    /// Create an inactive session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            phase: GamePhase::Inactive,
            score: 0,
            speed_ms: DEFAULT_SPEED_MS,
            pieces: PieceGen::new(seed),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Gravity interval in milliseconds. The driver schedules ticks at this
    /// cadence and must re-read it after every `SetSpeed`.
    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply one inbound action.
    ///
    /// Actions invalid for the current phase are silent no-ops; the session
    /// has no error surface.
    pub fn apply(&mut self, action: GameAction) {
        match action {
            GameAction::Start => self.start(),
            GameAction::Stop => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    self.phase = GamePhase::Inactive;
                }
            }
            GameAction::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            GameAction::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            GameAction::Lose => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Lost;
                }
            }
            GameAction::SetSpeed(ms) => {
                if ms > 0 {
                    self.speed_ms = ms;
                }
            }
            GameAction::Tick | GameAction::MoveDown => {
                if self.phase == GamePhase::Active {
                    self.step_down();
                }
            }
            // Reserved: accepted, no effect.
            GameAction::MoveUp => {}
            GameAction::MoveLeft => {
                if self.phase == GamePhase::Active {
                    self.shift(-1);
                }
            }
            GameAction::MoveRight => {
                if self.phase == GamePhase::Active {
                    self.shift(1);
                }
            }
            GameAction::RotateCw => {
                if self.phase == GamePhase::Active {
                    self.rotate(true);
                }
            }
            GameAction::RotateCcw => {
                if self.phase == GamePhase::Active {
                    self.rotate(false);
                }
            }
        }
    }

    /// Start a new game: fresh board, zero score, first piece spawned.
    /// Only valid from Inactive or Lost.
    fn start(&mut self) {
        if !matches!(self.phase, GamePhase::Inactive | GamePhase::Lost) {
            return;
        }
        self.board.clear();
        self.score = 0;
        self.active = Some(self.spawn_piece());
        self.phase = GamePhase::Active;
    }

    fn spawn_piece(&mut self) -> ActivePiece {
        ActivePiece::spawn(self.pieces.draw())
    }

    fn shift(&mut self, dx: i8) {
        let Some(piece) = self.active else {
            return;
        };
        self.transform(None, Some((piece.x + dx, piece.y)));
    }

    fn rotate(&mut self, clockwise: bool) {
        let Some(piece) = self.active else {
            return;
        };
        let rotation = if clockwise {
            piece.rotation.rotate_cw()
        } else {
            piece.rotation.rotate_ccw()
        };
        self.transform(Some(rotation), None);
    }

    /// Evaluate a candidate rotation/location atomically against the board.
    ///
    /// A colliding candidate is rejected outright (no wall-kick search). On
    /// success the piece is replaced with `settled` cleared, cancelling any
    /// pending lock grace.
    fn transform(&mut self, new_rotation: Option<Rotation>, new_location: Option<(i8, i8)>) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let rotation = new_rotation.unwrap_or(piece.rotation);
        let (x, y) = new_location.unwrap_or((piece.x, piece.y));

        let candidate = blocks_at(piece.shape, rotation, x, y);
        if self.board.has_collision(&candidate) {
            return false;
        }

        self.active = Some(ActivePiece {
            rotation,
            x,
            y,
            settled: false,
            ..piece
        });
        true
    }

    /// One gravity step (tick or explicit down-move).
    ///
    /// Descending is not a plain transform: a blocked descent must not simply
    /// vanish, it arms the lock. Exactly one lock can happen per call.
    fn step_down(&mut self) {
        if let Some(piece) = self.active {
            let candidate = blocks_at(piece.shape, piece.rotation, piece.x, piece.y + 1);
            if !self.board.has_collision(&candidate) {
                self.active = Some(ActivePiece {
                    y: piece.y + 1,
                    settled: false,
                    ..piece
                });
            } else if piece.settled {
                // Second consecutive blocked descent: merge at the current
                // position and hand control to a fresh piece.
                self.board.merge(&piece.blocks(), piece.color);
                self.active = Some(self.spawn_piece());
            } else {
                self.active = Some(ActivePiece {
                    settled: true,
                    ..piece
                });
            }
        }

        // Loss is evaluated before line clears.
        if self.board.top_row_occupied() {
            self.phase = GamePhase::Lost;
            return;
        }

        let full = self.board.full_rows();
        if !full.is_empty() {
            self.board.clear_lines(&full);
            self.score = self.score.saturating_add(line_clear_points(full.len()));
        }
    }

    /// Pure projection of board + active piece into a flat row-major color
    /// sequence for the renderer. Empty cells come out grey. Recomputed on
    /// demand, never cached; it carries no authority over the game state.
    pub fn view(&self) -> [Color; BOARD_CELLS] {
        let mut out = [Color::Grey; BOARD_CELLS];
        for (i, cell) in self.board.cells().iter().enumerate() {
            if let Some(color) = cell {
                out[i] = *color;
            }
        }
        if let Some(piece) = self.active {
            for (x, y) in piece.blocks() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    out[(y as usize) * (BOARD_WIDTH as usize) + (x as usize)] = piece.color;
                }
            }
        }
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
