//! Shared data types and constants.
//!
//! Everything here is pure data with no external dependencies, usable from the
//! core logic, the input layer and the terminal frontend alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, row 0 is the topmost visible row)
//! - **Spawn position**: (5, 0) for every piece
//!
//! # Timing
//!
//! The core does not own a timer. It stores a gravity interval in
//! milliseconds (default 500) and the driver schedules `Tick` actions at that
//! cadence.

/// Board width in cells (10 columns).
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (22 rows).
pub const BOARD_HEIGHT: u8 = 22;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Default gravity interval in milliseconds.
pub const DEFAULT_SPEED_MS: u32 = 500;

/// Spawn position for new pieces (x, y).
pub const SPAWN_POSITION: (i8, i8) = (5, 0);

/// Line clear scoring table.
///
/// Base points for clearing N lines simultaneously:
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Counts outside the table award nothing.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven piece shapes.
///
/// Each shape has a fixed display color:
/// - **I**: cyan, horizontal bar
/// - **O**: yellow, 2x2 square
/// - **T**: purple, T-shaped
/// - **S**: green, S-shaped
/// - **Z**: red, Z-shaped (mirror of S)
/// - **J**: blue, J-shaped
/// - **L**: orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    /// The fixed display color for this shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::I => Color::Cyan,
            Shape::O => Color::Yellow,
            Shape::T => Color::Purple,
            Shape::S => Color::Green,
            Shape::Z => Color::Red,
            Shape::J => Color::Blue,
            Shape::L => Color::Orange,
        }
    }
}

/// Display colors: one per shape, plus grey for empty cells.
///
/// Grey is only ever produced by the view projection; the board stores
/// emptiness as `None`, never as a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
    Grey,
}

/// Rotation states, a cyclic group of order 4 under clockwise stepping.
///
/// The cycle goes Up -> Right -> Down -> Left -> Up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Up,
    Right,
    Down,
    Left,
}

impl Rotation {
    /// Rotate clockwise (90 degrees).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall::types::Rotation;
    ///
    /// assert_eq!(Rotation::Up.rotate_cw(), Rotation::Right);
    /// assert_eq!(Rotation::Left.rotate_cw(), Rotation::Up);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::Up => Rotation::Right,
            Rotation::Right => Rotation::Down,
            Rotation::Down => Rotation::Left,
            Rotation::Left => Rotation::Up,
        }
    }

    /// Rotate counter-clockwise (270 degrees clockwise).
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall::types::Rotation;
    ///
    /// assert_eq!(Rotation::Up.rotate_ccw(), Rotation::Left);
    /// assert_eq!(Rotation::Right.rotate_ccw(), Rotation::Up);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::Up => Rotation::Left,
            Rotation::Left => Rotation::Down,
            Rotation::Down => Rotation::Right,
            Rotation::Right => Rotation::Up,
        }
    }
}

/// Coarse game lifecycle.
///
/// Gates which actions a session accepts; see `core::Session::apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Inactive,
    Active,
    Paused,
    Lost,
}

/// Discrete inbound actions, delivered one at a time by the driver.
///
/// Movement and rotation are only honored while the phase is `Active`;
/// anything invalid for the current phase is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a new game (from Inactive or Lost): reset board and score,
    /// spawn the first piece.
    Start,
    /// Abandon the game and return to Inactive.
    Stop,
    /// Pause an active game.
    Pause,
    /// Resume a paused game.
    Resume,
    /// Terminal transition out of Active; normally triggered internally by
    /// the loss check but also accepted from outside.
    Lose,
    /// One externally scheduled gravity step.
    Tick,
    /// Move the active piece one row down (same lock semantics as a tick).
    MoveDown,
    /// Reserved; accepted and ignored.
    MoveUp,
    /// Move the active piece one column left.
    MoveLeft,
    /// Move the active piece one column right.
    MoveRight,
    /// Rotate the active piece clockwise.
    RotateCw,
    /// Rotate the active piece counter-clockwise.
    RotateCcw,
    /// Change the gravity interval (milliseconds). The driver owns the timer
    /// and must re-arm it after this.
    SetSpeed(u32),
}

/// A cell on the board: empty, or settled with a piece color.
pub type Cell = Option<Color>;
