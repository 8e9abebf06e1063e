//! Core game logic: pure, deterministic state transitions.
//!
//! No I/O, no timers, no rendering. The only temporal input is the `Tick`
//! action delivered by the driver.

pub mod board;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;

pub use board::Board;
pub use pieces::{blocks_at, shape_blocks, PieceBlocks};
pub use rng::{PieceGen, SimpleRng};
pub use scoring::line_clear_points;
pub use session::{ActivePiece, Session};
