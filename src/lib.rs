//! Falling-block puzzle game.
//!
//! The crate is split the way the game is split: [`core`] is the pure,
//! deterministic rules engine (board, pieces, session state machine);
//! [`input`] maps raw key names to game actions; [`term`] draws the core's
//! derived view into a terminal. The binary in `main.rs` is the driver that
//! owns the gravity timer and feeds discrete actions into the core.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
