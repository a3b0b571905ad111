//! Board engine for the 2048 sliding tile puzzle.
//!
//! The engine owns no terminal I/O: it slides, merges and spawns tiles and
//! reports win or loss. Randomness is always supplied by the caller.

mod board;
mod direction;
mod error;
mod game;
mod state;
mod stats;

pub use board::{squish, Board, TilePointer, MAX_TILE, WINNING_TILE};
pub use direction::{Direction, DirectionError};
pub use error::Error;
pub use game::{Game, Turn};
pub use state::State;
pub use stats::Stats;

/// Value of a single tile, `0` means empty.
pub type Tile = u64;
