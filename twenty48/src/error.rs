use std::num::ParseIntError;

use thiserror::Error;

use crate::Tile;

/// Errors reported by the board engine.
///
/// All of them are precondition violations, the board is never left
/// half-modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid board dimensions: {rows}x{cols}, both must be non-zero and fit in memory")]
  InvalidDimensions { rows: usize, cols: usize },

  #[error("no empty tiles left")]
  NoEmptyTiles,

  #[error("board is not rectangular: line {line} is {width} tiles wide, but {expected} was expected")]
  NotRectangular {
    line: usize,
    width: usize,
    expected: usize,
  },

  #[error("invalid tile value {value}, must be 0 or a power of two")]
  InvalidTile { value: Tile },

  #[error("invalid tile: {0}")]
  Parse(#[from] ParseIntError),
}
