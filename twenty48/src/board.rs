mod lines;
pub mod squish;

use std::{fmt, str::FromStr};

use log::{debug, trace};
use rand::{seq::SliceRandom, Rng};

use crate::{Direction, Error, Tile};

/// Tile value that wins the game.
pub const WINNING_TILE: Tile = 2048;

/// Largest tile accepted when loading a board.
pub const MAX_TILE: Tile = 1 << 32;

/// Chance that a spawned tile is a 2 rather than a 4.
const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Indices into the board data, listed front-to-back.
pub(crate) type Line = Vec<usize>;

/// Represents a pointer to a tile on the board.
///
/// Doesn't provide any bounds checking or other guarantees.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct TilePointer {
  pub row: usize,
  pub col: usize,
}
impl fmt::Display for TilePointer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.row, self.col)
  }
}

/// A 2048 board.
///
/// Tiles are stored row-major, `0` is an empty tile and every other value is
/// a power of two.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
  rows: usize,
  cols: usize,
  data: Box<[Tile]>,
}

impl Board {
  /// Create a board with two random starting tiles.
  ///
  /// # Errors
  /// Returns an error if `rows * cols` is zero.
  pub fn new<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Board, Error> {
    let mut board = Board::new_empty(rows, cols)?;

    board.tick(rng)?;
    board.tick(rng)?;

    Ok(board)
  }

  /// Create a board without any tiles.
  ///
  /// # Errors
  /// Returns an error if `rows * cols` is zero or too large to allocate.
  pub fn new_empty(rows: usize, cols: usize) -> Result<Board, Error> {
    let invalid = Error::InvalidDimensions { rows, cols };

    if rows == 0 || cols == 0 {
      return Err(invalid);
    }

    let len = rows.checked_mul(cols).ok_or_else(|| invalid.clone())?;

    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| invalid)?;
    data.resize(len, 0);
    let data = data.into_boxed_slice();

    Ok(Board { rows, cols, data })
  }

  /// Create a board from a 2D vector of tiles.
  ///
  /// # Errors
  /// Returns an error if the board is empty, not rectangular or contains
  /// a value that is not a power of two.
  pub fn from_rows(data: Vec<Vec<Tile>>) -> Result<Board, Error> {
    let rows = data.len();
    let cols = data.first().map_or(0, Vec::len);

    if rows == 0 || cols == 0 {
      return Err(Error::InvalidDimensions { rows, cols });
    }

    for (index, row) in data.iter().enumerate() {
      if row.len() != cols {
        return Err(Error::NotRectangular {
          line: index + 1,
          width: row.len(),
          expected: cols,
        });
      }

      if let Some(&value) = row
        .iter()
        .find(|&&value| value != 0 && (!value.is_power_of_two() || value > MAX_TILE))
      {
        return Err(Error::InvalidTile { value });
      }
    }

    let data = data.into_iter().flatten().collect();

    Ok(Board { rows, cols, data })
  }

  pub fn rows(&self) -> usize {
    self.rows
  }

  pub fn cols(&self) -> usize {
    self.cols
  }

  /// Get reference to slice of all tiles in the board.
  pub fn tiles(&self) -> &[Tile] {
    &self.data
  }

  fn get_index(&self, ptr: TilePointer) -> usize {
    ptr.row * self.cols + ptr.col
  }

  /// Convert a raw index to `TilePointer`.
  pub fn get_ptr_from_index(&self, index: usize) -> TilePointer {
    TilePointer {
      row: index / self.cols,
      col: index % self.cols,
    }
  }

  /// Get value of a tile at the given pointer.
  ///
  /// Returns `None` if the pointer is out of bounds.
  pub fn get_tile(&self, ptr: TilePointer) -> Option<Tile> {
    if ptr.row >= self.rows || ptr.col >= self.cols {
      return None;
    }

    self.data.get(self.get_index(ptr)).copied()
  }

  /// Iterate over all tiles with their positions, row by row.
  pub fn snapshot(&self) -> impl Iterator<Item = (TilePointer, Tile)> + '_ {
    self
      .data
      .iter()
      .enumerate()
      .map(|(index, &tile)| (self.get_ptr_from_index(index), tile))
  }

  /// Get iterator over all empty tiles in the board.
  pub fn pointers_to_empty_tiles(&self) -> impl Iterator<Item = TilePointer> + '_ {
    self
      .snapshot()
      .filter(|&(.., tile)| tile == 0)
      .map(|(ptr, ..)| ptr)
  }

  pub fn empty_count(&self) -> usize {
    self.data.iter().filter(|&&tile| tile == 0).count()
  }

  pub fn max_tile(&self) -> Tile {
    self.data.iter().copied().max().unwrap_or(0)
  }

  fn read_line(&self, line: &[usize]) -> Vec<Tile> {
    line.iter().map(|&index| self.data[index]).collect()
  }

  /// Check whether moving in `direction` would change any tile.
  pub fn is_squishable(&self, direction: Direction) -> bool {
    let reversed = direction.is_reversed();

    lines::generate(self.rows, self.cols, direction)
      .iter()
      .any(|line| {
        let values = self.read_line(line);
        squish::update(&values, reversed) != values
      })
  }

  /// Slide and merge all tiles in `direction`.
  ///
  /// Moving in a direction that is not squishable leaves the board as is.
  /// Returns whether any tile changed.
  pub fn shift(&mut self, direction: Direction) -> bool {
    let reversed = direction.is_reversed();
    let mut changed = false;

    for line in lines::generate(self.rows, self.cols, direction) {
      let values = self.read_line(&line);
      let updated = squish::update(&values, reversed);

      if updated == values {
        continue;
      }

      changed = true;
      for (&index, value) in line.iter().zip(updated) {
        self.data[index] = value;
      }
    }

    trace!("shift {direction}: changed = {changed}");

    changed
  }

  /// Spawn a new tile (2 with 90% chance, otherwise 4) on a random empty
  /// tile and return where it was placed.
  ///
  /// # Errors
  /// Returns [`Error::NoEmptyTiles`] if the board is full. The board is not
  /// modified in that case.
  pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TilePointer, Error> {
    let empty_tiles: Vec<TilePointer> = self.pointers_to_empty_tiles().collect();

    let &ptr = empty_tiles.choose(rng).ok_or(Error::NoEmptyTiles)?;
    let value = if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };

    let index = self.get_index(ptr);
    self.data[index] = value;

    debug!("spawned {value} at {ptr}");

    Ok(ptr)
  }

  /// The game is won once any tile reaches [`WINNING_TILE`].
  pub fn is_won(&self) -> bool {
    self.data.iter().any(|&tile| tile == WINNING_TILE)
  }

  /// The game is lost once the board is full.
  ///
  /// A full board may still have a legal move, see
  /// [`Board::has_legal_move`].
  pub fn is_lost(&self) -> bool {
    self.data.iter().all(|&tile| tile != 0)
  }

  /// Check whether any direction is squishable.
  pub fn has_legal_move(&self) -> bool {
    Direction::ALL
      .into_iter()
      .any(|direction| self.is_squishable(direction))
  }
}

impl FromStr for Board {
  type Err = Error;

  /// Parse a board from whitespace separated values, one row per line.
  ///
  /// Empty tiles may be written as `0` or `.`, blank lines are skipped.
  ///
  /// # Errors
  /// Same as [`Board::from_rows`], plus unparsable values.
  fn from_str(input_string: &str) -> Result<Board, Self::Err> {
    let rows = input_string
      .lines()
      .filter(|line| !line.trim().is_empty())
      .map(|line| {
        line
          .split_whitespace()
          .map(|tile| match tile {
            "." => Ok(0),
            _ => tile.parse::<Tile>(),
          })
          .collect::<Result<Vec<Tile>, _>>()
      })
      .collect::<Result<Vec<Vec<Tile>>, _>>()?;

    Board::from_rows(rows)
  }
}
