use std::fmt;

use crate::Tile;

/// Counters for a single game session.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Stats {
  pub moves: u32,
  pub spawned: u32,
  pub max_tile: Tile,
}
impl Stats {
  pub fn new() -> Stats {
    Stats::default()
  }
}
impl fmt::Display for Stats {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Moves: {}, tiles spawned: {}, highest tile: {}",
      self.moves, self.spawned, self.max_tile
    )
  }
}
