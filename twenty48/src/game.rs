use log::debug;
use rand::Rng;

use crate::{Board, Direction, Error, State, Stats, TilePointer};

/// Result of a single [`Game::turn`].
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Turn {
  /// Nothing can move in the requested direction, the board is unchanged.
  Blocked,
  /// Tiles moved and a new tile was spawned.
  Moved { spawned: TilePointer },
  /// Tiles moved and the winning tile appeared. No tile is spawned.
  Won,
}

/// A game session: one board plus the random source feeding its spawns.
#[derive(Debug)]
pub struct Game<R: Rng> {
  board: Board,
  rng: R,
  stats: Stats,
}

impl<R: Rng> Game<R> {
  /// Start a new game on an empty `rows` x `cols` board with two tiles.
  ///
  /// # Errors
  /// Returns an error if the board has no tiles to spawn into.
  pub fn new(rows: usize, cols: usize, mut rng: R) -> Result<Self, Error> {
    let board = Board::new(rows, cols, &mut rng)?;

    Ok(Game::from_board(board, rng))
  }

  /// Continue a game from an existing board, no tiles are spawned.
  pub fn from_board(board: Board, rng: R) -> Self {
    let stats = Stats {
      max_tile: board.max_tile(),
      ..Stats::new()
    };

    Game { board, rng, stats }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  pub fn stats(&self) -> Stats {
    self.stats
  }

  /// Win is checked before loss, since a merge into the winning tile may
  /// leave the board full.
  pub fn state(&self) -> State {
    if self.board.is_won() {
      State::Won
    } else if self.board.is_lost() {
      State::Lost
    } else {
      State::Playing
    }
  }

  pub fn is_squishable(&self, direction: Direction) -> bool {
    self.board.is_squishable(direction)
  }

  /// Play one turn: slide the tiles and, unless the game was just won,
  /// spawn a new tile.
  ///
  /// # Errors
  /// Returns [`Error::NoEmptyTiles`] if there is no room for the new tile.
  /// A successful move always frees a tile, so this only happens on boards
  /// that were never valid.
  pub fn turn(&mut self, direction: Direction) -> Result<Turn, Error> {
    if !self.board.shift(direction) {
      debug!("{direction} is blocked");
      return Ok(Turn::Blocked);
    }

    self.stats.moves += 1;
    self.stats.max_tile = self.board.max_tile();

    if self.board.is_won() {
      debug!("won after {} moves", self.stats.moves);
      return Ok(Turn::Won);
    }

    let spawned = self.board.tick(&mut self.rng)?;
    self.stats.spawned += 1;
    self.stats.max_tile = self.board.max_tile();

    Ok(Turn::Moved { spawned })
  }
}
