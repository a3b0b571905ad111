use std::fmt;

use twenty48_lib::Board;

const TILE_WIDTH: usize = 4;

/// Bordered text grid of a board.
pub struct BoardView<'a>(pub &'a Board);

impl fmt::Display for BoardView<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let board = self.0;
    let border = "-".repeat((TILE_WIDTH + 3) * board.cols() + 1);

    writeln!(f, "{border}")?;

    for row in board.tiles().chunks(board.cols()) {
      let cells = row
        .iter()
        .map(|tile| format!("{tile:>width$}", width = TILE_WIDTH))
        .collect::<Vec<_>>()
        .join(" | ");

      writeln!(f, "| {cells} |")?;
      writeln!(f, "{border}")?;
    }

    Ok(())
  }
}
