use super::Line;
use crate::Direction;

/// Create `Line` representing given row
fn make_row(cols: usize, row: usize) -> Line {
  (0..cols).map(|col| col + row * cols).collect()
}

/// Create `Line` representing given column
fn make_col(rows: usize, cols: usize, col: usize) -> Line {
  (0..rows).map(|row| col + row * cols).collect()
}

/// Generate all lines a move in `direction` operates on.
///
/// Indices are always listed front-to-back, i.e. left to right for rows and
/// top to bottom for columns, regardless of `direction`.
pub fn generate(rows: usize, cols: usize, direction: Direction) -> Vec<Line> {
  if direction.is_horizontal() {
    (0..rows).map(|row| make_row(cols, row)).collect()
  } else {
    (0..cols).map(|col| make_col(rows, cols, col)).collect()
  }
}
