use crate::Tile;

/// Move all non-empty tiles to the front of the line, keeping their order.
///
/// ```rust
/// # use twenty48_lib::squish::squish;
/// assert_eq!(squish(&[0, 2, 0, 4]), vec![2, 4, 0, 0]);
/// ```
pub fn squish(line: &[Tile]) -> Vec<Tile> {
  let mut squished: Vec<Tile> = line.iter().copied().filter(|&tile| tile != 0).collect();
  squished.resize(line.len(), 0);
  squished
}

/// Merge equal neighbours front-to-back in a single pass.
///
/// A merged pair becomes `(2 * value, 0)` and neither tile takes part in
/// another merge during the same pass.
///
/// ```rust
/// # use twenty48_lib::squish::merge;
/// assert_eq!(merge(&[2, 2, 2]), vec![4, 0, 2]);
/// ```
pub fn merge(line: &[Tile]) -> Vec<Tile> {
  let mut merged = Vec::with_capacity(line.len());
  let mut index = 0;

  while index < line.len() {
    let current = line[index];

    match line.get(index + 1) {
      Some(&next) if current != 0 && next == current => {
        merged.extend([current * 2, 0]);
        index += 2;
      }
      _ => {
        merged.push(current);
        index += 1;
      }
    }
  }

  merged
}

/// Slide and merge a single line towards its front, or towards its back
/// when `reversed`.
///
/// ```rust
/// # use twenty48_lib::squish::update;
/// assert_eq!(update(&[2, 0, 2, 4], false), vec![4, 4, 0, 0]);
/// assert_eq!(update(&[2, 0, 2, 4], true), vec![0, 0, 4, 4]);
/// ```
pub fn update(line: &[Tile], reversed: bool) -> Vec<Tile> {
  if !reversed {
    return squish(&merge(&squish(line)));
  }

  let mirrored: Vec<Tile> = line.iter().rev().copied().collect();
  let mut updated = squish(&merge(&squish(&mirrored)));
  updated.reverse();
  updated
}
