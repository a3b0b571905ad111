use std::{fmt, str::FromStr};

use thiserror::Error;

/// Direction in which all tiles slide.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum DirectionError {
  #[error("unknown key: {0:?}")]
  UnknownKey(String),
}

impl Direction {
  pub const ALL: [Direction; 4] = [
    Direction::Left,
    Direction::Right,
    Direction::Up,
    Direction::Down,
  ];

  /// Key used to select this direction in the terminal.
  pub fn key(self) -> char {
    match self {
      Direction::Up => 'w',
      Direction::Left => 'a',
      Direction::Down => 's',
      Direction::Right => 'd',
    }
  }

  /// Parse a direction from its key.
  ///
  /// ```rust
  /// # use twenty48_lib::Direction;
  /// assert_eq!(Direction::from_key("a"), Ok(Direction::Left));
  /// assert_eq!(Direction::from_key(" W\n"), Ok(Direction::Up));
  /// assert!(Direction::from_key("exit").is_err());
  /// ```
  pub fn from_key(key: &str) -> Result<Self, DirectionError> {
    match key.trim().to_ascii_lowercase().as_str() {
      "w" => Ok(Direction::Up),
      "a" => Ok(Direction::Left),
      "s" => Ok(Direction::Down),
      "d" => Ok(Direction::Right),
      _ => Err(DirectionError::UnknownKey(key.to_owned())),
    }
  }

  /// Lines for this direction are read back-to-front, so tiles gather
  /// at the far end.
  pub fn is_reversed(self) -> bool {
    matches!(self, Direction::Right | Direction::Down)
  }

  pub fn is_horizontal(self) -> bool {
    matches!(self, Direction::Left | Direction::Right)
  }
}

impl fmt::Display for Direction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Direction::Up => "up",
        Direction::Down => "down",
        Direction::Left => "left",
        Direction::Right => "right",
      }
    )
  }
}

impl FromStr for Direction {
  type Err = DirectionError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Direction::from_key(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_key_roundtrip() {
    for direction in Direction::ALL {
      let key = direction.key().to_string();
      assert_eq!(key.parse::<Direction>(), Ok(direction));
    }
  }

  #[test]
  fn test_unknown_key() {
    assert_eq!(
      Direction::from_key("q"),
      Err(DirectionError::UnknownKey("q".into()))
    );
    assert!(Direction::from_key("").is_err());
    assert!(Direction::from_key("wa").is_err());
  }

  #[test]
  fn test_orientation() {
    assert!(Direction::Right.is_reversed());
    assert!(Direction::Down.is_reversed());
    assert!(!Direction::Left.is_reversed());
    assert!(!Direction::Up.is_reversed());

    assert!(Direction::Left.is_horizontal());
    assert!(Direction::Right.is_horizontal());
    assert!(!Direction::Up.is_horizontal());
    assert!(!Direction::Down.is_horizontal());
  }
}
