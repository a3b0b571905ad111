use std::fmt;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum State {
  Playing,
  Won,
  Lost,
}
impl State {
  pub fn is_end(self) -> bool {
    !matches!(self, Self::Playing)
  }

  pub fn is_win(self) -> bool {
    matches!(self, Self::Won)
  }

  pub fn is_lose(self) -> bool {
    matches!(self, Self::Lost)
  }
}

impl fmt::Display for State {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Self::Playing => "Playing",
        Self::Won => "Won",
        Self::Lost => "Lost",
      }
    )
  }
}
