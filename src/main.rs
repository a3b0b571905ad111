#![warn(clippy::pedantic)]

mod config;
mod logging;
mod render;

use std::{
  fs,
  io::{self, Write},
  path::Path,
  process,
};

use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use text_io::try_read;
use twenty48_lib::{Board, Direction, Game, State};

use config::Config;
use render::BoardView;

type Error = Box<dyn std::error::Error>;

fn main() {
  let config = match Config::from_args() {
    Ok(config) => config,
    Err(error) => {
      eprintln!("Error: {error}");
      process::exit(2);
    }
  };

  let _logger = match logging::setup_logging(&config) {
    Ok(handle) => handle,
    Err(error) => {
      eprintln!("Error: could not start logger: {error}");
      process::exit(2);
    }
  };

  if let Err(error) = run(&config) {
    eprintln!("Error: {error}");
    process::exit(1);
  }
}

fn run(config: &Config) -> Result<(), Error> {
  let rng = match config.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  let mut game = match &config.board {
    Some(path) => Game::from_board(load_board(path)?, rng),
    None => Game::new(config.rows, config.cols, rng)?,
  };

  info!(
    "starting {}x{} game (seed: {:?})",
    game.board().rows(),
    game.board().cols(),
    config.seed
  );

  play(&mut game)?;

  println!("{}", game.stats());

  Ok(())
}

fn load_board(path: &Path) -> Result<Board, Error> {
  let contents = fs::read_to_string(path)?;
  let board = contents.parse::<Board>()?;

  Ok(board)
}

fn play<R: Rng>(game: &mut Game<R>) -> Result<(), Error> {
  loop {
    println!("{}", BoardView(game.board()));

    let state = game.state();
    if state.is_end() {
      info!("game over: {state} after {} moves", game.stats().moves);
    }

    match state {
      State::Won => {
        println!("You Win!");
        return Ok(());
      }
      State::Lost => {
        println!("You lost!");
        return Ok(());
      }
      State::Playing => {}
    }

    let Some(direction) = read_direction(game)? else {
      return Ok(());
    };

    let turn = game.turn(direction)?;
    debug!("{direction}: {turn:?}");
  }
}

fn prompt() -> String {
  let keys = Direction::ALL
    .iter()
    .map(|direction| format!("'{}'", direction.key()))
    .collect::<Vec<_>>()
    .join(", ");

  format!("Move [{keys}]: ")
}

fn write_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
  write!(out, "{prompt}")?;
  out.flush()
}

/// Ask for a key until it names a direction the tiles can move in.
///
/// Returns `None` on `exit` or when stdin is closed.
///
/// # Errors
/// Returns an error if the prompt cannot be written.
fn read_direction<R: Rng>(game: &Game<R>) -> Result<Option<Direction>, Error> {
  let prompt = prompt();

  loop {
    write_prompt(&mut io::stdout(), &prompt)?;

    let line: Result<String, _> = try_read!("{}\n");
    let Ok(line) = line else {
      return Ok(None);
    };
    let line = line.trim();

    if line == "exit" {
      return Ok(None);
    }

    match Direction::from_key(line) {
      Ok(direction) if game.is_squishable(direction) => return Ok(Some(direction)),
      Ok(direction) => {
        debug!("{direction} is blocked");
        println!("TILES CANNOT BE MOVED IN THAT DIRECTION!");
        println!("{}", BoardView(game.board()));
      }
      Err(error) => {
        debug!("{error}");
        println!("PLEASE CHOOSE A GIVEN KEY TO PLAY!");
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use twenty48_lib::Turn;

  struct BrokenPipe;

  impl Write for BrokenPipe {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Err(io::ErrorKind::BrokenPipe.into())
    }
  }

  #[test]
  fn test_prompt() {
    assert_eq!(prompt(), "Move ['a', 'd', 'w', 's']: ");
  }

  #[test]
  fn test_write_prompt() {
    let mut out = Vec::new();
    write_prompt(&mut out, &prompt()).unwrap();
    assert_eq!(out, prompt().into_bytes());
  }

  #[test]
  fn test_write_prompt_flush_error() {
    let error = write_prompt(&mut BrokenPipe, &prompt()).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
  }

  #[test]
  fn test_turn_after_read_never_blocks() {
    let board: Board = "2 4\n4 .".parse().unwrap();
    let mut game = Game::from_board(board, StdRng::seed_from_u64(5));

    for direction in Direction::ALL {
      if game.is_squishable(direction) {
        assert_ne!(game.turn(direction).unwrap(), Turn::Blocked);
        return;
      }
    }

    panic!("board has a legal move");
  }
}
