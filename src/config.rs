use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, Command};

use crate::Error;

/// Smallest playable side length.
const MIN_SIDE: usize = 2;
const DEFAULT_SIDE: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub rows: usize,
  pub cols: usize,
  /// Seed for a reproducible game, entropy is used otherwise
  pub seed: Option<u64>,
  /// Start from a board saved as text instead of a fresh one
  pub board: Option<PathBuf>,
  pub log_dir: Option<PathBuf>,
  pub log_level: String,
}

pub fn command() -> Command<'static> {
  Command::new("2048")
    .version(env!("CARGO_PKG_VERSION"))
    .about("Slide tiles with w/a/s/d, reach 2048 to win")
    .arg(
      Arg::new("rows")
        .short('r')
        .long("rows")
        .help("Number of rows (default is 4)")
        .takes_value(true)
        .value_parser(value_parser!(usize))
        .conflicts_with("size"),
    )
    .arg(
      Arg::new("cols")
        .short('c')
        .long("cols")
        .help("Number of columns (default is 4)")
        .takes_value(true)
        .value_parser(value_parser!(usize))
        .conflicts_with("size"),
    )
    .arg(
      Arg::new("size")
        .short('s')
        .long("size")
        .value_name("SIZE")
        .help("Size of a square board")
        .takes_value(true)
        .value_parser(value_parser!(usize)),
    )
    .arg(
      Arg::new("seed")
        .long("seed")
        .help("Seed the tile spawns for a reproducible game")
        .takes_value(true)
        .value_parser(value_parser!(u64)),
    )
    .arg(
      Arg::new("board")
        .short('b')
        .long("board")
        .value_name("FILE")
        .help("Start from a board file, one row per line")
        .takes_value(true)
        .value_parser(value_parser!(PathBuf))
        .conflicts_with_all(&["rows", "cols", "size"]),
    )
    .arg(
      Arg::new("log-dir")
        .long("log-dir")
        .value_name("DIR")
        .help("Write logs to files in this directory instead of stderr")
        .takes_value(true)
        .value_parser(value_parser!(PathBuf)),
    )
    .arg(
      Arg::new("log-level")
        .long("log-level")
        .value_name("LEVEL")
        .help("Log level, overridden by RUST_LOG (default is warn)")
        .takes_value(true)
        .value_parser(value_parser!(String))
        .default_value("warn"),
    )
}

impl Config {
  pub fn from_args() -> Result<Config, Error> {
    Config::from_matches(&command().get_matches())
  }

  pub fn from_matches(matches: &ArgMatches) -> Result<Config, Error> {
    let size = matches.get_one::<usize>("size").copied();

    let rows = matches
      .get_one::<usize>("rows")
      .copied()
      .or(size)
      .unwrap_or(DEFAULT_SIDE);
    let cols = matches
      .get_one::<usize>("cols")
      .copied()
      .or(size)
      .unwrap_or(DEFAULT_SIDE);

    if rows < MIN_SIDE || cols < MIN_SIDE {
      return Err(format!("board too small: {rows}x{cols}, but minimum is {MIN_SIDE}x{MIN_SIDE}").into());
    }

    Ok(Config {
      rows,
      cols,
      seed: matches.get_one::<u64>("seed").copied(),
      board: matches.get_one::<PathBuf>("board").cloned(),
      log_dir: matches.get_one::<PathBuf>("log-dir").cloned(),
      log_level: matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "warn".to_owned()),
    })
  }
}
