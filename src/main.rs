use {
  action::Action,
  app::App,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  clock::{Clock, SystemClock},
  crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  difficulty::{Difficulty, SampleSet},
  error::SessionError,
  session::{Command, Controller, Phase},
  statistics::Statistics,
  std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    io::{self, Write, stdout},
    process,
    time::{Duration, Instant},
  },
  ticker::Ticker,
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod clock;
mod difficulty;
mod error;
mod scorer;
mod session;
mod statistics;
mod ticker;

const TICK_PERIOD: Duration = Duration::from_secs(1);

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
