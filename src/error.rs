use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum SessionError {
  AlreadyRunning,
  InvalidDifficulty(Difficulty),
  NotRunning,
}

impl Display for SessionError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::AlreadyRunning => write!(f, "Test is already running."),
      Self::InvalidDifficulty(_) => write!(f, "Selected stage has no text."),
      Self::NotRunning => write!(f, "Please start the test first!"),
    }
  }
}

impl std::error::Error for SessionError {}
