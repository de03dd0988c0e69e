use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: f64,
  pub(crate) elapsed_time: f64,
  pub(crate) wpm: f64,
}

impl Statistics {
  pub(crate) fn score(typed: &str, sample: &str, elapsed_time: f64) -> Self {
    Self {
      accuracy: scorer::accuracy(typed, sample),
      elapsed_time,
      wpm: scorer::words_per_minute(sample, elapsed_time),
    }
  }
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Time Taken: {:.2}s | Accuracy: {:.2}% | Speed: {:.2} WPM",
      self.elapsed_time, self.accuracy, self.wpm
    )
  }
}
