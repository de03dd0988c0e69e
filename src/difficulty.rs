use super::*;

#[derive(
  Clone, Copy, Debug, Default, Eq, Hash, PartialEq, ValueEnum, strum_macros::Display,
)]
pub(crate) enum Difficulty {
  #[default]
  Low,
  Medium,
  High,
}

impl Difficulty {
  pub(crate) fn next(self) -> Self {
    match self {
      Self::Low => Self::Medium,
      Self::Medium => Self::High,
      Self::High => Self::Low,
    }
  }
}

#[derive(Clone, Debug)]
pub(crate) struct SampleSet {
  samples: Vec<(Difficulty, String)>,
}

impl Default for SampleSet {
  fn default() -> Self {
    Self::new([
      (Difficulty::Low, "The quick brown fox jumps over the lazy dog."),
      (
        Difficulty::Medium,
        "Typing fast can improve your productivity and save time for many tasks.",
      ),
      (
        Difficulty::High,
        "The complexities of the typing test challenge will push your speed and accuracy to new levels.",
      ),
    ])
  }
}

impl SampleSet {
  pub(crate) fn new<'a>(samples: impl IntoIterator<Item = (Difficulty, &'a str)>) -> Self {
    Self {
      samples: samples
        .into_iter()
        .map(|(difficulty, text)| (difficulty, text.to_owned()))
        .collect(),
    }
  }

  pub(crate) fn get(&self, difficulty: Difficulty) -> Option<&str> {
    self
      .samples
      .iter()
      .find(|(candidate, _)| *candidate == difficulty)
      .map(|(_, text)| text.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_label_ignoring_case() {
    assert_eq!(Difficulty::from_str("low", true).unwrap(), Difficulty::Low);
    assert_eq!(Difficulty::from_str("Medium", true).unwrap(), Difficulty::Medium);
    assert_eq!(Difficulty::from_str("HIGH", true).unwrap(), Difficulty::High);
  }

  #[test]
  fn parse_unknown_label() {
    assert!(Difficulty::from_str("expert", true).is_err());
  }

  #[test]
  fn display() {
    assert_eq!(Difficulty::Low.to_string(), "Low");
    assert_eq!(Difficulty::Medium.to_string(), "Medium");
    assert_eq!(Difficulty::High.to_string(), "High");
  }

  #[test]
  fn next_wraps_around() {
    assert_eq!(Difficulty::Low.next(), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.next(), Difficulty::High);
    assert_eq!(Difficulty::High.next(), Difficulty::Low);
  }

  #[test]
  fn default_samples() {
    let samples = SampleSet::default();

    for difficulty in Difficulty::value_variants() {
      assert!(!samples.get(*difficulty).unwrap().is_empty());
    }

    assert_eq!(
      samples.get(Difficulty::Medium).unwrap().split_whitespace().count(),
      12
    );
  }

  #[test]
  fn missing_sample() {
    let samples = SampleSet::new([(Difficulty::Low, "only low")]);

    assert_eq!(samples.get(Difficulty::Low), Some("only low"));
    assert_eq!(samples.get(Difficulty::High), None);
  }
}
