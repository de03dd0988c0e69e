/// Percentage of `sample` characters matched at the same position in `typed`.
///
/// Characters past the end of the shorter string are never compared, so a
/// short attempt is only penalised through the sample-length denominator.
pub(crate) fn accuracy(typed: &str, sample: &str) -> f64 {
  let total = sample.chars().count();

  if total == 0 {
    return 0.0;
  }

  let correct = typed
    .chars()
    .zip(sample.chars())
    .filter(|(typed, expected)| typed == expected)
    .count();

  correct as f64 / total as f64 * 100.0
}

/// Speed measured against the number of words in `sample`, not in what was typed.
pub(crate) fn words_per_minute(sample: &str, elapsed_seconds: f64) -> f64 {
  if elapsed_seconds <= 0.0 {
    return 0.0;
  }

  sample.split_whitespace().count() as f64 / elapsed_seconds * 60.0
}
