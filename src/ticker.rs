use super::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Ticker {
  deadline: Instant,
  period: Duration,
}

impl Ticker {
  pub(crate) fn arm(now: Instant, period: Duration) -> Self {
    Self {
      deadline: now + period,
      period,
    }
  }

  pub(crate) fn deadline(&self) -> Instant {
    self.deadline
  }

  pub(crate) fn fire(&mut self, now: Instant) -> bool {
    if now < self.deadline {
      return false;
    }

    while self.deadline <= now {
      self.deadline += self.period;
    }

    true
  }
}
