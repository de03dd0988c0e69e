use super::*;

pub(crate) trait Clock {
  fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> Instant {
    Instant::now()
  }
}

#[cfg(test)]
#[derive(Debug)]
pub(crate) struct ManualClock {
  now: std::cell::Cell<Instant>,
}

#[cfg(test)]
impl ManualClock {
  pub(crate) fn new() -> Self {
    Self {
      now: std::cell::Cell::new(Instant::now()),
    }
  }

  pub(crate) fn advance(&self, duration: Duration) {
    self.now.set(self.now.get() + duration);
  }
}

#[cfg(test)]
impl Clock for ManualClock {
  fn now(&self) -> Instant {
    self.now.get()
  }
}

#[cfg(test)]
impl Clock for &ManualClock {
  fn now(&self) -> Instant {
    (**self).now()
  }
}
