use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Phase {
  Finished,
  #[default]
  Idle,
  Running,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Command {
  Erase,
  Input(char),
  Start(Difficulty),
  Stop,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Session {
  difficulty: Difficulty,
  elapsed_seconds: u64,
  input: String,
  phase: Phase,
  sample: String,
  started_at: Option<Instant>,
  ticker: Option<Ticker>,
}

impl Session {
  pub(crate) fn difficulty(&self) -> Difficulty {
    self.difficulty
  }

  pub(crate) fn elapsed_seconds(&self) -> u64 {
    self.elapsed_seconds
  }

  pub(crate) fn input(&self) -> &str {
    &self.input
  }

  pub(crate) fn is_armed(&self) -> bool {
    self.started_at.is_some()
  }

  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  pub(crate) fn sample(&self) -> &str {
    &self.sample
  }
}

#[derive(Debug)]
pub(crate) struct Controller<C: Clock = SystemClock> {
  clock: C,
  samples: SampleSet,
  session: Session,
  tick_period: Duration,
}

impl Default for Controller {
  fn default() -> Self {
    Self::new(SystemClock, SampleSet::default(), TICK_PERIOD)
  }
}

impl<C: Clock> Controller<C> {
  pub(crate) fn new(clock: C, samples: SampleSet, tick_period: Duration) -> Self {
    Self {
      clock,
      samples,
      session: Session::default(),
      tick_period,
    }
  }

  pub(crate) fn session(&self) -> &Session {
    &self.session
  }

  pub(crate) fn dispatch(&mut self, command: Command) -> Result<Option<Statistics>, SessionError> {
    match command {
      Command::Erase => {
        self.backspace();
        Ok(None)
      }
      Command::Input(c) => {
        self.type_char(c);
        Ok(None)
      }
      Command::Start(difficulty) => self.start(difficulty).map(|()| None),
      Command::Stop => self.submit().map(Some),
    }
  }

  pub(crate) fn start(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
    if self.session.phase == Phase::Running {
      return Err(SessionError::AlreadyRunning);
    }

    let sample = self
      .samples
      .get(difficulty)
      .filter(|sample| !sample.is_empty())
      .ok_or(SessionError::InvalidDifficulty(difficulty))?;

    self.session = Session {
      difficulty,
      elapsed_seconds: 0,
      input: String::new(),
      phase: Phase::Running,
      sample: sample.to_owned(),
      started_at: None,
      ticker: None,
    };

    Ok(())
  }

  pub(crate) fn on_first_input(&mut self) {
    if self.session.phase != Phase::Running || self.session.is_armed() {
      return;
    }

    let now = self.clock.now();

    self.session.started_at = Some(now);
    self.session.ticker = Some(Ticker::arm(now, self.tick_period));
  }

  pub(crate) fn type_char(&mut self, c: char) {
    if self.session.phase != Phase::Running {
      return;
    }

    self.on_first_input();
    self.session.input.push(c);
  }

  pub(crate) fn backspace(&mut self) {
    if self.session.phase == Phase::Running {
      self.session.input.pop();
    }
  }

  pub(crate) fn poll_tick(&mut self) -> Option<u64> {
    let now = self.clock.now();
    let started_at = self.session.started_at?;

    if !self.session.ticker.as_mut()?.fire(now) {
      return None;
    }

    self.session.elapsed_seconds = now.duration_since(started_at).as_secs();

    Some(self.session.elapsed_seconds)
  }

  pub(crate) fn next_tick(&self) -> Option<Instant> {
    self.session.ticker.as_ref().map(Ticker::deadline)
  }

  pub(crate) fn stop(&mut self, typed: &str) -> Result<Statistics, SessionError> {
    if self.session.phase != Phase::Running {
      return Err(SessionError::NotRunning);
    }

    let elapsed_time = match self.session.started_at {
      Some(started_at) => self.clock.now().duration_since(started_at).as_secs_f64(),
      None => self.session.elapsed_seconds as f64,
    };

    let statistics = Statistics::score(typed, &self.session.sample, elapsed_time);

    self.session.phase = Phase::Finished;
    self.session.ticker = None;
    self.session.started_at = None;

    Ok(statistics)
  }

  pub(crate) fn submit(&mut self) -> Result<Statistics, SessionError> {
    let typed = self.session.input.clone();
    self.stop(&typed)
  }
}
