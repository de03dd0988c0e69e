use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum State {
  Continuing,
  Quit,
}

#[derive(Debug)]
pub(crate) struct App {
  controller: Controller,
  message: Option<String>,
  selected: Difficulty,
  statistics: Option<Statistics>,
}

impl App {
  pub(crate) fn new(selected: Difficulty) -> Self {
    Self {
      controller: Controller::default(),
      message: None,
      selected,
      statistics: None,
    }
  }

  pub(crate) fn start(&mut self) -> Result<(), SessionError> {
    self.controller.dispatch(Command::Start(self.selected))?;
    self.message = None;
    self.statistics = None;
    Ok(())
  }

  fn apply(&mut self, command: Command) {
    match self.controller.dispatch(command) {
      Ok(Some(statistics)) => {
        self.message = None;
        self.statistics = Some(statistics);
      }
      Ok(None) => self.message = None,
      Err(error) => self.message = Some(error.to_string()),
    }
  }

  fn display(&self) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    let session = self.controller.session();

    print!("Typing Speed Test\r\n\r\n");
    print!("Stage: {}\r\n", self.selected);
    print!("Time: {}s\r\n\r\n", session.elapsed_seconds());

    if session.phase() == Phase::Idle {
      print!("Press Ctrl+N to start the test.\r\n");
    } else {
      print!("Type the following text ({}):\r\n", session.difficulty());

      let input_characters = session.input().chars().collect::<Vec<char>>();

      for (i, expected_character) in session.sample().chars().enumerate() {
        command!(SetForegroundColor(
          match i.cmp(&input_characters.len()) {
            Ordering::Less if input_characters[i] == expected_character => Color::Green,
            Ordering::Less => Color::Red,
            Ordering::Equal if session.phase() == Phase::Running => Color::Yellow,
            _ => Color::White,
          }
        ))?;

        print!("{expected_character}");
      }

      command!(ResetColor)?;

      print!("\r\n\r\nYour Input:\r\n{}\r\n", session.input());
    }

    print!("\r\n");

    if let Some(message) = &self.message {
      command!(
        SetForegroundColor(Color::Red),
        Print(message),
        ResetColor,
        Print("\r\n")
      )?;
    }

    if let Some(statistics) = &self.statistics {
      print!("{statistics}\r\n");
    }

    print!("\r\nCtrl+N start | Enter stop | Tab stage | Esc quit");

    stdout().flush()?;

    Ok(())
  }

  fn handle_action(&mut self, action: Action) -> State {
    match action {
      Action::Cycle => self.selected = self.selected.next(),
      Action::Delete => self.apply(Command::Erase),
      Action::Escape => return State::Quit,
      Action::Insert(c) => self.apply(Command::Input(c)),
      Action::Start => {
        if let Err(error) = self.start() {
          self.message = Some(error.to_string());
        }
      }
      Action::Submit => self.apply(Command::Stop),
    }

    State::Continuing
  }

  pub(crate) fn run(&mut self) -> Result {
    terminal::enable_raw_mode()?;

    let result = self.event_loop();

    let restored = terminal::disable_raw_mode();

    let cleared = command!(Clear(ClearType::All), MoveTo(0, 0));

    if let Some(statistics) = &self.statistics {
      println!("{statistics}");
    }

    teardown(result, restored, cleared)
  }

  fn event_loop(&mut self) -> Result {
    self.display()?;

    loop {
      if self.controller.poll_tick().is_some() {
        self.display()?;
      }

      if event::poll(self.timeout())? {
        if let Some(action) = Action::from_event(event::read()?) {
          match self.handle_action(action) {
            State::Quit => break,
            State::Continuing => self.display()?,
          }
        }
      }
    }

    Ok(())
  }

  fn timeout(&self) -> Duration {
    self
      .controller
      .next_tick()
      .map(|deadline| {
        deadline
          .saturating_duration_since(Instant::now())
          .min(POLL_TIMEOUT)
      })
      .unwrap_or(POLL_TIMEOUT)
  }
}

fn teardown(result: Result, restored: io::Result<()>, cleared: io::Result<()>) -> Result {
  result
    .and(restored.map_err(Into::into))
    .and(cleared.map_err(Into::into))
}
