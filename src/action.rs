use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Cycle,
  Delete,
  Escape,
  Insert(char),
  Start,
  Submit,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind != KeyEventKind::Release => {
        if key.modifiers.contains(KeyModifiers::CONTROL)
          && !key.modifiers.contains(KeyModifiers::ALT)
        {
          return match key.code {
            KeyCode::Char('c') => Some(Self::Escape),
            KeyCode::Char('n') => Some(Self::Start),
            _ => None,
          };
        }

        match key.code {
          KeyCode::Backspace => Some(Self::Delete),
          KeyCode::Char(c) => Some(Self::Insert(c)),
          KeyCode::Enter => Some(Self::Submit),
          KeyCode::Esc => Some(Self::Escape),
          KeyCode::Tab => Some(Self::Cycle),
          _ => None,
        }
      }
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    crossterm::event::{KeyEvent, KeyEventState},
  };

  fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent {
      code,
      modifiers,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    })
  }

  #[test]
  fn from_event_backspace() {
    assert_eq!(
      Action::from_event(key(KeyCode::Backspace, KeyModifiers::NONE)),
      Some(Action::Delete)
    );
  }

  #[test]
  fn from_event_char() {
    assert_eq!(
      Action::from_event(key(KeyCode::Char('a'), KeyModifiers::NONE)),
      Some(Action::Insert('a'))
    );
  }

  #[test]
  fn from_event_shifted_char() {
    assert_eq!(
      Action::from_event(key(KeyCode::Char('T'), KeyModifiers::SHIFT)),
      Some(Action::Insert('T'))
    );
  }

  #[test]
  fn from_event_enter() {
    assert_eq!(
      Action::from_event(key(KeyCode::Enter, KeyModifiers::NONE)),
      Some(Action::Submit)
    );
  }

  #[test]
  fn from_event_tab() {
    assert_eq!(
      Action::from_event(key(KeyCode::Tab, KeyModifiers::NONE)),
      Some(Action::Cycle)
    );
  }

  #[test]
  fn from_event_escape() {
    assert_eq!(
      Action::from_event(key(KeyCode::Esc, KeyModifiers::NONE)),
      Some(Action::Escape)
    );
  }

  #[test]
  fn from_event_control() {
    assert_eq!(
      Action::from_event(key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
      Some(Action::Start)
    );
    assert_eq!(
      Action::from_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
      Some(Action::Escape)
    );
    assert_eq!(
      Action::from_event(key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
      None
    );
  }

  #[test]
  fn from_event_alt_gr_char() {
    assert_eq!(
      Action::from_event(key(
        KeyCode::Char('@'),
        KeyModifiers::CONTROL | KeyModifiers::ALT
      )),
      Some(Action::Insert('@'))
    );
  }

  #[test]
  fn from_event_release_ignored() {
    assert_eq!(
      Action::from_event(Event::Key(KeyEvent {
        code: KeyCode::Char('a'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
      })),
      None
    );
  }

  #[test]
  fn from_event_unsupported_key() {
    assert_eq!(
      Action::from_event(key(KeyCode::Home, KeyModifiers::NONE)),
      None
    );
  }

  #[test]
  fn from_event_non_key_event() {
    assert_eq!(
      Action::from_event(Event::Mouse(crossterm::event::MouseEvent {
        kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
      })),
      None
    );
  }
}
