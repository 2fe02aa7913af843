//! Input events understood by the wizard, and their crossterm translation

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Logical key the wizard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Any printable character
    Char(char),
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    /// Unconditional cancellation
    Quit,
}

/// One event from the outer event source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    Key(Key),
    Resize { width: u16 },
}

impl From<Key> for WizardEvent {
    fn from(key: Key) -> Self {
        WizardEvent::Key(key)
    }
}

impl Key {
    /// Translate a crossterm key event.
    ///
    /// Esc and Ctrl+C cancel. A bare `q` is an ordinary character because
    /// every screen accepts typed text (list filters, URIs). Releases and
    /// unmapped keys return `None`.
    pub fn from_crossterm(key: KeyEvent) -> Option<Key> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Key::Quit),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Esc => Some(Key::Quit),
            KeyCode::Enter => Some(Key::Enter),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Home => Some(Key::Home),
            KeyCode::End => Some(Key::End),
            KeyCode::Char(c) if !c.is_control() => Some(Key::Char(c)),
            _ => None,
        }
    }
}

impl WizardEvent {
    pub fn from_crossterm(event: Event) -> Option<WizardEvent> {
        match event {
            Event::Key(key) => Key::from_crossterm(key).map(WizardEvent::Key),
            Event::Resize(width, _) => Some(WizardEvent::Resize { width }),
            _ => None,
        }
    }
}
