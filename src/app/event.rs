//! Terminal event abstraction.
//!
//! Raw crossterm events are translated into the closed [`Input`] set here,
//! at the I/O boundary, so the state machine never inspects key codes.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::config::{Action, AppConfig};

/// Abstract selector input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Cancel,
    Confirm,
    MoveUp,
    MoveDown,
    /// Anything the selector doesn't react to.
    Other,
}

impl From<Action> for Input {
    fn from(action: Action) -> Self {
        match action {
            Action::Cancel => Input::Cancel,
            Action::Confirm => Input::Confirm,
            Action::MoveUp => Input::MoveUp,
            Action::MoveDown => Input::MoveDown,
        }
    }
}

/// Map a raw terminal event to an [`Input`].
pub fn translate(config: &AppConfig, event: &Event) -> Input {
    let Event::Key(key) = event else {
        return Input::Other;
    };
    // Windows reports releases too; only presses count.
    if key.kind != KeyEventKind::Press {
        return Input::Other;
    }
    // Ctrl+c always quits, even if the user rebound it.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Input::Cancel;
    }
    config.match_key(*key).map(Input::from).unwrap_or(Input::Other)
}

/// A blocking source of terminal events.
pub trait EventSource {
    fn read(&mut self) -> io::Result<Event>;
}

/// Reads events straight from the terminal, blocking until one arrives.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}
