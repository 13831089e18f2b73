//! Event handling for the gauge dashboard.
//!
//! Terminal input and a periodic redraw tick are merged into a single stream
//! of [`Event`]s that the application loop consumes.

pub mod handler;

pub use handler::{EventHandler, EventResult};

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Default redraw interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(100);

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Regular tick event, triggers a redraw
    Tick,
}

impl Event {
    /// Maps a terminal event, dropping the ones the dashboard ignores.
    pub fn from_terminal(event: CrosstermEvent) -> Option<Self> {
        match event {
            // Key releases are reported on some platforms, act on presses only.
            CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            _ => None,
        }
    }
}
