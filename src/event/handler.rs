//! Event handling logic for the gauge dashboard.
//!
//! This module turns terminal input into [`Event`]s and maps those events to
//! the actions the application loop performs.

use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use crossterm::event::{EventStream, KeyCode, KeyEvent, KeyModifiers};
use futures::{future, stream, Stream, StreamExt};
use tokio_stream::wrappers::IntervalStream;
use tracing::warn;

use super::Event;

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Redraw and keep running
    Continue,
    /// Exit the application
    Exit,
    /// Pause or resume the jobs
    TogglePause,
    /// Run every job again from zero
    Restart,
    /// Show or hide the help overlay
    ToggleHelp,
    /// Event was ignored
    Ignored,
}

/// Stream of application events.
pub struct EventHandler {
    events: Pin<Box<dyn Stream<Item = Event>>>,
}

impl EventHandler {
    /// Reads the terminal and ticks every `tick_rate`. Must be called within a tokio runtime.
    pub fn new(tick_rate: Duration) -> Self {
        let terminal = EventStream::new().filter_map(|read| {
            future::ready(match read {
                Ok(event) => Event::from_terminal(event),
                Err(err) => {
                    warn!(%err, "failed to read terminal event");
                    None
                }
            })
        });
        let ticks = IntervalStream::new(tokio::time::interval(tick_rate)).map(|_| Event::Tick);

        Self::from_stream(stream::select(terminal, ticks))
    }

    /// Wraps an arbitrary event source.
    pub fn from_stream(events: impl Stream<Item = Event> + 'static) -> Self {
        Self {
            events: Box::pin(events),
        }
    }

    /// Maps an event to what the application should do about it.
    pub fn handle(&self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) => Self::handle_key_event(key),
            Event::Resize(..) | Event::Tick => EventResult::Continue,
        }
    }

    fn handle_key_event(key: &KeyEvent) -> EventResult {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                EventResult::Exit
            }
            KeyCode::Char('q') | KeyCode::Esc => EventResult::Exit,
            KeyCode::Char('p') => EventResult::TogglePause,
            KeyCode::Char('r') => EventResult::Restart,
            KeyCode::Char('?') | KeyCode::F(1) => EventResult::ToggleHelp,
            _ => EventResult::Ignored,
        }
    }
}

impl Stream for EventHandler {
    type Item = Event;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.events.as_mut().poll_next(cx)
    }
}
