use anyhow::bail;
use anyhow::Result;
use crossterm::event::Event as CrosstermEvent;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::domain::models::Event;

#[cfg(test)]
#[path = "events_test.rs"]
mod tests;

/// Merges terminal input and action results into a single ordered stream of
/// [`Event`]s for the UI loop.
pub struct EventsService {
    crossterm_events: EventStream,
    events: mpsc::UnboundedReceiver<Event>,
}

pub fn handle_crossterm(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Resize(width, height) => {
            return Some(Event::Resize(width, height));
        }
        CrosstermEvent::Key(keyevent) => {
            if keyevent.kind != KeyEventKind::Press {
                return None;
            }
            return Some(handle_key(keyevent));
        }
        _ => return None,
    }
}

fn handle_key(keyevent: KeyEvent) -> Event {
    let ctrl = keyevent.modifiers.contains(KeyModifiers::CONTROL);

    match keyevent.code {
        KeyCode::Char('c') if ctrl => Event::KeyboardQuit,
        KeyCode::Char('q') | KeyCode::Esc => Event::KeyboardQuit,
        KeyCode::Up | KeyCode::Char('k') => Event::KeyboardUp,
        KeyCode::Down | KeyCode::Char('j') => Event::KeyboardDown,
        KeyCode::Home | KeyCode::Char('g') => Event::KeyboardHome,
        KeyCode::End | KeyCode::Char('G') => Event::KeyboardEnd,
        KeyCode::Enter => Event::KeyboardEnter,
        KeyCode::Char('r') => Event::KeyboardRefresh,
        _ => Event::Unhandled,
    }
}

impl EventsService {
    pub fn new(events: mpsc::UnboundedReceiver<Event>) -> EventsService {
        return EventsService {
            crossterm_events: EventStream::new(),
            events,
        };
    }

    pub async fn next(&mut self) -> Result<Event> {
        loop {
            let evt = tokio::select! {
                event = self.events.recv() => match event {
                    Some(event) => Some(event),
                    None => bail!("action results channel closed"),
                },
                event = self.crossterm_events.next() => match event {
                    Some(Ok(input)) => handle_crossterm(input),
                    Some(Err(err)) => {
                        tracing::warn!(error = ?err, "failed to read terminal event");
                        None
                    }
                    None => bail!("terminal event stream closed"),
                },
            };

            if let Some(event) = evt {
                return Ok(event);
            }
        }
    }
}
