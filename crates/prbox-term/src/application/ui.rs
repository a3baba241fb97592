use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use super::view;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;

/// Forwards side effects to the actions service. Returns `false` once the fold
/// asked the loop to stop.
pub fn dispatch_actions(actions: Vec<Action>, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
    for action in actions {
        if action == Action::Quit {
            tx.send(Action::Quit)?;
            return Ok(false);
        }
        tx.send(action)?;
    }

    return Ok(true);
}

pub async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    let (state, actions) = AppState::init();
    let size = terminal.size()?;
    let (mut state, _) = state.update(Event::Resize(size.width, size.height));
    dispatch_actions(actions, &tx)?;

    loop {
        terminal.draw(|frame| view::render(frame, &state))?;

        let event = events.next().await?;
        tracing::trace!(event = ?event, "folding event");
        let (next, actions) = state.update(event);
        state = next;

        if !dispatch_actions(actions, &tx)? {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::NotificationThread;

    #[test]
    fn test_dispatch_forwards_actions_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let notification = NotificationThread::new("Build failed", "https://x/1", "");

        let keep_running = dispatch_actions(
            vec![
                Action::FetchNotifications("gh".to_string()),
                Action::OpenInBrowser(notification.clone()),
            ],
            &tx,
        )
        .unwrap();

        assert!(keep_running);
        assert_eq!(
            rx.try_recv().unwrap(),
            Action::FetchNotifications("gh".to_string())
        );
        assert_eq!(rx.try_recv().unwrap(), Action::OpenInBrowser(notification));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_stops_on_quit() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        let keep_running =
            dispatch_actions(vec![Action::Quit, Action::ProbeCli], &tx).unwrap();

        assert!(!keep_running);
        assert_eq!(rx.try_recv().unwrap(), Action::Quit);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dispatch_fails_when_the_service_is_gone() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        assert!(dispatch_actions(vec![Action::ProbeCli], &tx).is_err());
    }
}
