use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::HostClientBox;

/// Executes a single action against the host and returns the event it resolves
/// to. Opening a browser never produces an event.
pub async fn run_action(host: &HostClientBox, action: Action) -> Option<Event> {
    match action {
        Action::ProbeCli => match host.probe_cli().await {
            Ok(path) => {
                tracing::debug!(path = %path, "found github cli");
                return Some(Event::CliFound(path));
            }
            Err(err) => {
                tracing::error!(error = ?err, "github cli is not installed");
                return Some(Event::CliNotFound(format!("{err:#}")));
            }
        },
        Action::ObserveBackground => {
            return Some(Event::BackgroundColorObserved(
                host.background_is_dark().await,
            ));
        }
        Action::FetchNotifications(cli_path) => {
            match host.fetch_notifications(&cli_path).await {
                Ok(notifications) => {
                    tracing::debug!(count = notifications.len(), "loaded notifications");
                    return Some(Event::NotificationsLoaded(notifications));
                }
                Err(err) => {
                    tracing::error!(error = ?err, "failed to load notifications");
                    return Some(Event::NotificationsFailed(format!("{err:#}")));
                }
            }
        }
        Action::OpenInBrowser(notification) => {
            let url = notification.browser_url();
            if let Err(err) = host.open_url(&url).await {
                tracing::warn!(error = ?err, url = %url, "failed to open browser");
            }
            return None;
        }
        Action::Quit => {
            return None;
        }
    }
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        host: HostClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let host_arc = Arc::new(host);

        while let Some(action) = rx.recv().await {
            if action == Action::Quit {
                break;
            }

            let worker_host = host_arc.clone();
            let worker_event_tx = event_tx.clone();
            tokio::spawn(async move {
                if let Some(event) = run_action(&worker_host, action).await {
                    // The UI may already be gone during shutdown.
                    let _ = worker_event_tx.send(event);
                }
            });
        }

        Ok(())
    }
}
