use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::NotificationThread;
use crate::domain::models::Screen;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

/// The single snapshot the UI loop owns. Every event produces a fresh value
/// through [`AppState::update`]; nothing else writes to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppState {
    pub cli_found: bool,
    pub cli_path: String,
    pub dark_mode: bool,
    pub screen: Screen,
    pub active_index: Option<usize>,
    pub loading_notifications: bool,
    pub notifications: Vec<NotificationThread>,
    pub notifications_error: Option<String>,
}

impl AppState {
    pub fn init() -> (AppState, Vec<Action>) {
        return (
            AppState::default(),
            vec![Action::ProbeCli, Action::ObserveBackground],
        );
    }

    pub fn update(&self, event: Event) -> (AppState, Vec<Action>) {
        let mut next = self.clone();
        let mut actions = vec![];

        match event {
            Event::Resize(width, height) => {
                next.screen = Screen::new(width, height);
            }
            Event::CliFound(path) => {
                next.cli_found = true;
                next.cli_path = path;
                if let Some(action) = next.begin_fetch() {
                    actions.push(action);
                }
            }
            Event::CliNotFound(_) => {
                next.cli_found = false;
            }
            Event::NotificationsLoaded(notifications) => {
                next.loading_notifications = false;
                next.active_index = if notifications.is_empty() {
                    None
                } else {
                    Some(0)
                };
                next.notifications = notifications;
            }
            Event::NotificationsFailed(err) => {
                next.loading_notifications = false;
                next.notifications_error = Some(err);
            }
            Event::BackgroundColorObserved(is_dark) => {
                next.dark_mode = is_dark;
            }
            Event::KeyboardUp => {
                if let Some(index) = next.active_index {
                    if index > 0 {
                        next.active_index = Some(index - 1);
                    }
                }
            }
            Event::KeyboardDown => {
                if let Some(index) = next.active_index {
                    if index + 1 < next.notifications.len() {
                        next.active_index = Some(index + 1);
                    }
                }
            }
            Event::KeyboardHome => {
                if !next.notifications.is_empty() {
                    next.active_index = Some(0);
                }
            }
            Event::KeyboardEnd => {
                if !next.notifications.is_empty() {
                    next.active_index = Some(next.notifications.len() - 1);
                }
            }
            Event::KeyboardEnter => {
                if let Some(notification) = next.active_notification() {
                    actions.push(Action::OpenInBrowser(notification.clone()));
                }
            }
            Event::KeyboardRefresh => {
                if next.cli_found {
                    if let Some(action) = next.begin_fetch() {
                        next.notifications_error = None;
                        actions.push(action);
                    }
                }
            }
            Event::KeyboardQuit => {
                actions.push(Action::Quit);
            }
            Event::Unhandled => {}
        }

        return (next, actions);
    }

    pub fn active_notification(&self) -> Option<&NotificationThread> {
        return self.active_index.and_then(|idx| self.notifications.get(idx));
    }

    // Only one fetch may be in flight at a time.
    fn begin_fetch(&mut self) -> Option<Action> {
        if self.loading_notifications {
            return None;
        }

        self.loading_notifications = true;
        return Some(Action::FetchNotifications(self.cli_path.to_string()));
    }
}
