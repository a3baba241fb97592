use super::NotificationThread;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Resize(u16, u16),
    CliFound(String),
    CliNotFound(String),
    NotificationsLoaded(Vec<NotificationThread>),
    NotificationsFailed(String),
    BackgroundColorObserved(bool),
    KeyboardUp,
    KeyboardDown,
    KeyboardHome,
    KeyboardEnd,
    KeyboardEnter,
    KeyboardRefresh,
    KeyboardQuit,
    Unhandled,
}
