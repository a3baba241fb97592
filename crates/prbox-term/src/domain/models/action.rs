use super::NotificationThread;

/// Side effects requested by the fold. Each one is executed out of line by the
/// actions service and, apart from `OpenInBrowser` and `Quit`, resolves to
/// exactly one [`super::Event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ProbeCli,
    ObserveBackground,
    FetchNotifications(String),
    OpenInBrowser(NotificationThread),
    Quit,
}
