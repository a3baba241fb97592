use super::NotificationThread;

#[test]
fn it_uses_the_plain_url_without_anchor() {
    let thread = NotificationThread::new("Build failed", "https://github.com/o/r/pull/1", "");
    assert_eq!(thread.browser_url(), "https://github.com/o/r/pull/1");
}

#[test]
fn it_appends_the_unread_anchor() {
    let thread = NotificationThread::new(
        "Review requested",
        "https://github.com/o/r/pull/2",
        "issuecomment-42",
    );
    assert_eq!(
        thread.browser_url(),
        "https://github.com/o/r/pull/2#issuecomment-42"
    );
}
