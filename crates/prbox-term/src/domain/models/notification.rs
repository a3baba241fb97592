#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NotificationThread {
    pub title: String,
    pub url: String,
    pub oldest_unread_anchor: String,
}

impl NotificationThread {
    pub fn new(title: &str, url: &str, oldest_unread_anchor: &str) -> NotificationThread {
        return NotificationThread {
            title: title.to_string(),
            url: url.to_string(),
            oldest_unread_anchor: oldest_unread_anchor.to_string(),
        };
    }

    /// URL that lands on the oldest unread item when the thread has one.
    pub fn browser_url(&self) -> String {
        if self.oldest_unread_anchor.is_empty() {
            return self.url.to_string();
        }

        return format!("{}#{}", self.url, self.oldest_unread_anchor);
    }
}
