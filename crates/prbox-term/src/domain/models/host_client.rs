use anyhow::Result;
use async_trait::async_trait;

use super::NotificationThread;

/// Everything the dashboard needs from the machine it runs on.
#[async_trait]
pub trait HostClient: Send + Sync {
    /// Absolute path of the GitHub CLI executable.
    async fn probe_cli(&self) -> Result<String>;
    async fn fetch_notifications(&self, cli_path: &str) -> Result<Vec<NotificationThread>>;
    async fn background_is_dark(&self) -> bool;
    async fn open_url(&self, url: &str) -> Result<()>;
}

pub type HostClientBox = Box<dyn HostClient>;
