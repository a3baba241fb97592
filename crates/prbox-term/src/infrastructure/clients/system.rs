use anyhow::Context;
use anyhow::Result;
use async_trait::async_trait;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::HostClient;
use crate::domain::models::NotificationThread;
use crate::infrastructure::background;
use crate::infrastructure::background::ThemeMode;
use crate::infrastructure::browser::UrlOpener;
use crate::infrastructure::github;
use crate::infrastructure::github::GhCliClient;

/// [`HostClient`] backed by the real machine: `which` for the CLI lookup, the
/// `gh` GraphQL transport, the OS URL opener and the `COLORFGBG` hint.
pub struct SystemHost {
    gh_binary: String,
    notification_limit: u32,
    theme: ThemeMode,
    opener: Option<UrlOpener>,
}

impl SystemHost {
    pub fn new(gh_binary: &str, notification_limit: u32, theme: ThemeMode) -> SystemHost {
        let opener = match UrlOpener::system() {
            Ok(opener) => Some(opener),
            Err(err) => {
                tracing::warn!(error = ?err, "no url opener for this platform");
                None
            }
        };

        return SystemHost {
            gh_binary: gh_binary.to_string(),
            notification_limit,
            theme,
            opener,
        };
    }

    pub fn from_config(config: &Config) -> Result<SystemHost> {
        let notification_limit =
            github::parse_notification_limit(&config.get(ConfigKey::NotificationLimit))?;
        let theme = config
            .get(ConfigKey::Theme)
            .parse::<ThemeMode>()
            .context("theme must be one of auto, dark, light")?;

        return Ok(SystemHost::new(
            &config.get(ConfigKey::GhBinary),
            notification_limit,
            theme,
        ));
    }
}

#[async_trait]
impl HostClient for SystemHost {
    async fn probe_cli(&self) -> Result<String> {
        let binary = self.gh_binary.to_string();
        let path = tokio::task::spawn_blocking(move || GhCliClient::locate(&binary))
            .await?
            .with_context(|| format!("cannot find {} on the search path", self.gh_binary))?;

        return Ok(path);
    }

    async fn fetch_notifications(&self, cli_path: &str) -> Result<Vec<NotificationThread>> {
        let client = GhCliClient::new(cli_path);
        let notifications = github::fetch_notifications(&client, self.notification_limit).await?;
        return Ok(notifications);
    }

    async fn background_is_dark(&self) -> bool {
        return background::detect_dark_mode(self.theme);
    }

    async fn open_url(&self, url: &str) -> Result<()> {
        match &self.opener {
            Some(opener) => opener.open(url).await,
            None => anyhow::bail!("opening URLs is unsupported on this platform"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_cli_is_reported() {
        let host = SystemHost::new("prbox-definitely-not-installed", 50, ThemeMode::Auto);
        let err = host.probe_cli().await.unwrap_err();
        assert!(format!("{err:#}")
            .starts_with("cannot find prbox-definitely-not-installed on the search path"));
    }

    #[tokio::test]
    async fn test_configured_theme_overrides_environment() {
        let host = SystemHost::new("gh", 50, ThemeMode::Light);
        assert!(!host.background_is_dark().await);

        let host = SystemHost::new("gh", 50, ThemeMode::Dark);
        assert!(host.background_is_dark().await);
    }

    #[test]
    fn test_from_config_rejects_bad_limits() {
        let mut config = Config::defaults();
        config.set(ConfigKey::NotificationLimit, "many");
        assert!(SystemHost::from_config(&config).is_err());

        config.set(ConfigKey::NotificationLimit, "0");
        let err = SystemHost::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("between 1 and 100"));

        config.set(ConfigKey::NotificationLimit, "101");
        assert!(SystemHost::from_config(&config).is_err());

        config.set(ConfigKey::NotificationLimit, "4000000000");
        assert!(SystemHost::from_config(&config).is_err());

        config.set(ConfigKey::NotificationLimit, "100");
        assert_eq!(SystemHost::from_config(&config).unwrap().notification_limit, 100);

        config.set(ConfigKey::NotificationLimit, "20");
        let host = SystemHost::from_config(&config).unwrap();
        assert_eq!(host.notification_limit, 20);
        assert_eq!(host.gh_binary, "gh");
    }
}
