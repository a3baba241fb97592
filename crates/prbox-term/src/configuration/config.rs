#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::collections::HashMap;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    GhBinary,
    LogFile,
    LogLevel,
    NotificationLimit,
    Theme,
}

#[derive(Debug, Clone)]
pub struct Config {
    values: HashMap<ConfigKey, String>,
}

fn app_dir(base: Option<path::PathBuf>) -> path::PathBuf {
    return base
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| path::PathBuf::from("."))
        .join("prbox");
}

impl Config {
    pub fn get(&self, key: ConfigKey) -> String {
        if let Some(val) = self.values.get(&key) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) {
        self.values.insert(key, value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        #[cfg(target_os = "macos")]
        let config_path = app_dir(dirs::home_dir().map(|home| home.join(".config")))
            .join("config.toml");

        #[cfg(not(target_os = "macos"))]
        let config_path = app_dir(dirs::config_dir()).join("config.toml");

        let log_path = app_dir(dirs::cache_dir()).join("prbox.log");

        let res = match key {
            ConfigKey::GhBinary => "gh".to_string(),
            ConfigKey::LogLevel => "info".to_string(),
            ConfigKey::NotificationLimit => "50".to_string(),
            ConfigKey::Theme => "auto".to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::LogFile => log_path.to_string_lossy().to_string(),
        };

        return res;
    }

    pub fn defaults() -> Config {
        let mut config = Config {
            values: HashMap::new(),
        };
        for key in ConfigKey::iter() {
            config.set(key, &Config::default(key));
        }

        return config;
    }

    pub async fn load(cmd: &Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<Config> {
        let mut config = Config::defaults();

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        config.set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            config.merge_toml(cmd, &toml_str)?;
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    config.set(key, val)
                }
            }
        }

        tracing::debug!(
            gh_binary = %config.get(ConfigKey::GhBinary),
            theme = %config.get(ConfigKey::Theme),
            notification_limit = %config.get(ConfigKey::NotificationLimit),
            "config"
        );

        return Ok(config);
    }

    fn merge_toml(&mut self, cmd: &Command, toml_str: &str) -> Result<()> {
        let doc = toml_str.parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            if let Some(val) = doc.get(&key.to_string()) {
                // Use clap value parsers to do validation.
                let possible_values = possible_values(cmd, key);

                if let Some(val_int) = val.as_integer() {
                    self.set(key, &val_int.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    self.set(key, val_str);
                } else {
                    bail!(format!(
                        "config.toml has an invalid value for key '{key}': expected a string or integer"
                    ));
                }
            }
        }

        return Ok(());
    }

    pub fn serialize_default(cmd: &Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let possible = possible_values(cmd, key);
                if !possible.is_empty() {
                    description = format!("{description} [possible values: {}]", possible.join(", "));
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{}\"", val.replace('\\', "\\\\"));
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}

fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
    if let Some(arg) = cmd
        .get_arguments()
        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
    {
        return arg
            .get_possible_values()
            .iter()
            .map(|e| return e.get_name().to_string())
            .collect::<Vec<String>>();
    }

    return vec![];
}
