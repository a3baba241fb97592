use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use strum::VariantNames;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::infrastructure::background::ThemeMode;
use crate::infrastructure::github;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn arg_for(key: ConfigKey, help: &str) -> Arg {
    let env = format!("PRBOX_{}", key.to_string().replace('-', "_").to_uppercase());

    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .action(ArgAction::Set)
        .help(format!("{help} [default: {}]", Config::default(key)));
}

fn notification_limit_parser(value: &str) -> Result<String, String> {
    return github::parse_notification_limit(value)
        .map(|limit| limit.to_string())
        .map_err(|err| err.to_string());
}

pub fn build() -> Command {
    return Command::new("prbox")
        .about("Browse your unread GitHub notifications from the terminal.")
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .arg(
            arg_for(ConfigKey::ConfigFile, "Path to configuration file")
                .short('c'),
        )
        .arg(arg_for(
            ConfigKey::GhBinary,
            "Name or path of the GitHub CLI executable.",
        ))
        .arg(
            arg_for(
                ConfigKey::Theme,
                "Color theme. auto follows the terminal background.",
            )
            .value_parser(PossibleValuesParser::new(ThemeMode::VARIANTS.iter().copied())),
        )
        .arg(
            arg_for(
                ConfigKey::NotificationLimit,
                "Maximum number of unread threads to fetch (1-100).",
            )
            .value_parser(notification_limit_parser),
        )
        .arg(arg_for(ConfigKey::LogFile, "File to write logs to."))
        .arg(
            arg_for(ConfigKey::LogLevel, "Minimum log level.")
                .value_parser(PossibleValuesParser::new(LOG_LEVELS)),
        )
        .subcommand(
            Command::new("config")
                .about("Configuration file options.")
                .subcommand_required(true)
                .subcommand(Command::new("default").about("Print the default config.toml.")),
        );
}
