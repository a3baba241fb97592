use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use anyhow::Result;
use crossterm::cursor;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use prbox_term::application::cli;
use prbox_term::{
    destruct_terminal_for_panic, start_loop, ActionsService, Action, Config, ConfigKey, Event,
    HostClientBox, SystemHost,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tokio::task;
use tracing_appender::non_blocking::WorkerGuard;

/// Logs go to a file; the terminal belongs to the UI.
fn init_tracing(config: &Config) -> Result<WorkerGuard> {
    let log_file = PathBuf::from(config.get(ConfigKey::LogFile));
    let level = tracing::Level::from_str(&config.get(ConfigKey::LogLevel))
        .context("invalid log-level")?;

    let directory = log_file
        .parent()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = log_file
        .file_name()
        .context("log-file must name a file")?
        .to_os_string();
    std::fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(writer)
        .init();

    Ok(guard)
}

/// Start the dashboard with the given host integration.
async fn start_ui(host: HostClientBox) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, event_rx) = mpsc::unbounded_channel::<Event>();

    let mut background_futures = task::JoinSet::new();
    background_futures
        .spawn(async move { ActionsService::start(host, event_tx, &mut action_rx).await });

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    let result = tokio::select!(
        res = background_futures.join_next() => match res {
            Some(Ok(res)) => res,
            Some(Err(err)) => Err(err.into()),
            None => Ok(()),
        },
        res = start_loop(&mut terminal, action_tx, event_rx) => res,
    );

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    let _ = crossterm::execute!(io::stdout(), cursor::Show);

    background_futures.abort_all();
    result
}

#[tokio::main]
async fn main() -> Result<()> {
    let cmd = cli::build();
    let matches = cmd.clone().get_matches();

    if let Some(("config", sub)) = matches.subcommand() {
        if sub.subcommand_name() == Some("default") {
            println!("{}", Config::serialize_default(&cmd));
        }
        return Ok(());
    }

    let config = Config::load(&cmd, vec![&matches]).await?;
    let _guard = init_tracing(&config)?;
    let host = Box::new(SystemHost::from_config(&config)?);

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting prbox");
    let result = start_ui(host).await;
    if let Err(err) = &result {
        tracing::error!(error = ?err, "prbox exited with an error");
        destruct_terminal_for_panic();
    }

    result
}
