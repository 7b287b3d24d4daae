// services/farm-dash/src/main.rs
//
// Terminal dashboard for farm operations: live weather and sensor data,
// crop and risk panels, an assistant chat and data export.
//
// Run with: cargo run --bin farm-dash -- --refresh-secs 10

use std::fs::OpenOptions;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use farmkit::config::{load_config, DashboardConfig, ObservabilityConfig};
use farmkit::theme::Theme;
use farmkit::Session;
use ratatui::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod handlers;
mod ui;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "farm-dash")]
#[command(about = "Terminal dashboard for farm operations")]
#[command(version)]
struct Args {
    /// YAML configuration file
    #[arg(long, short, env = "FARM_DASH_CONFIG")]
    config: Option<String>,

    /// Seconds between weather / sensor refreshes
    #[arg(long)]
    refresh_secs: Option<u64>,

    /// Directory exports are written to
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Log file (the terminal is taken by the dashboard)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start in the dark theme
    #[arg(long)]
    dark: bool,
}

impl Args {
    fn apply(&self, config: &mut DashboardConfig) {
        if let Some(secs) = self.refresh_secs {
            config.refresh.interval_secs = secs;
        }
        if let Some(dir) = &self.export_dir {
            config.export.directory = dir.clone();
        }
        if let Some(file) = &self.log_file {
            config.observability.log_file = file.clone();
        }
    }
}

/// Idle wait between input polls when no timer event is pending
const INPUT_POLL: Duration = Duration::from_millis(50);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply(&mut config);

    init_tracing(&config.observability)?;
    info!(
        "Starting farm-dash for {} (refresh every {}s)",
        config.farm.farm_id,
        config.refresh.interval().as_secs()
    );

    let mut session = Session::start(&config);
    if args.dark {
        session.dashboard.theme = Theme::Dark;
    }
    let mut app = App::new(session, config.export.directory.clone());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    app.session.shutdown();
    info!("farm-dash exited");
    result
}

fn init_tracing(observability: &ObservabilityConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&observability.log_file)
        .with_context(|| format!("Failed to open log file {}", observability.log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("farm_dash={0},farmkit={0}", observability.log_level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Drain pending input without blocking the timers
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handlers::handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            Some(event) = app.session.next_event() => app.session.apply(event),
            _ = tokio::time::sleep(INPUT_POLL) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_override_config() {
        let args = Args::parse_from([
            "farm-dash",
            "--refresh-secs",
            "5",
            "--export-dir",
            "x",
            "--log-file",
            "dash.log",
        ]);
        let mut config = DashboardConfig::default();

        args.apply(&mut config);

        assert_eq!(config.refresh.interval_secs, 5);
        assert_eq!(config.export.directory, PathBuf::from("x"));
        assert_eq!(config.observability.log_file, PathBuf::from("dash.log"));
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let args = Args::parse_from(["farm-dash"]);
        let mut config = DashboardConfig::default();
        config.refresh.interval_secs = 9;

        args.apply(&mut config);

        assert_eq!(config.refresh.interval_secs, 9);
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert!(!args.dark);
    }
}
