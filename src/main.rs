// ABOUTME: Main entry point for the log browser TUI application

//! `log-browser` binary: draws the log view and runs the input loop.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, Terminal};
use std::{io, path::PathBuf, time::Duration};

use log_browser::app::{App, EventHandler};
use log_browser::components::LayoutComponent;
use log_browser::config::Config;

/// Tail newline-delimited log frames from a WebSocket endpoint
#[derive(Debug, Parser)]
#[command(name = "log-browser", version, about)]
struct Args {
    /// WebSocket endpoint to read log frames from
    #[arg(long, env = "LOG_BROWSER_URL")]
    url: Option<String>,

    /// Do not connect; only echo lines typed at the prompt
    #[arg(long)]
    offline: bool,

    /// Path to a config file instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?.with_url(args.url);
    config.validate()?;

    setup_logging(&config)?;
    setup_panic_handler();

    let mut app = App::from_config(&config, args.offline);
    let mut layout = LayoutComponent::new();

    let result = run_tui(&mut app, &mut layout, config.tick_rate());
    app.shutdown().await;

    result
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent, tick_rate: Duration) -> Result<()> {
    enable_raw_mode().context("Terminal not compatible")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app, layout, tick_rate);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    layout: &mut LayoutComponent,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(app_event) = EventHandler::handle_key_event(key_event, &app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        app.tick();

        if app.state.should_quit {
            return Ok(());
        }
    }
}

fn setup_logging(config: &Config) -> Result<()> {
    use std::fs::OpenOptions;
    use std::sync::Mutex;
    use tracing_subscriber::prelude::*;

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let log_file = log_dir.join(format!(
        "log-browser-{}.log",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(Mutex::new(file))
                .with_ansi(false) // No ANSI colors in log file
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "log_browser=info".into())
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Restore the terminal before reporting
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
