//! Quote Wizard - terminal survey and quotation form
//!
//! A Ratatui-based multi-step form that validates each step and posts the
//! completed survey to a webhook.

mod app;
mod config;
mod schema;
mod state;
mod ui;
mod webhook;

use anyhow::{Context, Result};
use app::App;
use config::WizardConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{
    fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};
use webhook::WebhookClient;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quote_wizard=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    let config = WizardConfig::load()?;
    let variant = config.variant();
    let client = WebhookClient::new(config.webhook_url(), config.request_timeout())
        .context("Failed to build webhook client")?;
    tracing::info!(
        variant = variant.name(),
        endpoint = client.endpoint(),
        "Starting wizard"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(variant, Arc::new(client));
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log sink for the session: the data-dir log file, or nothing at all.
/// Output must not reach the terminal while the UI owns it.
fn log_writer() -> BoxMakeWriter {
    match WizardConfig::log_path().map(|path| config::open_log_file(&path)) {
        Some(Ok(file)) => BoxMakeWriter::new(Mutex::new(file)),
        Some(Err(err)) => {
            eprintln!("Logging disabled: {err:#}");
            BoxMakeWriter::new(io::sink)
        }
        None => BoxMakeWriter::new(io::sink),
    }
}

/// Draw/input loop. Runs on the runtime thread; the webhook POST is a
/// spawned task picked up by `poll_submission`.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit();
                    } else {
                        app.handle_key(key);
                    }
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
