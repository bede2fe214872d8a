mod api;
mod app;
mod fetch;
mod ui;
mod view;

use app::{App, Message};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

/// TUI client for a movie recommendation web service
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the recommendation server
    #[arg(short, long)]
    server: Option<String>,
}

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const ENV_SERVER: &str = "MOVIE_EXPLORER_SERVER";
const ENV_LOG_FILE: &str = "MOVIE_EXPLORER_LOG";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_logging();

    let server = cli
        .server
        .or_else(|| std::env::var(ENV_SERVER).ok())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
    tracing::info!(%server, "starting");

    let client = api::ApiClient::new(&server);
    let (mut app, cmd_rx) = App::with_channels();
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
    tokio::spawn(fetch::run(client, cmd_rx, msg_tx));

    app.status_msg = format!("Server: {}", server);

    // Init terminal
    let mut terminal = ratatui::init();

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut msg_rx).await;

    // Restore terminal
    ratatui::restore();

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// File logging, enabled only when RUST_LOG is set. The terminal owns stderr
/// while the UI runs, so lines go to MOVIE_EXPLORER_LOG instead.
fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        return;
    }
    let path = std::env::var(ENV_LOG_FILE).unwrap_or_else(|_| "movie-explorer.log".to_string());
    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {}", path, e);
        }
    }
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    msg_rx: &mut mpsc::UnboundedReceiver<Message>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Apply any fetch results that landed since the last frame
        while let Ok(msg) = msg_rx.try_recv() {
            app.handle_message(msg);
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if crossterm::event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                app.handle_key(key);
            }
        }
    }
}
