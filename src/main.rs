use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use countryviz::api::CountriesClient;
use countryviz::config::{self, Config};
use countryviz::logging::{self, LogConfig};
use countryviz::model;
use countryviz::services::{self, LoadResult};

/// Country Visualization TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the log file
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Override the country list URL
    #[arg(long)]
    url: Option<String>,
}

mod app;
mod handlers;
mod ui;

pub struct App {
    pub model: model::Model,

    /// Pending startup load; None once delivered (or when never started)
    loader_rx: Option<mpsc::UnboundedReceiver<LoadResult>>,

    /// Cancels the startup load when the view goes away
    cancel: CancellationToken,
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let client = CountriesClient::new(config.api_url.clone(), config.request_timeout())?;
        let cancel = CancellationToken::new();
        let loader_rx = services::spawn_country_loader(client, cancel.clone());

        let mut app = Self::from_model(model::Model::new(config.criteria(), config.vim_mode));
        app.loader_rx = Some(loader_rx);
        app.cancel = cancel;
        Ok(app)
    }

    /// App with no load in flight
    pub(crate) fn from_model(model: model::Model) -> Self {
        Self {
            model,
            loader_rx: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Deliver the startup load result if it has arrived (non-blocking)
    fn poll_loader(&mut self) {
        let Some(rx) = self.loader_rx.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.loader_rx = None;
                handlers::handle_load_result(self, result);
            }
            Err(mpsc::error::TryRecvError::Empty) => {}
            Err(mpsc::error::TryRecvError::Disconnected) => {
                debug!("loader finished without a result");
                self.loader_rx = None;
            }
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) {
        handlers::handle_key(self, key);
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match config::find_config_path(args.config.as_deref())? {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::from_file(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(url) = &args.url {
        config.api_url = url.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(&LogConfig::from_debug_flag(args.debug))?;
    debug!("debug logging enabled");

    let config = load_config(&args)?;

    // Initialize app (starts the background fetch)
    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Tear down the view before the runtime so an in-flight load is cancelled
    drop(app);

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            app.cancel.cancel();
            break;
        }

        app.poll_loader();

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
