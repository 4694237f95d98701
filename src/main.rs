mod app;
mod controller;
mod domain;
mod input;
mod logging;
mod persistence;
mod store;
mod ticker;
mod ui;
mod view;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use controller::TodoController;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{
    config_file, ensure_data_dir, get_data_dir, init_config, init_local_data_dir, load_config,
    AppConfig, FileStorage,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;
use store::TodoStore;

#[derive(Parser)]
#[command(name = "tend")]
#[command(about = "A small terminal to-do list with inline editing and local persistence", long_about = None)]
struct Cli {
    /// Data directory to use instead of the discovered .tend directory
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tend directory in the current directory
    Init,
    /// Print all todos
    List,
    /// Add a todo without opening the TUI
    Add {
        /// Todo text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = match &cli.dir {
                Some(dir) => ensure_data_dir(dir)?,
                None => {
                    let current_dir =
                        std::env::current_dir().context("Could not determine current directory")?;
                    init_local_data_dir(&current_dir)?
                }
            };
            // An existing config.json under --dir keeps the user's settings
            init_config(config_file(&data_dir))?;
            println!("Initialized tend directory: {}", data_dir.display());
            println!();
            println!("tend will now use this directory for its todos.");
            println!("Run 'tend' to open your list.");
            Ok(())
        }
        Some(Commands::List) => {
            let data_dir = get_data_dir(cli.dir.as_deref())?;
            let (_guard, _config) = init_ambient(&data_dir)?;
            let store = TodoStore::load(Box::new(FileStorage::new(&data_dir)));

            if store.is_empty() {
                println!("{}", view::EMPTY_PLACEHOLDER);
            }
            for (index, record) in store.records().iter().enumerate() {
                let marker = if record.completed { "x" } else { " " };
                println!("{:>3}. [{}] {}", index + 1, marker, record.text);
            }
            Ok(())
        }
        Some(Commands::Add { text }) => {
            let data_dir = get_data_dir(cli.dir.as_deref())?;
            let (_guard, _config) = init_ambient(&data_dir)?;
            let mut store = TodoStore::load(Box::new(FileStorage::new(&data_dir)));

            let text = text.join(" ");
            store
                .add(&text)
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            if store.needs_save() {
                store.save()?;
            }
            println!("{}", controller::ADD_SUCCESS);
            Ok(())
        }
        None => run_tui(cli.dir.as_deref()),
    }
}

/// Create the data directory, start logging and read config.json
fn init_ambient(data_dir: &Path) -> Result<(tracing_appender::non_blocking::WorkerGuard, AppConfig)> {
    ensure_data_dir(data_dir)?;
    let config = load_config(config_file(data_dir))?;
    let guard = logging::init_logging(data_dir, &config.log_filter)?;
    tracing::info!(dir = %data_dir.display(), "using data directory");
    Ok((guard, config))
}

fn run_tui(dir: Option<&Path>) -> Result<()> {
    let data_dir = get_data_dir(dir)?;
    let (_guard, config) = init_ambient(&data_dir)?;
    eprintln!("Using tend directory: {}", data_dir.display());

    let store = TodoStore::load(Box::new(FileStorage::new(&data_dir)));
    let controller = TodoController::new(store, config.message_timeout());
    let mut app = AppState::new(controller);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Last chance for a save that kept failing during the session
    if app.needs_save() {
        if let Err(e) = app.save() {
            tracing::error!(error = %e, "final save failed");
            eprintln!("Error saving todos: {}", e);
        }
    }

    if let Err(err) = &result {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());

        // Retry a save that failed right after a mutation
        if app.needs_save() {
            if let Err(e) = app.save() {
                tracing::warn!(error = %e, "autosave retry failed");
            }
        }
    }
}
