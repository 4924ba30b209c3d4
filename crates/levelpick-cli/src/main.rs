//! levelpick - Select Level screen for the terminal
//!
//! Lists custom and bundled games a page at a time. Click a game to pick it,
//! right click to delete it, or go back to the menu. The outcome is printed
//! to stdout once the terminal is restored.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use levelpick_core::{
    constants::app, paths, Config, FsStore, GameListing, GamePages, GameSource, ScreenState,
};

mod tui;

use tui::{CrosstermEvents, LoadGameScreen};

/// levelpick - pick a game to load
#[derive(Parser)]
#[command(name = "levelpick")]
#[command(about = "Browse saved and bundled games and pick one to load", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of player-made games
    #[arg(long)]
    custom_dir: Option<PathBuf>,

    /// Directory of bundled games
    #[arg(long)]
    games_dir: Option<PathBuf>,

    /// Games per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Theme name
    #[arg(short, long)]
    theme: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes
    Themes,

    /// Print the game list page by page
    List,
}

impl Cli {
    /// Config file values with command line overrides applied
    fn resolve_config(&self) -> Result<Config> {
        let path = self.config.clone().unwrap_or_else(paths::config_file);
        let mut config = Config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;

        if let Some(dir) = &self.custom_dir {
            config.custom_games_dir = dir.clone();
        }
        if let Some(dir) = &self.games_dir {
            config.games_dir = dir.clone();
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Log to a file; stdout and stderr belong to the TUI
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = std::fs::File::create(log_dir.join(app::LOG_FILE_NAME)) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

fn print_themes() {
    println!("Available themes ({}):", tui::THEME_REGISTRY.count());
    for (name, theme) in tui::THEME_REGISTRY.list() {
        println!("  {} - {}", name, theme.display_name);
    }
}

fn print_listing(config: &Config) -> Result<()> {
    let listing = GameListing::load(&FsStore, &config.game_dirs())?;
    if listing.is_empty() {
        println!("No games found.");
        return Ok(());
    }

    let pages = GamePages::new(listing.into_entries(), config.page_size);
    for (index, page) in pages.pages().enumerate() {
        println!("Page {}/{}", index + 1, pages.page_count());
        for entry in page {
            let tag = match entry.source {
                GameSource::Custom => "custom",
                GameSource::BuiltIn => "game",
            };
            println!("  [{}] {}", tag, entry.name);
        }
    }
    Ok(())
}

/// Run the screen in the alternate screen and report what the player chose
fn run_screen(config: &Config) -> Result<()> {
    use crossterm::{
        event::EnableMouseCapture,
        execute,
        terminal::{enable_raw_mode, EnterAlternateScreen},
    };
    use ratatui::{backend::CrosstermBackend, Terminal};

    let mut screen = LoadGameScreen::new(Box::new(FsStore), config)?;
    tracing::info!(
        "Using theme: {} ({})",
        screen.theme().display_name,
        screen.theme().name
    );

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = screen.run(&mut terminal, &mut CrosstermEvents::new());
    restore_terminal();
    terminal.show_cursor().ok();
    result?;

    match screen.state() {
        ScreenState::GameChosen => match screen.selected_path() {
            Some(path) => println!("{} {}", ScreenState::GameChosen, path.display()),
            None => println!("{}", ScreenState::Quit),
        },
        state => println!("{}", state),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    if let Some(Commands::Themes) = cli.command {
        print_themes();
        return Ok(());
    }

    let config = cli.resolve_config()?;
    for dir in [&config.custom_games_dir, &config.games_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    match cli.command {
        Some(Commands::List) => print_listing(&config),
        _ => run_screen(&config),
    }
}
