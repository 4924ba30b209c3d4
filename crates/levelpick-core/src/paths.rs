//! Well-known filesystem locations

use std::path::PathBuf;

use crate::constants::{app, listing};

/// Base directory for a platform dir, falling back to the current directory
fn app_dir(base: Option<PathBuf>) -> PathBuf {
    base.unwrap_or_else(|| PathBuf::from(".")).join(app::APP_DIR_NAME)
}

/// Config directory (~/.config/levelpick on Linux)
pub fn config_dir() -> PathBuf {
    app_dir(dirs::config_dir())
}

/// Default config file path
pub fn config_file() -> PathBuf {
    config_dir().join(app::CONFIG_FILE_NAME)
}

/// Data directory holding both game directories
pub fn data_dir() -> PathBuf {
    app_dir(dirs::data_dir())
}

/// Default directory for player-made games
pub fn custom_games_dir() -> PathBuf {
    data_dir().join(listing::CUSTOM_GAMES_DIR_NAME)
}

/// Default directory for bundled games
pub fn games_dir() -> PathBuf {
    data_dir().join(listing::GAMES_DIR_NAME)
}

/// Log directory
pub fn logs_dir() -> PathBuf {
    app_dir(dirs::cache_dir()).join("logs")
}
