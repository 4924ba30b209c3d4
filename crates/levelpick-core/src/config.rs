//! Screen configuration
//!
//! Read from `config.toml` in the config directory. Every field is optional:
//!
//! ```toml
//! custom_games_dir = "/home/me/.local/share/levelpick/custom_games"
//! games_dir = "/usr/share/mygame/games"
//! page_size = 8
//! theme = "dusk"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::constants::{app, listing};
use crate::error::{LibraryError, Result};
use crate::library::GameDirs;
use crate::paths;

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of player-made games, listed first
    pub custom_games_dir: PathBuf,
    /// Directory of bundled games, listed after the custom ones
    pub games_dir: PathBuf,
    /// Games per page
    pub page_size: usize,
    /// Theme name
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            custom_games_dir: paths::custom_games_dir(),
            games_dir: paths::games_dir(),
            page_size: listing::PAGE_SIZE,
            theme: app::DEFAULT_THEME.to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&raw)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the screen cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(LibraryError::Config(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The two game directories in listing order
    pub fn game_dirs(&self) -> GameDirs {
        GameDirs {
            custom: self.custom_games_dir.clone(),
            builtin: self.games_dir.clone(),
        }
    }
}
