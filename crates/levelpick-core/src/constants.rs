//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

/// Listing configuration
pub mod listing {
    /// Games shown per page
    pub const PAGE_SIZE: usize = 8;

    /// Subdirectory holding player-made games
    pub const CUSTOM_GAMES_DIR_NAME: &str = "custom_games";

    /// Subdirectory holding games shipped with the game
    pub const GAMES_DIR_NAME: &str = "games";
}

/// App configuration
pub mod app {
    /// Directory name used under the platform config/data/cache dirs
    pub const APP_DIR_NAME: &str = "levelpick";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Log file name
    pub const LOG_FILE_NAME: &str = "levelpick.log";

    /// Theme used when none is configured
    pub const DEFAULT_THEME: &str = "classic";
}
