//! levelpick Core - Shared library for the Select Level screen
//!
//! This crate provides everything the screen needs that is not drawing:
//! - Game directory listing behind a swappable store
//! - Page partitioning with circular navigation
//! - Screen state, selection and pending-delete bookkeeping
//! - Configuration and well-known paths

pub mod config;
pub mod constants;
pub mod error;
pub mod library;
pub mod paths;
pub mod selection;

// Re-exports for convenience
pub use config::Config;
pub use error::{LibraryError, Result};
pub use library::{FsStore, GameDirs, GameEntry, GameListing, GamePages, GameSource, GameStore};
pub use selection::{MenuOutcome, ScreenState, SelectionSink};
