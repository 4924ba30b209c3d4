//! Terminal User Interface for the Select Level screen

pub mod app;
pub mod components;
pub mod events;
pub mod handlers;
pub mod layout;
pub mod popups;
pub mod themes;
pub mod utils;

// Re-exports
pub use app::LoadGameScreen;
pub use events::CrosstermEvents;
pub use themes::THEME_REGISTRY;
