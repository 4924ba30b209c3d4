//! UI components for the Select Level screen
//!
//! Buttons for the screen chrome, one row per game, and the paged list that owns the rows.

pub mod button;
pub mod file_selector;
pub mod game_row;

pub use button::Button;
pub use file_selector::FileSelector;
