//! Input handlers for the Select Level screen
//!
//! Each file adds an `impl LoadGameScreen` block for one kind of input.

mod keyboard;
mod mouse;
