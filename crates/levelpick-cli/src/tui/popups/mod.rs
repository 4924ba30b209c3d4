//! Popups drawn over the Select Level screen
//!
//! Same look for every popup: rounded border, centered title with a
//! separator underneath, content, then buttons.

pub mod common;
pub mod delete_confirm;

pub use delete_confirm::{ConfirmChoice, DeleteConfirm};
