//! Game library - where the selectable games come from
//!
//! - `store`: filesystem access behind the `GameStore` trait
//! - `listing`: the ordered listing built from both game directories
//! - `pages`: fixed-size pages over a listing with circular navigation

mod listing;
mod pages;
mod store;

pub use listing::{GameDirs, GameEntry, GameListing, GameSource};
pub use pages::GamePages;
pub use store::{FsStore, GameStore};
