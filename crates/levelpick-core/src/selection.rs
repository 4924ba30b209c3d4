//! Screen state and selection bookkeeping
//!
//! `MenuOutcome` is what the Select Level screen hands back to its caller.
//! Rows report clicks through `SelectionSink`, so they never need a handle
//! on the screen that owns them.

use std::fmt;

use tracing::info;

use crate::library::GameEntry;

/// Where the screen is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenState {
    /// Screen is running
    #[default]
    Loading,
    /// Player pressed back
    ReturnToMenu,
    /// Player picked a game
    GameChosen,
    /// Player asked to quit the application
    Quit,
}

impl ScreenState {
    /// True while the screen's loop should keep going
    pub fn is_active(self) -> bool {
        self == ScreenState::Loading
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScreenState::Loading => "load_game",
            ScreenState::ReturnToMenu => "menu",
            ScreenState::GameChosen => "game",
            ScreenState::Quit => "quit",
        }
    }
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver for row clicks
pub trait SelectionSink {
    fn select_game(&mut self, entry: &GameEntry);
}

/// Mutable result of one screen lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOutcome {
    state: ScreenState,
    selected: Option<GameEntry>,
    pending_delete: Option<GameEntry>,
}

impl MenuOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The chosen game, set once by `select_game`
    pub fn selected_game(&self) -> Option<&str> {
        self.selected.as_ref().map(|entry| entry.name.as_str())
    }

    /// The chosen game with the directory it came from
    pub fn selected_entry(&self) -> Option<&GameEntry> {
        self.selected.as_ref()
    }

    /// Move out of `Loading`. Later transitions are ignored.
    fn leave(&mut self, next: ScreenState) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state = next;
        true
    }

    pub fn quit(&mut self) {
        if self.leave(ScreenState::Quit) {
            info!("Quit requested");
        }
    }

    pub fn return_to_menu(&mut self) {
        if self.leave(ScreenState::ReturnToMenu) {
            info!("Returning to menu");
        }
    }

    /// The game awaiting delete confirmation
    pub fn pending_delete(&self) -> Option<&GameEntry> {
        self.pending_delete.as_ref()
    }

    pub fn is_delete_pending(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Ask for confirmation before deleting `entry`
    pub fn request_delete(&mut self, entry: GameEntry) {
        info!(game = %entry.name, source = ?entry.source, "Delete requested");
        self.pending_delete = Some(entry);
    }

    pub fn reset_delete_request(&mut self) {
        self.pending_delete = None;
    }

    /// Clear the pending delete and return it
    pub fn take_pending_delete(&mut self) -> Option<GameEntry> {
        self.pending_delete.take()
    }
}

impl SelectionSink for MenuOutcome {
    fn select_game(&mut self, entry: &GameEntry) {
        if self.selected.is_some() || !self.leave(ScreenState::GameChosen) {
            return;
        }
        info!(game = %entry.name, source = ?entry.source, "Game selected");
        self.selected = Some(entry.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::GameSource;

    fn custom(name: &str) -> GameEntry {
        GameEntry::new(name, GameSource::Custom)
    }

    #[test]
    fn test_select_game_sets_state_once() {
        let mut outcome = MenuOutcome::new();
        assert_eq!(outcome.state(), ScreenState::Loading);
        assert!(outcome.selected_game().is_none());

        outcome.select_game(&custom("a.sav"));
        assert_eq!(outcome.state(), ScreenState::GameChosen);
        assert_eq!(outcome.selected_game(), Some("a.sav"));

        outcome.select_game(&custom("b.sav"));
        assert_eq!(outcome.selected_game(), Some("a.sav"));
    }

    #[test]
    fn test_selection_keeps_source() {
        let mut outcome = MenuOutcome::new();
        let bundled = GameEntry::new("same.sav", GameSource::BuiltIn);
        outcome.select_game(&bundled);

        assert_eq!(outcome.selected_entry(), Some(&bundled));
        assert_eq!(outcome.selected_game(), Some("same.sav"));
    }

    #[test]
    fn test_transitions_are_one_way() {
        let mut outcome = MenuOutcome::new();
        outcome.return_to_menu();
        outcome.quit();
        outcome.select_game(&custom("a.sav"));

        assert_eq!(outcome.state(), ScreenState::ReturnToMenu);
        assert!(outcome.selected_game().is_none());
    }

    #[test]
    fn test_quit_with_pending_delete() {
        let mut outcome = MenuOutcome::new();
        outcome.request_delete(custom("a.sav"));
        outcome.quit();

        assert_eq!(outcome.state(), ScreenState::Quit);
        assert_eq!(outcome.pending_delete(), Some(&custom("a.sav")));
    }

    #[test]
    fn test_delete_request_lifecycle() {
        let mut outcome = MenuOutcome::new();
        assert!(!outcome.is_delete_pending());

        outcome.request_delete(custom("a.sav"));
        assert!(outcome.is_delete_pending());
        outcome.reset_delete_request();
        assert!(outcome.pending_delete().is_none());

        outcome.request_delete(custom("b.sav"));
        assert_eq!(outcome.take_pending_delete(), Some(custom("b.sav")));
        assert!(!outcome.is_delete_pending());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(ScreenState::Loading.to_string(), "load_game");
        assert_eq!(ScreenState::ReturnToMenu.to_string(), "menu");
        assert_eq!(ScreenState::GameChosen.to_string(), "game");
        assert_eq!(ScreenState::Quit.to_string(), "quit");
    }
}
