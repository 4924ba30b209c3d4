//! Select Level screen
//!
//! Screen state and the poll-then-draw loop.
//! Input handling lives in the handlers/ module.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::Event;
use levelpick_core::{Config, GameEntry, GameStore, MenuOutcome, ScreenState};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Clear, Widget},
    Frame, Terminal,
};
use tracing::info;

use crate::tui::components::{Button, FileSelector};
use crate::tui::events::EventSource;
use crate::tui::layout::{
    BACK_BUTTON, LIST_ORIGIN, PAGE_BACK_BUTTON, PAGE_FORWARD_BUTTON, PAGE_INDICATOR_POSITION,
    TITLE_POSITION, TITLE_TEXT,
};
use crate::tui::popups::DeleteConfirm;
use crate::tui::themes::{Theme, THEME_REGISTRY};
use crate::tui::utils::put_text;

/// The Select Level screen
///
/// Runs until the player picks a game, goes back, or quits. Read the result
/// with `state()` and `selected_game()` afterwards.
pub struct LoadGameScreen {
    store: Box<dyn GameStore>,
    theme: Arc<Theme>,
    pub(crate) outcome: MenuOutcome,
    pub(crate) file_selector: FileSelector,
    pub(crate) back_button: Button,
    pub(crate) page_back_button: Button,
    pub(crate) page_forward_button: Button,
    /// Last known mouse position
    pub(crate) pointer: Option<Position>,
    /// Frame size from the last draw, used to place the delete prompt
    pub(crate) frame_area: Rect,
}

impl LoadGameScreen {
    /// Build the screen and load the listing from both game directories
    pub fn new(store: Box<dyn GameStore>, config: &Config) -> Result<Self> {
        let file_selector =
            FileSelector::load(store.as_ref(), config.game_dirs(), LIST_ORIGIN, config.page_size)?;
        let theme = Arc::new(THEME_REGISTRY.get_or_default(&config.theme).clone());

        Ok(Self {
            store,
            theme,
            outcome: MenuOutcome::new(),
            file_selector,
            back_button: Button::new("◀ Back", BACK_BUTTON),
            page_back_button: Button::new("◀", PAGE_BACK_BUTTON),
            page_forward_button: Button::new("▶", PAGE_FORWARD_BUTTON),
            pointer: None,
            frame_area: Rect::default(),
        })
    }

    /// Poll input and draw until the screen state leaves `Loading`
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut dyn EventSource,
    ) -> Result<()> {
        info!("Select Level screen opened");
        terminal.draw(|f| self.draw(f))?;
        while self.state().is_active() {
            let batch = events.poll_events()?;
            self.handle_events(batch)?;
            terminal.draw(|f| self.draw(f))?;
        }
        info!(
            state = %self.state(),
            game = ?self.selected_game(),
            "Select Level screen closed"
        );
        Ok(())
    }

    /// Handle one frame's worth of input; stops early once the screen is done
    pub fn handle_events(&mut self, events: Vec<Event>) -> Result<()> {
        for event in events {
            if !self.state().is_active() {
                break;
            }
            match event {
                Event::Key(key) => self.handle_key(key)?,
                Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
                _ => {}
            }
        }
        Ok(())
    }

    pub fn state(&self) -> ScreenState {
        self.outcome.state()
    }

    pub fn selected_game(&self) -> Option<&str> {
        self.outcome.selected_game()
    }

    /// Full path of the selected game, in the directory its row came from
    pub fn selected_path(&self) -> Option<std::path::PathBuf> {
        self.outcome
            .selected_entry()
            .map(|entry| entry.path(self.file_selector.dirs()))
    }

    pub fn quit(&mut self) {
        self.outcome.quit();
    }

    #[cfg(test)]
    pub fn file_selector(&self) -> &FileSelector {
        &self.file_selector
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn page_forward(&mut self) {
        self.file_selector.page_forward();
    }

    pub fn page_back(&mut self) {
        self.file_selector.page_back();
    }

    pub fn pending_delete(&self) -> Option<&GameEntry> {
        self.outcome.pending_delete()
    }

    pub fn is_delete_pending(&self) -> bool {
        self.outcome.is_delete_pending()
    }

    /// Open the delete prompt for `entry`; nothing is removed yet
    pub fn request_delete(&mut self, entry: GameEntry) {
        self.outcome.request_delete(entry);
    }

    pub fn reset_delete_request(&mut self) {
        info!("Delete cancelled");
        self.outcome.reset_delete_request();
    }

    /// Remove the pending game's file and reload the list
    ///
    /// The prompt closes even if the removal fails; the error is returned.
    pub fn confirm_delete(&mut self) -> Result<()> {
        let Some(entry) = self.outcome.take_pending_delete() else {
            return Ok(());
        };

        let path = entry.path(self.file_selector.dirs());

        info!(path = %path.display(), "Deleting game");
        self.store.remove_file(&path)?;
        self.file_selector.reload(self.store.as_ref())?;
        Ok(())
    }

    /// Draw one frame. Later layers cover earlier ones.
    pub fn draw(&mut self, f: &mut Frame) {
        self.frame_area = f.area();
        let theme = Arc::clone(&self.theme);
        let buf = f.buffer_mut();

        let area = buf.area;
        Clear.render(area, buf);
        render_background(buf, &theme);
        put_text(
            buf,
            TITLE_POSITION,
            TITLE_TEXT,
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        );
        self.back_button.render(buf, &theme, self.pointer);

        self.file_selector.render(buf, &theme, self.pointer);
        self.page_back_button.render(buf, &theme, self.pointer);
        self.page_forward_button.render(buf, &theme, self.pointer);
        self.render_page_indicator(buf, &theme);

        if let Some(entry) = self.pending_delete() {
            DeleteConfirm::render(buf, &theme, &entry.name, self.pointer);
        }
    }

    fn render_page_indicator(&self, buf: &mut Buffer, theme: &Theme) {
        let pages = self.file_selector.page_count();
        if pages == 0 {
            return;
        }
        let text = format!("Page {}/{}", self.file_selector.current_page() + 1, pages);
        put_text(
            buf,
            PAGE_INDICATOR_POSITION,
            &text,
            Style::default().fg(theme.dim_color),
        );
    }
}

fn render_background(buf: &mut Buffer, theme: &Theme) {
    let area = buf.area;
    Block::default()
        .style(Style::default().bg(theme.bg_color))
        .render(area, buf);
}
