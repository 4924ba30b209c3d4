//! Paged list of game rows
//!
//! Owns the listing, its page partition and one `GameRow` per game. Only the
//! current page is hit-tested or drawn. A reload throws everything away and
//! rebuilds from the filesystem.

use levelpick_core::{GameDirs, GameEntry, GameListing, GamePages, GameStore, SelectionSink};
use ratatui::{
    buffer::Buffer,
    layout::Position,
    style::{Modifier, Style},
};
use tracing::info;

use super::game_row::GameRow;
use crate::tui::layout::row_position;
use crate::tui::themes::Theme;
use crate::tui::utils::put_text;

/// The list of games on the Select Level screen
#[derive(Debug, Clone)]
pub struct FileSelector {
    dirs: GameDirs,
    origin: Position,
    page_size: usize,
    listing: GameListing,
    pages: GamePages,
    /// Rows per page, parallel to `pages`
    rows: Vec<Vec<GameRow>>,
}

impl FileSelector {
    /// Read both game directories and lay out the first page at `origin`
    pub fn load(
        store: &dyn GameStore,
        dirs: GameDirs,
        origin: Position,
        page_size: usize,
    ) -> levelpick_core::Result<Self> {
        let mut selector = Self {
            dirs,
            origin,
            page_size,
            listing: GameListing::default(),
            pages: GamePages::default(),
            rows: Vec::new(),
        };
        selector.reload(store)?;
        Ok(selector)
    }

    /// Rebuild listing, pages and rows from the filesystem; back to page 0
    pub fn reload(&mut self, store: &dyn GameStore) -> levelpick_core::Result<()> {
        let listing = GameListing::load(store, &self.dirs)?;
        let pages = GamePages::new(listing.entries().to_vec(), self.page_size);

        let rows: Vec<Vec<GameRow>> = pages
            .pages()
            .map(|page| {
                page.iter()
                    .enumerate()
                    .map(|(i, entry)| GameRow::new(entry.clone(), row_position(self.origin, i)))
                    .collect()
            })
            .collect();

        info!(
            games = listing.len(),
            pages = pages.page_count(),
            "File selector loaded"
        );

        self.listing = listing;
        self.pages = pages;
        self.rows = rows;
        Ok(())
    }

    pub fn dirs(&self) -> &GameDirs {
        &self.dirs
    }

    /// Every listed game, custom first
    #[cfg(test)]
    pub fn entries(&self) -> &[GameEntry] {
        self.listing.entries()
    }

    /// First listed game with this name
    #[cfg(test)]
    pub fn entry(&self, name: &str) -> Option<&GameEntry> {
        self.listing.find(name)
    }

    #[cfg(test)]
    pub fn pages(&self) -> &GamePages {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    pub fn current_page(&self) -> usize {
        self.pages.current_index()
    }

    /// Rows on the visible page; `None` when there are no pages
    pub fn visible_rows(&self) -> Option<&[GameRow]> {
        self.rows.get(self.pages.current_index()).map(Vec::as_slice)
    }

    /// Offer a click to the visible rows; the first hit selects its game
    pub fn check_clicked(&self, pointer: Option<Position>, sink: &mut dyn SelectionSink) -> bool {
        let Some(rows) = self.visible_rows() else {
            return false;
        };
        rows.iter().any(|row| row.handle_click(pointer, &mut *sink))
    }

    /// Game under the pointer on the visible page
    pub fn hovered_entry(&self, pointer: Option<Position>) -> Option<&GameEntry> {
        self.visible_rows()?
            .iter()
            .find(|row| row.is_hovered(pointer))
            .map(GameRow::entry)
    }

    pub fn page_forward(&mut self) {
        self.pages.page_forward();
    }

    pub fn page_back(&mut self) {
        self.pages.page_back();
    }

    pub fn render(&self, buf: &mut Buffer, theme: &Theme, pointer: Option<Position>) {
        let Some(rows) = self.visible_rows() else {
            self.render_empty(buf, theme);
            return;
        };
        for row in rows {
            row.render(buf, theme, pointer);
        }
    }

    fn render_empty(&self, buf: &mut Buffer, theme: &Theme) {
        put_text(
            buf,
            self.origin,
            "No games found",
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        );
    }
}
