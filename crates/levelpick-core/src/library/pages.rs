//! Fixed-size pages over a game listing

use tracing::debug;

use super::listing::GameEntry;

/// A listing split into pages of at most `page_size` entries
///
/// The current page index wraps in both directions. With no entries there
/// are no pages; the index stays at 0 and `current_page` returns `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamePages {
    pages: Vec<Vec<GameEntry>>,
    current: usize,
}

impl GamePages {
    /// Partition `entries` in order. A `page_size` of 0 is treated as 1.
    pub fn new(entries: Vec<GameEntry>, page_size: usize) -> Self {
        let pages = entries
            .chunks(page_size.max(1))
            .map(|chunk| chunk.to_vec())
            .collect();
        Self { pages, current: 0 }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total entries across all pages
    pub fn len(&self) -> usize {
        self.pages.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Entries on the visible page, `None` if there is no such page
    pub fn current_page(&self) -> Option<&[GameEntry]> {
        self.page(self.current)
    }

    pub fn page(&self, index: usize) -> Option<&[GameEntry]> {
        self.pages.get(index).map(Vec::as_slice)
    }

    pub fn pages(&self) -> impl Iterator<Item = &[GameEntry]> {
        self.pages.iter().map(Vec::as_slice)
    }

    /// Next page, wrapping from the last to the first
    pub fn page_forward(&mut self) {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
        } else {
            self.current = 0;
        }
        debug!(page = self.current, pages = self.pages.len(), "Page forward");
    }

    /// Previous page, wrapping from the first to the last
    pub fn page_back(&mut self) {
        if self.current > 0 {
            self.current -= 1;
        } else {
            self.current = self.pages.len().saturating_sub(1);
        }
        debug!(page = self.current, pages = self.pages.len(), "Page back");
    }
}
