//! A single game in the list

use levelpick_core::{GameEntry, SelectionSink};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Widget},
};

use crate::tui::layout::{LABEL_OFFSET_X, LABEL_OFFSET_Y, ROW_HEIGHT, ROW_WIDTH};
use crate::tui::themes::Theme;
use crate::tui::utils::{put_text, truncate_ellipsis};

/// Clickable panel showing one game's file name
#[derive(Debug, Clone)]
pub struct GameRow {
    entry: GameEntry,
    area: Rect,
}

impl GameRow {
    pub fn new(entry: GameEntry, position: Position) -> Self {
        Self {
            entry,
            area: Rect {
                x: position.x,
                y: position.y,
                width: ROW_WIDTH,
                height: ROW_HEIGHT,
            },
        }
    }

    pub fn entry(&self) -> &GameEntry {
        &self.entry
    }

    #[cfg(test)]
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn is_hovered(&self, pointer: Option<Position>) -> bool {
        pointer.is_some_and(|p| self.area.contains(p))
    }

    /// Report this game to `sink` if the click landed on the row
    pub fn handle_click(&self, pointer: Option<Position>, sink: &mut dyn SelectionSink) -> bool {
        if !self.is_hovered(pointer) {
            return false;
        }
        sink.select_game(&self.entry);
        true
    }

    pub fn render(&self, buf: &mut Buffer, theme: &Theme, pointer: Option<Position>) {
        let area = self.area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let hovered = self.is_hovered(pointer);
        let panel = if hovered {
            theme.panel_hover_color
        } else {
            theme.panel_color
        };
        Block::default()
            .style(Style::default().bg(panel))
            .render(area, buf);

        let label_pos = Position {
            x: self.area.x.saturating_add(LABEL_OFFSET_X),
            y: self.area.y.saturating_add(LABEL_OFFSET_Y),
        };
        let max_width = ROW_WIDTH.saturating_sub(LABEL_OFFSET_X * 2) as usize;
        let label = truncate_ellipsis(&self.entry.name, max_width);
        let mut style = Style::default().fg(theme.text_color).bg(panel);
        if hovered {
            style = style.add_modifier(Modifier::BOLD);
        }
        put_text(buf, label_pos, &label, style);
    }
}
