//! Clickable button with a hover look

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::tui::themes::Theme;

/// A bordered, labelled button at a fixed spot on screen
#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    area: Rect,
}

impl Button {
    pub fn new(label: impl Into<String>, area: Rect) -> Self {
        Self {
            label: label.into(),
            area,
        }
    }

    #[cfg(test)]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Pointer is over the button
    pub fn is_hovered(&self, pointer: Option<Position>) -> bool {
        pointer.is_some_and(|p| self.area.contains(p))
    }

    /// Whether a click at `pointer` lands on this button
    pub fn check_clicked(&self, pointer: Option<Position>) -> bool {
        self.is_hovered(pointer)
    }

    pub fn render(&self, buf: &mut Buffer, theme: &Theme, pointer: Option<Position>) {
        let area = self.area.intersection(buf.area);
        if area.is_empty() {
            return;
        }

        let (border, text) = if self.is_hovered(pointer) {
            (
                Style::default().fg(theme.accent_color),
                Style::default()
                    .fg(theme.accent_color)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (
                Style::default().fg(theme.border_color),
                Style::default().fg(theme.text_color),
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .style(Style::default().bg(theme.bg_color));

        Paragraph::new(self.label.clone())
            .style(text)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
