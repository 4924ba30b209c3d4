//! Common popup utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::tui::themes::Theme;

/// Calculate centered popup area with fixed size (not percentage)
pub fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp to available space
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width - popup_width) / 2;
    let y = area.y + (area.height - popup_height) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

/// Wipe whatever is under the popup and paint the theme background
pub fn render_popup_background(buf: &mut Buffer, area: Rect, theme: &Theme) {
    Clear.render(area, buf);
    Block::default()
        .style(Style::default().bg(theme.bg_color))
        .render(area, buf);
}

/// Create standard popup block with rounded borders
pub fn popup_block(theme: &Theme, border_color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.bg_color))
}

/// Create popup title lines (centered, with separator matching title width)
pub fn popup_title(title: &str, theme: &Theme) -> Vec<Line<'static>> {
    // Separator matches title length (min 16 chars for aesthetics)
    let sep_len = title.chars().count().max(16);
    let separator: String = "═".repeat(sep_len);

    vec![
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            separator,
            Style::default().fg(theme.border_color),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 80, 40);
        assert_eq!(center_rect(40, 10, area), Rect::new(20, 15, 40, 10));
    }

    #[test]
    fn test_center_rect_clamps_to_small_area() {
        let area = Rect::new(2, 3, 20, 6);
        let popup = center_rect(40, 10, area);
        assert_eq!(popup, area);
    }
}
