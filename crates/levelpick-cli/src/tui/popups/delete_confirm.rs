//! Delete confirmation popup
//!
//! Shown while a delete is pending. Keys: `y`/Enter deletes, `n`/Backspace
//! cancels. The two buttons do the same with the mouse.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::common::{center_rect, popup_block, popup_title, render_popup_background};
use crate::tui::components::Button;
use crate::tui::layout::{DELETE_POPUP_HEIGHT, DELETE_POPUP_WIDTH};
use crate::tui::themes::Theme;
use crate::tui::utils::truncate_ellipsis;

const BUTTON_WIDTH: u16 = 14;
const BUTTON_HEIGHT: u16 = 3;
/// Rows above the buttons inside the border: title block (3) + file name (1)
const BUTTON_ROW: u16 = 4;
/// Columns between the border and each button
const BUTTON_MARGIN: u16 = 2;
const BUTTON_GAP: u16 = 1;

/// What the player picked in the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Delete,
    Cancel,
}

/// Stateless layout and drawing for the confirmation popup
pub struct DeleteConfirm;

impl DeleteConfirm {
    /// Popup rectangle for a frame
    pub fn area(frame: Rect) -> Rect {
        center_rect(DELETE_POPUP_WIDTH, DELETE_POPUP_HEIGHT, frame)
    }

    /// Delete and Cancel buttons for a popup at `area`
    ///
    /// Buttons shrink with a narrow popup and never overlap.
    fn buttons(area: Rect) -> (Button, Button) {
        let inner_x = area.x.saturating_add(1);
        let inner_width = area.width.saturating_sub(2);
        let width =
            (inner_width.saturating_sub(BUTTON_MARGIN * 2 + BUTTON_GAP) / 2).min(BUTTON_WIDTH);
        let y = area.y + 1 + BUTTON_ROW;

        let delete = Button::new(
            "Delete (y)",
            Rect::new(inner_x + BUTTON_MARGIN, y, width, BUTTON_HEIGHT),
        );
        let cancel = Button::new(
            "Cancel (n)",
            Rect::new(
                (inner_x + inner_width).saturating_sub(BUTTON_MARGIN + width),
                y,
                width,
                BUTTON_HEIGHT,
            ),
        );
        (delete, cancel)
    }

    /// Which button, if any, a click at `pointer` lands on
    pub fn hit(frame: Rect, pointer: Option<Position>) -> Option<ConfirmChoice> {
        let area = Self::area(frame);
        if area.is_empty() {
            return None;
        }
        let (delete, cancel) = Self::buttons(area);
        if delete.check_clicked(pointer) {
            Some(ConfirmChoice::Delete)
        } else if cancel.check_clicked(pointer) {
            Some(ConfirmChoice::Cancel)
        } else {
            None
        }
    }

    pub fn render(buf: &mut Buffer, theme: &Theme, name: &str, pointer: Option<Position>) {
        let area = Self::area(buf.area);
        if area.is_empty() {
            return;
        }
        render_popup_background(buf, area, theme);

        let block = popup_block(theme, theme.danger_color);
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = popup_title("Delete Game?", theme);
        let max_width = inner.width.saturating_sub(2) as usize;
        lines.push(Line::from(Span::styled(
            truncate_ellipsis(name, max_width),
            Style::default().fg(theme.text_color),
        )));
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);

        let (delete, cancel) = Self::buttons(area);
        delete.render(buf, theme, pointer);
        cancel.render(buf, theme, pointer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::themes::THEME_REGISTRY;

    fn frame() -> Rect {
        Rect::new(0, 0, 80, 40)
    }

    fn centre(rect: Rect) -> Option<Position> {
        Some(Position::new(
            rect.x + rect.width / 2,
            rect.y + rect.height / 2,
        ))
    }

    #[test]
    fn test_buttons_inside_popup() {
        let area = DeleteConfirm::area(frame());
        let (delete, cancel) = DeleteConfirm::buttons(area);
        assert_eq!(area.intersection(delete.area()), delete.area());
        assert_eq!(area.intersection(cancel.area()), cancel.area());
        assert!(delete.area().right() <= cancel.area().x);
    }

    #[test]
    fn test_narrow_frame_buttons_do_not_overlap() {
        let narrow = Rect::new(0, 0, 30, 10);
        let (delete, cancel) = DeleteConfirm::buttons(DeleteConfirm::area(narrow));
        assert!(delete.area().width > 0);
        assert!(delete.area().right() < cancel.area().x);

        let cancel_edge = Some(Position::new(cancel.area().x, cancel.area().y + 1));
        assert_eq!(
            DeleteConfirm::hit(narrow, cancel_edge),
            Some(ConfirmChoice::Cancel)
        );
        let delete_edge = Some(Position::new(delete.area().right() - 1, delete.area().y + 1));
        assert_eq!(
            DeleteConfirm::hit(narrow, delete_edge),
            Some(ConfirmChoice::Delete)
        );
    }

    #[test]
    fn test_hit() {
        let (delete, cancel) = DeleteConfirm::buttons(DeleteConfirm::area(frame()));
        assert_eq!(
            DeleteConfirm::hit(frame(), centre(delete.area())),
            Some(ConfirmChoice::Delete)
        );
        assert_eq!(
            DeleteConfirm::hit(frame(), centre(cancel.area())),
            Some(ConfirmChoice::Cancel)
        );
        assert_eq!(DeleteConfirm::hit(frame(), Some(Position::new(0, 0))), None);
        assert_eq!(DeleteConfirm::hit(frame(), None), None);
    }

    #[test]
    fn test_render_shows_name() {
        let theme = THEME_REGISTRY.get_or_default("classic");
        let mut buf = Buffer::empty(frame());
        DeleteConfirm::render(&mut buf, theme, "old_save.sav", None);

        let area = DeleteConfirm::area(frame());
        let text: String = (area.y..area.bottom())
            .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(text.contains("Delete Game?"));
        assert!(text.contains("old_save.sav"));
        assert!(text.contains("Cancel (n)"));
    }
}
