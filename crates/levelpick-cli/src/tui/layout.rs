//! Screen geometry in terminal cells
//!
//! The screen is laid out for an 80x40 terminal; anything past the edge of a
//! smaller frame is clipped.

use ratatui::layout::{Position, Rect};

/// Top-left of the first game row
pub const LIST_ORIGIN: Position = Position { x: 24, y: 6 };

/// Game row panel size
pub const ROW_WIDTH: u16 = 48;
pub const ROW_HEIGHT: u16 = 3;

/// Vertical distance between the tops of consecutive rows
pub const ROW_SPACING: u16 = 4;

/// Label position inside a row
pub const LABEL_OFFSET_X: u16 = 4;
pub const LABEL_OFFSET_Y: u16 = 1;

/// Screen title
pub const TITLE_POSITION: Position = Position { x: 24, y: 3 };
pub const TITLE_TEXT: &str = "Select Level:";

/// "Page n/m" line, just under the title
pub const PAGE_INDICATOR_POSITION: Position = Position { x: 24, y: 4 };

/// Chrome buttons
pub const BACK_BUTTON: Rect = Rect {
    x: 1,
    y: 1,
    width: 10,
    height: 3,
};
pub const PAGE_BACK_BUTTON: Rect = Rect {
    x: 62,
    y: 2,
    width: 5,
    height: 3,
};
pub const PAGE_FORWARD_BUTTON: Rect = Rect {
    x: 67,
    y: 2,
    width: 5,
    height: 3,
};

/// Delete confirmation popup size
pub const DELETE_POPUP_WIDTH: u16 = 44;
pub const DELETE_POPUP_HEIGHT: u16 = 9;

/// Position of row `index` on a page starting at `origin`
pub fn row_position(origin: Position, index: usize) -> Position {
    let offset = u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(ROW_SPACING);
    Position {
        x: origin.x,
        y: origin.y.saturating_add(offset),
    }
}
