//! Text helpers

use ratatui::{buffer::Buffer, layout::Position, style::Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Write `text` at `pos`, clipped to the buffer. Off-buffer positions draw nothing.
pub fn put_text(buf: &mut Buffer, pos: Position, text: &str, style: Style) {
    if !buf.area.contains(pos) {
        return;
    }
    let room = buf.area.right().saturating_sub(pos.x) as usize;
    buf.set_stringn(pos.x, pos.y, text, room, style);
}

/// Truncate `text` to at most `max_width` display columns, ending in `…` when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_ellipsis("level1.sav", 20), "level1.sav");
        assert_eq!(truncate_ellipsis("exact", 5), "exact");
    }

    #[test]
    fn test_long_text_cut() {
        assert_eq!(truncate_ellipsis("abcdefgh", 5), "abcd…");
        assert_eq!(truncate_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_put_text_clips() {
        use ratatui::layout::Rect;

        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 2));
        put_text(&mut buf, Position::new(2, 0), "abcdef", Style::default());
        assert_eq!(buf[(5, 0)].symbol(), "d");

        put_text(&mut buf, Position::new(9, 9), "nope", Style::default());
        assert_eq!(buf[(0, 1)].symbol(), " ");
    }

    #[test]
    fn test_wide_chars_respect_columns() {
        let cut = truncate_ellipsis("日本語のセーブ", 6);
        assert!(cut.width() <= 6);
        assert!(cut.ends_with('…'));
    }
}
