//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Default theme - deep blue panels on near black
pub fn classic() -> Theme {
    Theme {
        name: "classic".to_string(),
        display_name: "Classic".to_string(),
        bg_color: Color::Rgb(16, 16, 32),
        text_color: Color::Rgb(224, 224, 224),
        title_color: Color::Rgb(255, 255, 255),
        accent_color: Color::Rgb(64, 128, 255),
        border_color: Color::Rgb(96, 96, 140),
        dim_color: Color::Rgb(128, 128, 128),
        panel_color: Color::Rgb(36, 36, 72),
        panel_hover_color: Color::Rgb(56, 56, 120),
        danger_color: Color::Rgb(230, 72, 72),
    }
}

/// Warm evening palette
pub fn dusk() -> Theme {
    Theme {
        name: "dusk".to_string(),
        display_name: "Dusk".to_string(),
        bg_color: Color::Rgb(30, 20, 28),
        text_color: Color::Rgb(240, 222, 210),
        title_color: Color::Rgb(255, 196, 140),
        accent_color: Color::Rgb(255, 150, 90),
        border_color: Color::Rgb(120, 84, 96),
        dim_color: Color::Rgb(150, 120, 120),
        panel_color: Color::Rgb(60, 38, 52),
        panel_hover_color: Color::Rgb(96, 56, 72),
        danger_color: Color::Rgb(255, 90, 90),
    }
}

/// Uses the terminal's own palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        text_color: Color::Reset,
        title_color: Color::White,
        accent_color: Color::Cyan,
        border_color: Color::DarkGray,
        dim_color: Color::DarkGray,
        panel_color: Color::Black,
        panel_hover_color: Color::Blue,
        danger_color: Color::Red,
    }
}
