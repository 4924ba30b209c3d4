//! Color themes

mod definitions;
mod registry;

use once_cell::sync::Lazy;
use ratatui::style::Color;

pub use registry::ThemeRegistry;

/// Global registry of built-in themes
pub static THEME_REGISTRY: Lazy<ThemeRegistry> = Lazy::new(ThemeRegistry::new);

/// Named colors used by every part of the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub display_name: String,
    /// Screen background
    pub bg_color: Color,
    /// Row labels and body text
    pub text_color: Color,
    /// Screen title
    pub title_color: Color,
    /// Hovered buttons and key hints
    pub accent_color: Color,
    /// Button and popup borders
    pub border_color: Color,
    /// Secondary text (page indicator, empty listing hint)
    pub dim_color: Color,
    /// Row panel
    pub panel_color: Color,
    /// Row panel under the pointer
    pub panel_hover_color: Color,
    /// Destructive actions
    pub danger_color: Color,
}
