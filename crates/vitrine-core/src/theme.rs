//! Accent color themes for the landing page.

use ratatui::style::Color;

/// Accent color theme for cards, banner and particles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccentTheme {
    #[default]
    Ice,
    Pine,
    Gold,
    Berry,
    Plum,
}

impl AccentTheme {
    /// Cycle to the next theme.
    pub fn next(&self) -> Self {
        match self {
            AccentTheme::Ice => AccentTheme::Pine,
            AccentTheme::Pine => AccentTheme::Gold,
            AccentTheme::Gold => AccentTheme::Berry,
            AccentTheme::Berry => AccentTheme::Plum,
            AccentTheme::Plum => AccentTheme::Ice,
        }
    }

    /// Accent color used for borders and highlighted text.
    pub fn accent(self) -> Color {
        match self {
            AccentTheme::Ice => Color::Rgb(120, 190, 255),
            AccentTheme::Pine => Color::Rgb(90, 190, 120),
            AccentTheme::Gold => Color::Rgb(235, 190, 90),
            AccentTheme::Berry => Color::Rgb(230, 100, 120),
            AccentTheme::Plum => Color::Rgb(180, 120, 230),
        }
    }

    /// Base hue in degrees, used to tint the particle field.
    pub fn hue(self) -> f32 {
        match self {
            AccentTheme::Ice => 210.0,
            AccentTheme::Pine => 140.0,
            AccentTheme::Gold => 45.0,
            AccentTheme::Berry => 350.0,
            AccentTheme::Plum => 280.0,
        }
    }

    /// Parse a theme name from configuration, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ice" => Some(AccentTheme::Ice),
            "pine" => Some(AccentTheme::Pine),
            "gold" => Some(AccentTheme::Gold),
            "berry" => Some(AccentTheme::Berry),
            "plum" => Some(AccentTheme::Plum),
            _ => None,
        }
    }
}
