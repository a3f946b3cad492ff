// Color themes.
// Two palettes keyed off the persisted preference; every widget draws
// through these roles instead of naming colors directly.

use ratatui::style::Color;

use crate::prefs::ThemeMode;

/// Resolved palette for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub title: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub info: Color,
    pub warn: Color,
    pub error: Color,
    pub featured: Color,
}

impl Theme {
    pub fn of(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                accent: Color::Cyan,
                title: Color::Yellow,
                text: Color::White,
                dim: Color::DarkGray,
                highlight_bg: Color::DarkGray,
                info: Color::Green,
                warn: Color::Yellow,
                error: Color::Red,
                featured: Color::Yellow,
            },
            ThemeMode::Light => Self {
                accent: Color::Blue,
                title: Color::Magenta,
                text: Color::Black,
                dim: Color::Gray,
                highlight_bg: Color::LightBlue,
                info: Color::Green,
                warn: Color::LightRed,
                error: Color::Red,
                featured: Color::Magenta,
            },
        }
    }
}
