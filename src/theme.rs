//! Light/dark theme flag and the colors each front-end derives from it.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch to the other theme
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Value of the `data-theme` attribute in exported SVG
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// CSS variables for exported SVG
    pub fn css_vars(&self) -> CssVars {
        match self {
            Theme::Dark => CssVars {
                background: "#1e1e24",
                text: "#f5f5f5",
                pointer: "#f5f5f5",
            },
            Theme::Light => CssVars {
                background: "#f7f7f2",
                text: "#1e1e24",
                pointer: "#1e1e24",
            },
        }
    }

    /// Get the terminal palette for this theme
    pub fn palette(&self) -> TerminalPalette {
        match self {
            Theme::Dark => TerminalPalette {
                bg: Color::Rgb(30, 30, 36),
                fg: Color::Rgb(245, 245, 245),
                muted: Color::DarkGray,
                accent: Color::Rgb(242, 222, 92),
                warning: Color::Rgb(196, 74, 58),
            },
            Theme::Light => TerminalPalette {
                bg: Color::Rgb(247, 247, 242),
                fg: Color::Rgb(30, 30, 36),
                muted: Color::Gray,
                accent: Color::Rgb(58, 125, 196),
                warning: Color::Rgb(196, 74, 58),
            },
        }
    }
}

/// CSS custom property values for one theme
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CssVars {
    pub background: &'static str,
    pub text: &'static str,
    pub pointer: &'static str,
}

/// Terminal colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct TerminalPalette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub warning: Color,
}

impl TerminalPalette {
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parse a `#rrggbb` hex color into a terminal color.
///
/// Falls back to `Color::Reset` for anything malformed.
pub fn hex_color(hex: &str) -> Color {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.is_ascii() {
        return Color::Reset;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => Color::Reset,
    }
}
