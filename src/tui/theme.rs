use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ColorOverrides, ThemePreference};

/// Colors for one theme preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub selection_bg: Color,
    pub completed: Color,
    pub high: Color,
    pub medium: Color,
    pub low: Color,
    pub error: Color,
}

impl Palette {
    pub fn light() -> Self {
        Palette {
            background: Color::Rgb(0xFF, 0xFF, 0xFF),
            text: Color::Rgb(0x00, 0x00, 0x00),
            dim: Color::Rgb(0x77, 0x77, 0x77),
            accent: Color::Rgb(0x4D, 0xB7, 0xFE),
            selection_bg: Color::Rgb(0xE3, 0xF3, 0xFF),
            completed: Color::Rgb(0x2E, 0x7D, 0x32),
            high: Color::Rgb(0xFF, 0x00, 0x00),
            medium: Color::Rgb(0xFF, 0xA5, 0x00),
            low: Color::Rgb(0x00, 0x80, 0x00),
            error: Color::Rgb(0xD3, 0x2F, 0x2F),
        }
    }

    pub fn dark() -> Self {
        Palette {
            background: Color::Rgb(0x33, 0x33, 0x33),
            text: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x99, 0x99, 0x99),
            accent: Color::Rgb(0xFF, 0x63, 0x47),
            selection_bg: Color::Rgb(0x4A, 0x4A, 0x4A),
            completed: Color::Rgb(0x8B, 0xC3, 0x4A),
            high: Color::Rgb(0xFF, 0x55, 0x55),
            medium: Color::Rgb(0xFF, 0xA5, 0x00),
            low: Color::Rgb(0x44, 0xCC, 0x66),
            error: Color::Rgb(0xFF, 0x6B, 0x6B),
        }
    }

    /// Built-in palette for a preference with `[ui.colors.<theme>]` overrides applied
    pub fn for_preference(theme: ThemePreference, overrides: &ColorOverrides) -> Self {
        let mut palette = match theme {
            ThemePreference::Light => Palette::light(),
            ThemePreference::Dark => Palette::dark(),
        };
        palette.apply_overrides(overrides.for_theme(theme));
        palette
    }

    fn apply_overrides(&mut self, colors: &HashMap<String, String>) {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => self.background = color,
                "text" => self.text = color,
                "dim" => self.dim = color,
                "accent" => self.accent = color,
                "selection_bg" => self.selection_bg = color,
                "completed" => self.completed = color,
                "high" => self.high = color,
                "medium" => self.medium = color,
                "low" => self.low = color,
                "error" => self.error = color,
                _ => {}
            }
        }
    }

    /// Color for a priority label; unranked priorities use the text color
    pub fn priority_color(&self, priority: &str) -> Color {
        match priority.to_lowercase().as_str() {
            "high" => self.high,
            "medium" => self.medium,
            "low" => self.low,
            _ => self.text,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
