//! Theme system
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in presets (teal, catppuccin, nord, gruvbox)
//! - Hex color parsing for config overrides

use ratatui::style::Color;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Accent color (trend line, markers, titles, focused borders)
    pub accent: Color,
    /// Area under the trend line
    pub fill: Color,
    /// Chart gridlines
    pub grid: Color,
    /// Dimmed text (hints, axis labels, unfocused borders)
    pub dimmed: Color,
    /// Background of the maximum-value table rows
    pub highlight_bg: Color,
    /// Text of the maximum-value table rows
    pub highlight_fg: Color,
    /// Background of the scrolled-to table row and focused selector item
    pub selection_bg: Color,
    /// Non-fatal warnings
    pub warning: Color,
    /// Errors
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::teal()
    }
}

impl Theme {
    /// Teal theme - default
    pub fn teal() -> Self {
        Self {
            background: Color::Rgb(13, 17, 22),       // #0d1116
            foreground: Color::Rgb(229, 234, 241),    // #e5eaf1
            accent: Color::Rgb(0, 128, 128),          // #008080 (teal)
            fill: Color::Rgb(16, 56, 60),             // #10383c
            grid: Color::Rgb(55, 65, 81),             // #374151
            dimmed: Color::Rgb(156, 163, 175),        // #9ca3af
            highlight_bg: Color::Rgb(173, 216, 230),  // #add8e6 (lightblue)
            highlight_fg: Color::Rgb(13, 17, 22),     // #0d1116
            selection_bg: Color::Rgb(20, 28, 42),     // #141c2a
            warning: Color::Rgb(245, 158, 11),        // #f59e0b
            error: Color::Rgb(239, 68, 68),           // #ef4444
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),       // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244),    // #cdd6f4 (text)
            accent: Color::Rgb(148, 226, 213),        // #94e2d5 (teal)
            fill: Color::Rgb(49, 50, 68),             // #313244 (surface0)
            grid: Color::Rgb(69, 71, 90),             // #45475a (surface1)
            dimmed: Color::Rgb(166, 173, 200),        // #a6adc8 (subtext0)
            highlight_bg: Color::Rgb(137, 180, 250),  // #89b4fa (blue)
            highlight_fg: Color::Rgb(30, 30, 46),     // #1e1e2e (base)
            selection_bg: Color::Rgb(49, 50, 68),     // #313244 (surface0)
            warning: Color::Rgb(249, 226, 175),       // #f9e2af (yellow)
            error: Color::Rgb(243, 139, 168),         // #f38ba8 (red)
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),       // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            accent: Color::Rgb(143, 188, 187),        // #8fbcbb (nord7)
            fill: Color::Rgb(59, 66, 82),             // #3b4252 (nord1)
            grid: Color::Rgb(76, 86, 106),            // #4c566a (nord3)
            dimmed: Color::Rgb(216, 222, 233),        // #d8dee9 (nord4)
            highlight_bg: Color::Rgb(136, 192, 208),  // #88c0d0 (nord8)
            highlight_fg: Color::Rgb(46, 52, 64),     // #2e3440 (nord0)
            selection_bg: Color::Rgb(67, 76, 94),     // #434c5e (nord2)
            warning: Color::Rgb(235, 203, 139),       // #ebcb8b (nord13)
            error: Color::Rgb(191, 97, 106),          // #bf616a (nord11)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),       // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),    // #ebdbb2 (fg)
            accent: Color::Rgb(104, 157, 106),        // #689d6a (aqua)
            fill: Color::Rgb(60, 56, 54),             // #3c3836 (bg1)
            grid: Color::Rgb(80, 73, 69),             // #504945 (bg2)
            dimmed: Color::Rgb(168, 153, 132),        // #a89984 (gray)
            highlight_bg: Color::Rgb(131, 165, 152),  // #83a598 (blue)
            highlight_fg: Color::Rgb(40, 40, 40),     // #282828 (bg)
            selection_bg: Color::Rgb(60, 56, 54),     // #3c3836 (bg1)
            warning: Color::Rgb(250, 189, 47),        // #fabd2f (bright yellow)
            error: Color::Rgb(204, 36, 29),           // #cc241d (red)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "teal" | "default" => Some(Self::teal()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');

    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or(ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("008080"), Ok(Color::Rgb(0, 128, 128)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex));
        assert_eq!(parse_hex_color("#ff00"), Err(ColorError::InvalidLength));
        assert!(parse_hex_color("ÿÿ").is_err());
    }

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("teal").is_some());
        assert!(Theme::from_preset("Catppuccin").is_some());
        assert!(Theme::from_preset("nord").is_some());
        assert!(Theme::from_preset("gruvbox").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }
}
