use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::timeframe::Timeframe;
use crate::ui::theme::{parse_hex_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub trends: TrendsConfig,
    pub suggest: SuggestConfig,
    pub appearance: AppearanceConfig,
}

/// Initial form values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub keyword: String,
    pub timeframe: Timeframe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsConfig {
    pub base_url: String,
    /// Host language sent as `hl`
    pub language: String,
    /// Timezone offset in minutes sent as `tz`
    pub tz_offset: i32,
    /// Region code; empty means worldwide
    pub geo: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub base_url: String,
    /// Value of the `client` query parameter; `firefox` yields plain JSON
    pub client: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Theme preset name
    pub theme: String,
    /// Hex colour overriding the preset's accent
    pub accent: Option<String>,
    pub prompt: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            keyword: "digital marketing".to_string(),
            timeframe: Timeframe::PastMonth,
        }
    }
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://trends.google.com".to_string(),
            language: "en-US".to_string(),
            tz_offset: 360,
            geo: String::new(),
            timeout_secs: 15,
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            base_url: "http://suggestqueries.google.com".to_string(),
            client: "firefox".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "teal".to_string(),
            accent: None,
            prompt: "❯ ".to_string(),
        }
    }
}

impl TrendsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl SuggestConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keyword-trends")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolve the theme preset, applying the accent override if it parses
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", self.appearance.theme);
            Theme::default()
        });

        if let Some(ref accent) = self.appearance.accent {
            match parse_hex_color(accent) {
                Ok(color) => theme.accent = color,
                Err(e) => tracing::warn!("Ignoring accent '{}': {}", accent, e),
            }
        }

        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.defaults.keyword, "digital marketing");
        assert_eq!(config.defaults.timeframe, Timeframe::PastMonth);
        assert_eq!(config.suggest.client, "firefox");
        assert_eq!(config.trends.timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(
            r#"
            [defaults]
            keyword = "rust"
            timeframe = "today 5-y"

            [suggest]
            timeout_secs = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.defaults.keyword, "rust");
        assert_eq!(config.defaults.timeframe, Timeframe::PastFiveYears);
        assert_eq!(config.suggest.timeout(), Duration::from_secs(3));
        // Untouched fields keep defaults
        assert_eq!(config.suggest.client, "firefox");
        assert_eq!(config.trends.language, "en-US");
    }

    #[test]
    fn test_zero_timeout_is_bounded() {
        let config = Config::parse("[trends]\ntimeout_secs = 0").unwrap();
        assert_eq!(config.trends.timeout(), Duration::from_secs(1));
    }

    #[test]
    fn test_invalid_timeframe_rejected() {
        assert!(Config::parse("[defaults]\ntimeframe = \"today 2-w\"").is_err());
    }

    #[test]
    fn test_accent_override() {
        let config = Config::parse("[appearance]\ntheme = \"nord\"\naccent = \"#ff0000\"").unwrap();
        assert_eq!(config.resolve_theme().accent, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_bad_accent_ignored() {
        let config = Config::parse("[appearance]\naccent = \"nope\"").unwrap();
        assert_eq!(config.resolve_theme().accent, Theme::default().accent);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/keyword-trends/config.toml").unwrap();
        assert_eq!(config.appearance.theme, "teal");
    }
}
