//! Configuration loading for the vitrine landing page.
//!
//! Configuration lives in a TOML file under the platform config
//! directory. A missing file falls back to defaults; a malformed file is
//! reported as an error rather than silently ignored.

use std::fs;
use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use vitrine_core::{AccentTheme, CardLink};

/// When to show the seasonal embellishments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FestiveMode {
    /// Follow the calendar (the seasonal gate decides).
    #[default]
    Auto,
    /// Always festive.
    On,
    /// Never festive.
    Off,
}

/// One link card entry in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub url: String,
}

impl CardEntry {
    /// Convert to the core link descriptor.
    pub fn to_link(&self) -> CardLink {
        CardLink::new(&self.title, &self.subtitle, &self.url)
    }
}

/// User configuration for the landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Link cards shown on the page.
    pub cards: Vec<CardEntry>,
    /// Number of particles in the ambient background.
    pub particle_count: usize,
    /// Seasonal embellishment override.
    pub festive: FestiveMode,
    /// Accent theme name (see [`AccentTheme::from_name`]).
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cards: vec![
                CardEntry {
                    title: "Playground".to_string(),
                    subtitle: "Try Rust in the browser".to_string(),
                    url: "https://play.rust-lang.org".to_string(),
                },
                CardEntry {
                    title: "Docs".to_string(),
                    subtitle: "Crate documentation".to_string(),
                    url: "https://docs.rs".to_string(),
                },
            ],
            particle_count: 15,
            festive: FestiveMode::Auto,
            theme: "ice".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the user config file, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).wrap_err_with(|| format!("failed to parse {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Card link descriptors for the page.
    pub fn card_links(&self) -> Vec<CardLink> {
        self.cards.iter().map(CardEntry::to_link).collect()
    }

    /// Resolved accent theme, defaulting when the name is unknown.
    pub fn accent_theme(&self) -> AccentTheme {
        AccentTheme::from_name(&self.theme).unwrap_or_default()
    }
}

/// Path of the user config file, if a config directory can be determined.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vitrine").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cards.len(), 2);
        assert_eq!(config.particle_count, 15);
        assert_eq!(config.festive, FestiveMode::Auto);
        assert_eq!(config.accent_theme(), AccentTheme::Ice);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(
            r#"
            particle_count = 30
            festive = "on"
            theme = "pine"

            [[cards]]
            title = "Status"
            subtitle = "Service dashboard"
            url = "https://status.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.particle_count, 30);
        assert_eq!(config.festive, FestiveMode::On);
        assert_eq!(config.accent_theme(), AccentTheme::Pine);
        assert_eq!(config.cards.len(), 1);
        assert_eq!(config.card_links()[0].title, "Status");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("festive = \"off\"").unwrap();
        assert_eq!(config.festive, FestiveMode::Off);
        assert_eq!(config.particle_count, 15);
        assert_eq!(config.cards.len(), 2);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = Config::from_toml("theme = \"neon\"").unwrap();
        assert_eq!(config.accent_theme(), AccentTheme::Ice);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(Config::from_toml("particle_count = \"many\"").is_err());
    }
}
