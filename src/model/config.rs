use serde::Deserialize;
use std::collections::HashMap;

use super::sort::{SortKey, SortOrder};
use super::theme::ThemePreference;

/// Configuration from tasklist.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Theme at startup
    #[serde(default)]
    pub theme: ThemePreference,
    /// Sort key at startup
    #[serde(default)]
    pub sort: SortKey,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: ColorOverrides,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            theme: ThemePreference::default(),
            sort: SortKey::default(),
            order: SortOrder::default(),
            show_key_hints: true,
            colors: ColorOverrides::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Per-theme palette overrides, `slot = "#RRGGBB"`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ColorOverrides {
    #[serde(default)]
    pub light: HashMap<String, String>,
    #[serde(default)]
    pub dark: HashMap<String, String>,
}

impl ColorOverrides {
    pub fn for_theme(&self, theme: ThemePreference) -> &HashMap<String, String> {
        match theme {
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }
}
