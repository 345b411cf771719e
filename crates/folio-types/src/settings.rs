//! Persisted user settings and the key-value store behind them.
//!
//! The host decides where settings live (browser local storage, a file,
//! memory); the core only sees the `SettingsStore` trait. Values are flat
//! strings, one key per setting.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Flat string key-value persistence for user settings.
pub trait SettingsStore {
    /// Read a stored value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value. Replaces any existing value for the key.
    fn set(&mut self, key: &str, value: &str);

    /// Remove a key. Missing keys are ignored.
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

const KEY_THEME: &str = "theme";
const KEY_FONT_FAMILY: &str = "font-family";
const KEY_FONT_SIZE: &str = "font-size";
const KEY_SYNTAX: &str = "syntax-highlighting";

/// User-facing appearance settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Active theme name (validated by the theme layer, stored as-is here).
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Editor font family.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    /// Editor font size in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: u16,
    /// Whether the code surfaces colorize tokens.
    #[serde(default = "default_syntax")]
    pub syntax_highlighting: bool,
}

fn default_theme() -> String {
    "dracula".to_string()
}
fn default_font_family() -> String {
    "monospace".to_string()
}
fn default_font_size() -> u16 {
    14
}
fn default_syntax() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            font_family: default_font_family(),
            font_size: default_font_size(),
            syntax_highlighting: default_syntax(),
        }
    }
}

impl Settings {
    /// Load settings from a store. Missing or unparsable values fall back
    /// to the defaults.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let defaults = Self::default();
        Self {
            theme: store.get(KEY_THEME).unwrap_or(defaults.theme),
            font_family: store.get(KEY_FONT_FAMILY).unwrap_or(defaults.font_family),
            font_size: store
                .get(KEY_FONT_SIZE)
                .and_then(|v| parse_or_warn(KEY_FONT_SIZE, &v))
                .unwrap_or(defaults.font_size),
            syntax_highlighting: store
                .get(KEY_SYNTAX)
                .and_then(|v| parse_or_warn(KEY_SYNTAX, &v))
                .unwrap_or(defaults.syntax_highlighting),
        }
    }

    /// Write all settings to a store.
    pub fn save(&self, store: &mut dyn SettingsStore) {
        store.set(KEY_THEME, &self.theme);
        store.set(KEY_FONT_FAMILY, &self.font_family);
        store.set(KEY_FONT_SIZE, &self.font_size.to_string());
        store.set(KEY_SYNTAX, &self.syntax_highlighting.to_string());
    }

    /// Serialize to a JSON snapshot.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring unparsable stored setting {key}={value:?}");
            None
        },
    }
}
