//! tlist configuration (tlist.toml) parsing and types.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "tlist.toml";

/// How a list is written by `display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// One value per line.
    #[default]
    Lines,
    /// All values on one line, joined by the separator.
    Inline,
    /// A JSON array.
    Json,
}

/// Root configuration structure for tlist.toml.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TlistConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Interactive session settings.
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Display section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DisplayConfig {
    /// Output format: "lines", "inline" or "json".
    pub format: Option<DisplayFormat>,
    /// Separator for the inline format.
    pub separator: Option<String>,
}

/// REPL section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReplConfig {
    /// Persist history to ~/.tlist_history.
    pub history: Option<bool>,
    /// Prompt shown before each line.
    pub prompt: Option<String>,
}

impl TlistConfig {
    /// Load configuration from tlist.toml in the current directory.
    /// Returns None if the file doesn't exist.
    pub fn load() -> Result<Option<Self>> {
        Self::load_from_path(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(Self::parse(&content)?))
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration or return default if not found.
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load()?.unwrap_or_default())
    }
}

impl DisplayConfig {
    /// Get the output format (default: lines).
    pub fn format(&self) -> DisplayFormat {
        self.format.unwrap_or_default()
    }

    /// Get the inline separator (default: ", ").
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(", ")
    }
}

impl ReplConfig {
    /// Get whether history is persisted (default: true).
    pub fn history(&self) -> bool {
        self.history.unwrap_or(true)
    }

    /// Get the prompt (default: "tlist> ").
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or("tlist> ")
    }
}
