use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ErrorCode;
use crate::feed::FeedFormat;
use crate::palette::DEFAULT_COLORS;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "cohab.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CohabConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_field_separator")]
    pub field_separator: char,
    #[serde(default = "default_name_separator")]
    pub name_separator: char,
    #[serde(default = "default_true")]
    pub skip_header: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            field_separator: default_field_separator(),
            name_separator: default_name_separator(),
            skip_header: default_true(),
        }
    }
}

impl FeedConfig {
    #[must_use]
    pub const fn format(&self) -> FeedFormat {
        FeedFormat {
            field_separator: self.field_separator,
            name_separator: self.name_separator,
            skip_header: self.skip_header,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
        }
    }
}

/// Load config from `path`.
///
/// # Errors
///
/// Returns an error tagged [`ErrorCode::ConfigReadError`] if the file cannot
/// be read, or [`ErrorCode::ConfigParseError`] if it is not valid TOML.
pub fn load_config(path: &Path) -> Result<CohabConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))
        .context(ErrorCode::ConfigReadError)?;

    toml::from_str::<CohabConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
        .context(ErrorCode::ConfigParseError)
}

/// Resolve the effective config.
///
/// An explicit path must exist. Without one, `cohab.toml` in `dir` is used
/// if present, otherwise defaults apply.
///
/// # Errors
///
/// Returns an error if the chosen file cannot be read or parsed.
pub fn resolve_config(explicit: Option<&Path>, dir: &Path) -> Result<CohabConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(CohabConfig::default());
    }
    load_config(&path)
}

const fn default_true() -> bool {
    true
}

const fn default_field_separator() -> char {
    ';'
}

const fn default_name_separator() -> char {
    ','
}

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(ToString::to_string).collect()
}
