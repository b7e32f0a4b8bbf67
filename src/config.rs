use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level zemen configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ZemenConfig {
    /// Formatting settings.
    #[serde(default)]
    pub format: FormatToml,

    /// Conversion settings.
    #[serde(default)]
    pub convert: ConvertToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatToml {
    /// Name-table locale: "am" (Amharic) or "en" (English).
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Default Ethiopic era: "amete-mihret" or "amete-alem".
    #[serde(default = "default_era")]
    pub era: String,
}

impl Default for FormatToml {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            era: default_era(),
        }
    }
}

fn default_locale() -> String {
    "am".to_string()
}
fn default_era() -> String {
    "amete-mihret".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConvertToml {
    /// Reject out-of-range month/day inputs before converting. When
    /// false, values pass through the arithmetic unchecked.
    #[serde(default = "default_true")]
    pub strict: bool,
}

impl Default for ConvertToml {
    fn default() -> Self {
        Self {
            strict: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}

/// Loads the configuration from `path`, or returns defaults when no path
/// is given.
pub fn load(path: Option<&Path>) -> Result<ZemenConfig> {
    let Some(path) = path else {
        return Ok(ZemenConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
