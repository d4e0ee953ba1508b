use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use namespark_core::{DEFAULT_KEYWORD_PLACEHOLDER, FormInput};
use namespark_generate::output::OutputFormat;

use super::atomic::write_bytes_atomic;
use super::WorkspaceResult;

/// Answers used when the command line leaves a field out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe: Option<String>,
}

impl FieldDefaults {
    /// Fill an empty industry or vibe; values already given are kept.
    pub fn fill_blank(&self, input: &mut FormInput) {
        if input.industry.is_empty()
            && let Some(industry) = &self.industry
        {
            input.industry = industry.clone();
        }
        if input.vibe.is_empty()
            && let Some(vibe) = &self.vibe
        {
            input.vibe = vibe.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keywords submitted when none are given; an empty string disables it.
    pub keyword_placeholder: String,
    pub output: OutputFormat,
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_level: String,
    /// JSON log file; logs go to stderr when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    pub defaults: FieldDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keyword_placeholder: DEFAULT_KEYWORD_PLACEHOLDER.to_string(),
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
            log_file: None,
            defaults: FieldDefaults::default(),
        }
    }
}

impl Settings {
    pub fn keyword_placeholder(&self) -> Option<String> {
        Some(self.keyword_placeholder.clone()).filter(|value| !value.is_empty())
    }
}

/// Settings from `path`, or the defaults when the file does not exist.
pub fn load_settings(path: &Path) -> WorkspaceResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}
