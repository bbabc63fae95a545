//! Schedule editor configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::intent::ScheduleIntent;

/// Host-supplied settings for one schedule editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Hour of the daily schedule applied to empty input (default: 9)
    #[serde(default = "default_hour")]
    pub default_hour: u32,

    /// Whether the custom (advanced) mode is surfaced in the UI
    #[serde(default)]
    pub allow_custom: bool,

    /// Locale label passed through to the preview collaborator
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Timezone label passed through to the preview collaborator
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_hour() -> u32 {
    9
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_hour: default_hour(),
            allow_custom: false,
            locale: default_locale(),
            timezone: default_timezone(),
        }
    }
}

impl EditorConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EditorConfig = toml::from_str(content)?;
        if config.default_hour > 23 {
            return Err(ScheduleError::Config(format!(
                "default_hour must be 0-23, got {}",
                config.default_hour
            )));
        }
        Ok(config)
    }

    /// Load configuration from a TOML file.
    /// Returns default config if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No editor config, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScheduleError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Save the configuration as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn with_default_hour(mut self, hour: u32) -> Self {
        self.default_hour = hour.min(23);
        self
    }

    pub fn with_allow_custom(mut self, allow: bool) -> Self {
        self.allow_custom = allow;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// The intent applied to empty input: daily at `default_hour:00:00`
    pub fn default_intent(&self) -> ScheduleIntent {
        ScheduleIntent::daily(self.default_hour.min(23), 0, 0)
    }
}
