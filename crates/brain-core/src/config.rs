use crate::{BrainError, BrainResult};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
const DEFAULT_CONTENT_LINES: usize = 3;
pub const MAX_CONTENT_LINES: usize = 20;

/// Whether chrono can render dates with `format` without a formatting error.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// External command used as the native share capability.
///
/// When `command` is unset the native capability is considered absent and
/// sharing falls back to the clipboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub date_format: Option<String>,
    #[serde(default)]
    pub content_lines: Option<usize>,
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default)]
    pub share: ShareConfig,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/second-brain/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("second-brain/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("second-brain\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn from_path(path: &Path) -> BrainResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads the config from `explicit` or the platform default location.
    ///
    /// Never fails: a missing file yields defaults, an unreadable or invalid
    /// one is logged and also yields defaults.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Some(path) => path,
                None => return Self::default(),
            },
        };

        if !path.exists() {
            if explicit.is_some() {
                tracing::warn!("Config file {} does not exist, using defaults", path.display());
            }
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// The configured date format, or the default when unset or unusable.
    pub fn effective_date_format(&self) -> &str {
        self.date_format
            .as_deref()
            .filter(|format| is_valid_date_format(format))
            .unwrap_or(DEFAULT_DATE_FORMAT)
    }

    /// Number of content lines shown on a card, within `1..=MAX_CONTENT_LINES`.
    pub fn effective_content_lines(&self) -> usize {
        self.content_lines
            .filter(|lines| *lines > 0)
            .map(|lines| lines.min(MAX_CONTENT_LINES))
            .unwrap_or(DEFAULT_CONTENT_LINES)
    }

    pub fn share_command(&self) -> Option<&str> {
        self.share
            .command
            .as_deref()
            .map(str::trim)
            .filter(|cmd| !cmd.is_empty())
    }

    pub fn validate(&self) -> BrainResult<()> {
        if let Some(format) = self.date_format.as_deref() {
            if !is_valid_date_format(format) {
                return Err(BrainError::Config(format!(
                    "invalid date_format '{}', using '{}'",
                    format, DEFAULT_DATE_FORMAT
                )));
            }
        }
        if let Some(lines) = self.content_lines {
            if lines > MAX_CONTENT_LINES {
                return Err(BrainError::Config(format!(
                    "content_lines {} exceeds {}, clamping",
                    lines, MAX_CONTENT_LINES
                )));
            }
        }
        if self.share.command.is_none() && !self.share.args.is_empty() {
            return Err(BrainError::Config(
                "share.args given without share.command".to_string(),
            ));
        }
        Ok(())
    }
}
