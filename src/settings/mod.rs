//! Recorder settings
//! Configuration-driven options, set one at a time (`set debug=on`) or
//! loaded from a settings file

pub mod definitions;
pub mod descriptor;
pub mod registry;

pub use definitions::create_settings_registry;
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;

use crate::error::{ErrorType, Result, RiftError};
use std::path::Path;

/// Options controlling the command recorder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderSettings {
    /// Master switch; when off no command is recorded
    pub enabled: bool,
    /// Log every finalized command at info level
    pub debug: bool,
    /// Largest repeat count accepted from a recorded key vector; `None` is
    /// no limit
    pub max_count: Option<usize>,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: false,
            max_count: None,
        }
    }
}

impl RecorderSettings {
    /// Set one option from its string value
    pub fn apply(&mut self, name: &str, value: &str) -> Result<()> {
        create_settings_registry()
            .apply(name, value, self)
            .map_err(RiftError::from)
    }

    /// Apply one settings line: `set name=value`, `name=value`, `name`, or `noname`
    pub fn apply_line(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        let body = line
            .strip_prefix("set ")
            .or_else(|| line.strip_prefix("se "))
            .unwrap_or(line)
            .trim();

        let registry = create_settings_registry();
        let result = match body.split_once('=') {
            Some((name, value)) => registry.apply(name, value, self),
            None => registry.apply_flag(body, self),
        };
        result.map_err(RiftError::from)
    }

    /// Apply every assignment in `text`
    ///
    /// Blank lines and `"` comments are skipped. Every bad line is reported,
    /// each tagged with its line number; good lines still apply.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        let mut failures = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('"') {
                continue;
            }
            if let Err(err) = self.apply_line(trimmed) {
                failures.push(format!("line {}: {}", index + 1, err.message));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RiftError::new(
                ErrorType::Settings,
                "SETTINGS_LOAD_FAILED",
                failures.join("; "),
            ))
        }
    }

    /// Load settings from a file on disk
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let text = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading recorder settings");
        self.load_str(&text)
    }
}
