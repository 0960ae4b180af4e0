//! Application Configuration
//! Optional TOML file with window and input-hint settings.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "gpa_calculator.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for the calculator window. Every field has a default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// Lower end of the suggested units range (hint only)
    pub min_units_hint: i64,
    /// Upper end of the suggested units range (hint only)
    pub max_units_hint: i64,
    /// Used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "GPA Calculator".to_string(),
            window_width: 720.0,
            window_height: 640.0,
            min_units_hint: 1,
            max_units_hint: 10,
            log_filter: "gpa_calculator=info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `gpa_calculator.toml` from `dir`. `Ok(None)` when there is no such file.
    pub fn discover_in(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.min_units_hint > self.max_units_hint {
            return Err(ConfigError::Invalid(format!(
                "min_units_hint ({}) exceeds max_units_hint ({})",
                self.min_units_hint, self.max_units_hint
            )));
        }
        Ok(())
    }

    /// Hover text describing the suggested units range.
    pub fn units_hint(&self) -> String {
        format!(
            "Suggested range: {}-{}",
            self.min_units_hint, self.max_units_hint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = AppConfig::from_toml_str(
            r#"
            window_title = "My GPA"
            max_units_hint = 6
            "#,
        )
        .unwrap();
        assert_eq!(config.window_title, "My GPA");
        assert_eq!(config.max_units_hint, 6);
        assert_eq!(config.min_units_hint, 1);
        assert_eq!(config.window_width, 720.0);
    }

    #[test]
    fn rejects_inverted_units_range() {
        let err = AppConfig::from_toml_str("min_units_hint = 8\nmax_units_hint = 2").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_non_positive_window() {
        let err = AppConfig::from_toml_str("window_width = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = AppConfig::from_toml_str("window_title = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "window_height = 500.0").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.window_height, 500.0);
    }

    #[test]
    fn discover_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::discover_in(dir.path()).unwrap().is_none());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "min_units_hint = 99").unwrap();
        assert!(matches!(
            AppConfig::discover_in(dir.path()),
            Err(ConfigError::Invalid(_))
        ));

        fs::write(dir.path().join(CONFIG_FILE_NAME), "window_title = \"Semester 1\"").unwrap();
        let config = AppConfig::discover_in(dir.path()).unwrap().unwrap();
        assert_eq!(config.window_title, "Semester 1");
    }

    #[test]
    fn units_hint_mentions_range() {
        assert_eq!(AppConfig::default().units_hint(), "Suggested range: 1-10");
    }
}
