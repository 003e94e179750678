//! Configuration for the radar validator
//!
//! Settings are read from an optional JSON file so CI jobs can point the
//! checker at a different dataset or switch report formats without touching
//! the command line. Missing or malformed files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::radar::DEFAULT_RADAR_PATH;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Complete validator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Dataset to validate, relative to the working directory
    pub radar_path: PathBuf,
    /// How reports are printed
    pub report_format: ReportFormat,
    /// Log level for the stderr subscriber (`error`..`trace`)
    pub log_level: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            radar_path: PathBuf::from(DEFAULT_RADAR_PATH),
            report_format: ReportFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or defaults when the file cannot be read or
    /// parsed.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let parsed = fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {err}", path.display()))
            .and_then(|contents| {
                serde_json::from_str::<Self>(&contents)
                    .map_err(|err| format!("invalid JSON in {}: {err}", path.display()))
            });

        match parsed {
            Ok(config) => {
                log::info!(
                    "[ValidatorConfig] Using validator settings from {}",
                    path.display()
                );
                config
            }
            Err(reason) => {
                log::warn!("[ValidatorConfig] {reason}. Using default validator settings.");
                Self::default()
            }
        }
    }

    /// Parsed log level, falling back to WARN for unknown names.
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .trim()
            .parse()
            .unwrap_or(tracing::Level::WARN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert_eq!(config.radar_path, PathBuf::from("platform-tech-radar.json"));
        assert_eq!(config.report_format, ReportFormat::Table);
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"report_format": "json", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);
        assert_eq!(config.radar_path, PathBuf::from(DEFAULT_RADAR_PATH));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = ValidatorConfig {
            log_level: "chatty".to_string(),
            ..ValidatorConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_missing_file_returns_defaults() {
        let path = std::env::temp_dir().join(format!(
            "radar-config-missing-{}.json",
            std::process::id()
        ));
        assert_eq!(
            ValidatorConfig::load_from_file(path),
            ValidatorConfig::default()
        );
    }

    #[test]
    fn test_malformed_file_returns_defaults() {
        let path = std::env::temp_dir().join(format!(
            "radar-config-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"report_format": "#).unwrap();
        let config = ValidatorConfig::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path =
            std::env::temp_dir().join(format!("radar-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"radar_path": "data/radar.json"}"#).unwrap();
        let config = ValidatorConfig::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.radar_path, PathBuf::from("data/radar.json"));
        assert_eq!(config.report_format, ReportFormat::Table);
    }
}
