//! # Configuration
//!
//! Loads the optional `config.yaml`. Every section has defaults, so a missing
//! file or a partial file both produce a usable configuration.

use crate::domain::paths;
use crate::domain::types::LookupPolicy;
use crate::strings::logs;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub export: ExportConfig,
    pub lookups: LookupConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Unmatched answer combinations become errors instead of defaults.
    pub strict: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReportConfig {
    /// Footer lines printed between the closing rules of the report.
    pub attribution: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            attribution: vec![default_attribution()],
        }
    }
}

fn default_attribution() -> String {
    "Generated by GTM Strategy Generator".to_string()
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub filter: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context(logs::CONFIG_PARSE_ERROR)
    }

    /// Reads `explicit` when given (it must exist), otherwise the first
    /// existing candidate path, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::read(path);
        }
        for candidate in paths::config_candidates() {
            if candidate.is_file() {
                return Self::read(&candidate);
            }
        }
        tracing::debug!("{}", logs::CONFIG_DEFAULTS);
        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| logs::config_read_error(&path.display().to_string()))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!("{}", logs::config_loaded(&path.display().to_string()));
        Ok(config)
    }

    pub fn lookup_policy(&self) -> LookupPolicy {
        if self.lookups.strict {
            LookupPolicy::Strict
        } else {
            LookupPolicy::Lenient
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = AppConfig::from_yaml("").expect("empty config");
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert_eq!(config.lookup_policy(), LookupPolicy::Lenient);
        assert_eq!(config.report.attribution, vec![default_attribution()]);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = AppConfig::from_yaml("lookups:\n  strict: true\nexport:\n  directory: out\n")
            .expect("valid config");
        assert_eq!(config.lookup_policy(), LookupPolicy::Strict);
        assert_eq!(config.export.directory, PathBuf::from("out"));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("lookups: [unclosed").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        fs::write(&path, "report:\n  attribution:\n    - Made by Acme\n").expect("write config");

        let config = AppConfig::load(Some(&path)).expect("load config");
        assert_eq!(config.report.attribution, vec!["Made by Acme".to_string()]);

        let missing = dir.path().join("absent.yaml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }
}
