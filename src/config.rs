// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for remediationbot
//!
//! Configuration is an optional TOML file; every section and key has a
//! default, and command-line flags override what the file says.

use crate::error::{RemediationError, Result};
use crate::report::OutputFormat;
use crate::tips::MemoryTipStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tip repository settings
    #[serde(default)]
    pub tips: TipsConfig,

    /// Report rendering settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Tip repository configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipsConfig {
    /// JSON tip catalog loaded ahead of the defaults
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Fill gaps with the built-in default tips
    #[serde(default = "default_true")]
    pub seed_defaults: bool,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            seed_defaults: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level used when not running verbose
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        self.output_format()?;
        match self.log.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(RemediationError::Config(format!(
                "Unknown log level: {}",
                other
            ))),
        }
    }

    /// Configured report format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.report
            .format
            .parse::<OutputFormat>()
            .map_err(RemediationError::Config)
    }

    /// Build the tip store described by this configuration.
    ///
    /// Catalog entries are inserted first so they win over defaults for
    /// the same (issue type, severity).
    pub fn tip_store(&self) -> Result<MemoryTipStore> {
        let mut store = MemoryTipStore::new();
        if let Some(ref catalog) = self.tips.catalog {
            store.load_catalog(catalog)?;
        }
        if self.tips.seed_defaults {
            store.seed_defaults();
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Impact;
    use crate::rules::IssueType;
    use crate::tips::find_tip;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.tips.catalog.is_none());
        assert!(config.tips.seed_defaults);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.tip_store().unwrap().len(), 10);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert!(config.tips.seed_defaults);
        assert_eq!(config.report.format, "text");
    }

    #[test]
    fn test_parse_sections() {
        let config = Config::from_toml(
            r#"
            [tips]
            seed_defaults = false

            [report]
            format = "json"

            [log]
            level = "debug"
            "#,
        )
        .unwrap();
        assert!(!config.tips.seed_defaults);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(config.tip_store().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml("[report]\nformat = \"pdf\"").is_err());
        assert!(Config::from_toml("[log]\nlevel = \"loud\"").is_err());
        assert!(Config::from_toml("[tips\n").is_err());
    }

    #[test]
    fn test_catalog_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("tips.json");
        std::fs::write(
            &catalog,
            r#"[{ "issue_type": "img_alt", "severity": "serious", "solution": "House style alt text" }]"#,
        )
        .unwrap();

        let config = Config {
            tips: TipsConfig {
                catalog: Some(catalog),
                seed_defaults: true,
            },
            ..Config::default()
        };
        let store = config.tip_store().unwrap();
        assert_eq!(store.len(), 10);

        let tip = find_tip(&store, IssueType::ImgAlt, Impact::Serious, "image-alt").unwrap();
        assert_eq!(tip.solution, "House style alt text");
    }

    #[test]
    fn test_missing_catalog_is_an_error() {
        let config = Config {
            tips: TipsConfig {
                catalog: Some(PathBuf::from("/nonexistent/tips.json")),
                seed_defaults: true,
            },
            ..Config::default()
        };
        assert!(config.tip_store().is_err());
    }
}
