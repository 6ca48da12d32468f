//! Configuration management for the travel advisor
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::AdvisorError;
use crate::models::{BudgetTier, InterestCategory, SelectionState};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Config file shipped with the advisor, used when no user config exists
const DEFAULT_CONFIG_FILE: &str = "config/default.toml";

/// Root configuration structure for the travel advisor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Knowledge base configuration
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Initial form selection
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Knowledge base configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    /// Path of the knowledge base file consulted at startup
    #[serde(default = "default_knowledge_base_path")]
    pub path: PathBuf,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Selection the form starts with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default)]
    pub interest: InterestCategory,
}

// Default value functions
fn default_knowledge_base_path() -> PathBuf {
    PathBuf::from("travel_kb.pl")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: default_knowledge_base_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl DefaultsConfig {
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        SelectionState::new(self.budget, self.interest)
    }
}

impl AdvisorConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // An explicitly requested file must exist; the default locations are optional
        let required = config_path.is_some();
        let config_file = config_path.unwrap_or_else(Self::default_config_file);

        if required || config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(required)
                    .format(config::FileFormat::Toml),
            );
        }

        // Add environment variable overrides with TRAVEL_ADVISOR_ prefix
        builder = builder.add_source(
            Environment::with_prefix("TRAVEL_ADVISOR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| format!("Failed to build configuration from {}", config_file.display()))?;

        let mut config: AdvisorConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// The user config file if one exists, otherwise the shipped default
    #[must_use]
    pub fn default_config_file() -> PathBuf {
        Self::get_config_path()
            .filter(|path| path.exists())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-advisor").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.knowledge_base.path.as_os_str().is_empty() {
            self.knowledge_base.path = default_knowledge_base_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(AdvisorError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if self.knowledge_base.path.is_dir() {
            return Err(AdvisorError::config(format!(
                "Knowledge base path '{}' is a directory, expected a file",
                self.knowledge_base.path.display()
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.knowledge_base.path, PathBuf::from("travel_kb.pl"));
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(
            config.defaults.selection(),
            SelectionState::new(BudgetTier::Medium, InterestCategory::Beach)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AdvisorConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = AdvisorConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_rejects_directory_knowledge_base() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AdvisorConfig::default();
        config.knowledge_base.path = dir.path().to_path_buf();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_empty_values() {
        let mut config = AdvisorConfig::default();
        config.knowledge_base.path = PathBuf::new();
        config.logging.level = String::new();
        config.apply_defaults();
        assert_eq!(config.knowledge_base.path, PathBuf::from("travel_kb.pl"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[knowledge_base]
path = "data/custom_kb.pl"

[logging]
level = "debug"

[defaults]
budget = "high"
interest = "history"
"#
        )
        .unwrap();

        let config = AdvisorConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.knowledge_base.path, PathBuf::from("data/custom_kb.pl"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(
            config.defaults.selection(),
            SelectionState::new(BudgetTier::High, InterestCategory::History)
        );
    }

    #[test]
    fn test_load_from_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = AdvisorConfig::load_from_path(Some(dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_shipped_default_config_loads() {
        let shipped = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CONFIG_FILE);
        let config = AdvisorConfig::load_from_path(Some(shipped)).unwrap();
        let defaults = AdvisorConfig::default();
        assert_eq!(config.knowledge_base.path, defaults.knowledge_base.path);
        assert_eq!(config.logging.level, defaults.logging.level);
        assert_eq!(config.logging.format, defaults.logging.format);
        assert_eq!(config.defaults.selection(), defaults.defaults.selection());
    }

    #[test]
    fn test_fallback_is_shipped_default_without_user_config() {
        let user_config = AdvisorConfig::get_config_path().filter(|path| path.exists());
        let expected = user_config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(AdvisorConfig::default_config_file(), expected);
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AdvisorConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travel-advisor"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }
}
