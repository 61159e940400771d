//! Configuration types for the email filter.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration for the email filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Which lines to write out
    pub output: OutputMode,

    /// Strip surrounding whitespace before lookup
    pub trim_whitespace: bool,

    /// Drop lines that are empty after trimming
    pub skip_blank: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            output: OutputMode::Humans,
            trim_whitespace: true,
            skip_blank: true,
        }
    }
}

impl FilterConfig {
    /// Load configuration from a JSON or YAML file, picked by extension.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;

        let config = if path.extension().is_some_and(|e| e == "yaml" || e == "yml") {
            serde_yaml::from_str(&content)
                .with_context(|| format!("parsing YAML config {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("parsing JSON config {}", path.display()))?
        };

        Ok(config)
    }
}

/// Output modes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Only addresses that are not known bots
    #[default]
    Humans,
    /// Only known bot addresses
    Bots,
    /// Every address, prefixed with its verdict
    Annotated,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.output, OutputMode::Humans);
        assert!(config.trim_whitespace);
        assert!(config.skip_blank);
    }

    #[test]
    fn test_partial_json() {
        let config: FilterConfig = serde_json::from_str(r#"{"output": "annotated"}"#).unwrap();
        assert_eq!(config.output, OutputMode::Annotated);
        assert!(config.trim_whitespace);
    }

    #[test]
    fn test_yaml() {
        let yaml = "output: bots\nskip_blank: false\n";
        let config: FilterConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.output, OutputMode::Bots);
        assert!(!config.skip_blank);
    }

    #[test]
    fn test_config_serialization() {
        let config = FilterConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FilterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file() {
        let err = FilterConfig::from_path(Path::new("/nonexistent/filter.json")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
