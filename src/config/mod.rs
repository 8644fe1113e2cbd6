//! Configuration for loading skill tables and producing recommendations.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::network::NetworkConfig;
use crate::error::{CareerGraphError, Result};

/// Default directory holding one file per skill
pub const DEFAULT_DATA_DIR: &str = "data/softskills";

/// Default number of recommendations returned per query
pub const DEFAULT_NUM_RECOMMENDATIONS: usize = 10;

/// How the binary renders recommendations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned console table
    #[default]
    Table,
    /// JSON array of recommendations
    Json,
}

impl FromStr for OutputFormat {
    type Err = CareerGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CareerGraphError::ConfigError(format!(
                "Unknown output format '{other}', expected 'table' or 'json'"
            ))),
        }
    }
}

/// Configuration for the recommender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Directory containing the skill table files
    pub data_dir: PathBuf,
    /// Number of recommendations to return
    pub num_recommendations: usize,
    /// Group classification codes across tables in parallel
    pub parallel_network: bool,
    /// Minimum number of tables before parallel grouping is used
    pub parallel_threshold: usize,
    /// Show progress bars while loading files
    pub show_progress: bool,
    /// Output format used by the binary
    pub output_format: OutputFormat,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            num_recommendations: DEFAULT_NUM_RECOMMENDATIONS,
            parallel_network: true,
            parallel_threshold: NetworkConfig::default().parallel_threshold,
            show_progress: true,
            output_format: OutputFormat::Table,
        }
    }
}

impl RecommenderConfig {
    /// Create a new instance with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> RecommenderConfigBuilder {
        RecommenderConfigBuilder::new()
    }

    /// Defaults overridden by environment variables
    ///
    /// Reads `CAREER_DATA_DIR`, `CAREER_NUM_RECOMMENDATIONS`,
    /// `CAREER_PARALLEL` and `CAREER_OUTPUT`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Load a configuration from a JSON file; missing keys take their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CareerGraphError::io_error(e.kind(), "Failed to read configuration file", path)
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup, typically the process environment
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("CAREER_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(n) = lookup("CAREER_NUM_RECOMMENDATIONS") {
            self.num_recommendations = n.trim().parse().map_err(|_| {
                CareerGraphError::ConfigError(format!(
                    "CAREER_NUM_RECOMMENDATIONS must be a non-negative integer, got '{n}'"
                ))
            })?;
        }
        if let Some(flag) = lookup("CAREER_PARALLEL") {
            self.parallel_network = parse_flag(&flag).ok_or_else(|| {
                CareerGraphError::ConfigError(format!(
                    "CAREER_PARALLEL must be true or false, got '{flag}'"
                ))
            })?;
        }
        if let Some(format) = lookup("CAREER_OUTPUT") {
            self.output_format = format.parse()?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(CareerGraphError::ConfigError(
                "data_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Network construction settings derived from this configuration
    #[must_use]
    pub fn network_config(&self) -> NetworkConfig {
        NetworkConfig {
            parallel: self.parallel_network,
            parallel_threshold: self.parallel_threshold,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for constructing a [`RecommenderConfig`]
#[derive(Debug, Clone, Default)]
pub struct RecommenderConfigBuilder {
    config: RecommenderConfig,
}

impl RecommenderConfigBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the skill table directory
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.data_dir = dir.into();
        self
    }

    /// Set the number of recommendations
    #[must_use]
    pub fn num_recommendations(mut self, n: usize) -> Self {
        self.config.num_recommendations = n;
        self
    }

    /// Set whether codes are grouped in parallel
    #[must_use]
    pub fn parallel_network(mut self, parallel: bool) -> Self {
        self.config.parallel_network = parallel;
        self
    }

    /// Set the minimum table count for parallel grouping
    #[must_use]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.parallel_threshold = threshold;
        self
    }

    /// Set whether progress bars are shown
    #[must_use]
    pub fn show_progress(mut self, show: bool) -> Self {
        self.config.show_progress = show;
        self
    }

    /// Set the output format
    #[must_use]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RecommenderConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = RecommenderConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data/softskills"));
        assert_eq!(config.num_recommendations, 10);
        assert!(config.parallel_network);
        assert_eq!(config.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("CAREER_DATA_DIR", "/srv/skills"),
            ("CAREER_NUM_RECOMMENDATIONS", "3"),
            ("CAREER_PARALLEL", "off"),
            ("CAREER_OUTPUT", "JSON"),
        ]
        .into_iter()
        .collect();

        let config = RecommenderConfig::default()
            .with_env_overrides(|key| env.get(key).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/skills"));
        assert_eq!(config.num_recommendations, 3);
        assert!(!config.parallel_network);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_env_override_rejects_bad_count() {
        let result = RecommenderConfig::default().with_env_overrides(|key| {
            (key == "CAREER_NUM_RECOMMENDATIONS").then(|| "ten".to_string())
        });
        assert!(matches!(result, Err(CareerGraphError::ConfigError(_))));
    }

    #[test]
    fn test_builder_and_json_defaults() {
        let config = RecommenderConfig::builder()
            .data_dir("skills")
            .num_recommendations(5)
            .show_progress(false)
            .build()
            .unwrap();
        assert_eq!(config.num_recommendations, 5);
        assert!(!config.show_progress);

        let parsed: RecommenderConfig =
            serde_json::from_str(r#"{"num_recommendations": 7, "output_format": "json"}"#).unwrap();
        assert_eq!(parsed.num_recommendations, 7);
        assert_eq!(parsed.output_format, OutputFormat::Json);
        assert_eq!(parsed.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn test_empty_data_dir_is_rejected() {
        assert!(RecommenderConfig::builder().data_dir("").build().is_err());
    }
}
