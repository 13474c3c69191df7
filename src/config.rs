use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::scanner::DEFAULT_SKIP_TITLES;

/// Pipeline configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PipelineConfig {
    /// Headings that bound spans but never start a recipe: category dividers
    /// and front-matter labels
    #[serde(default = "default_skip_titles")]
    pub skip_titles: Vec<String>,
    /// Fan per-span field extraction out over the rayon worker pool
    #[serde(default)]
    pub parallel: bool,
    /// 0-based half-open `[start, end)` line slice the binary applies before
    /// parsing, for corpora with front matter the pipeline should never see
    #[serde(default)]
    pub line_range: Option<[usize; 2]>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            skip_titles: default_skip_titles(),
            parallel: false,
            line_range: None,
        }
    }
}

fn default_skip_titles() -> Vec<String> {
    DEFAULT_SKIP_TITLES.iter().map(|t| t.to_string()).collect()
}

impl PipelineConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKBOOK__ prefix
    /// 2. cookbook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOKBOOK__PARALLEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// See [`PipelineConfig::load`].
pub fn load_config() -> Result<PipelineConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("cookbook").required(false))
        // Environment variables with COOKBOOK_ prefix
        // Use double underscore for nested: COOKBOOK__PARALLEL
        .add_source(
            Environment::with_prefix("COOKBOOK")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = PipelineConfig::default();
        assert!(!config.parallel);
        assert!(config.line_range.is_none());
        assert!(config.skip_titles.iter().any(|t| t == "DESSERTS"));
        assert!(config.skip_titles.iter().any(|t| t == "HOW TO MAKE GOOD BISCUITS"));
    }

    #[test]
    fn test_deserializes_from_empty_source() {
        // Every field has a serde default, so a missing config file is fine.
        let config: PipelineConfig = Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();
        assert_eq!(config.skip_titles, PipelineConfig::default().skip_titles);
    }

    #[test]
    fn test_load_config_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("COOKBOOK__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            std::env::remove_var(&key);
        }

        // With no config file present every field falls back to its default.
        let config = load_config().unwrap();
        assert!(!config.parallel);
        assert_eq!(config.skip_titles, default_skip_titles());
    }

    #[test]
    fn test_explicit_fields_override_defaults() {
        let config: PipelineConfig = Config::builder()
            .set_override("parallel", true)
            .unwrap()
            .set_override("line_range", vec![46i64, 1826])
            .unwrap()
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();
        assert!(config.parallel);
        assert_eq!(config.line_range, Some([46, 1826]));
    }
}
