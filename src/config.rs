//! Configuration management for careerpath

use crate::error::{CareerPathError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub extraction: ExtractionConfig,
    pub recommendations: RecommendationConfig,
    pub output: OutputConfig,
}

/// Weights used by the match scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub required_weight: f64,
    pub preferred_weight: f64,
    /// Multiplier applied to the base score unless the title bonus is an exact role match
    pub unmatched_title_damping: f64,
    pub experience_bonus_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of characters of resume text kept on the parsed profile
    pub raw_excerpt_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationConfig {
    pub top_n: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            required_weight: 0.7,
            preferred_weight: 0.3,
            unmatched_title_damping: 0.7,
            experience_bonus_weight: 0.2,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            raw_excerpt_chars: 1000,
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            catalog_path: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Console
    }
}

impl Config {
    /// Load the configuration from the default location, writing defaults on first use.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| CareerPathError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("No configuration at {}, writing defaults", config_path.display());
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CareerPathError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("careerpath")
            .join("config.toml")
    }

    /// Reject weights that would push a match score outside of [0, 1].
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        let weights = [
            ("scoring.required_weight", scoring.required_weight),
            ("scoring.preferred_weight", scoring.preferred_weight),
            ("scoring.unmatched_title_damping", scoring.unmatched_title_damping),
            ("scoring.experience_bonus_weight", scoring.experience_bonus_weight),
        ];

        for (key, value) in weights {
            if !(0.0..=1.0).contains(&value) {
                return Err(CareerPathError::Configuration(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    key, value
                )));
            }
        }

        if scoring.required_weight + scoring.preferred_weight > 1.0 + f64::EPSILON {
            return Err(CareerPathError::Configuration(
                "scoring.required_weight + scoring.preferred_weight must not exceed 1.0".to_string(),
            ));
        }

        if self.recommendations.top_n == 0 {
            return Err(CareerPathError::Configuration(
                "recommendations.top_n must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scoring.required_weight, 0.7);
        assert_eq!(config.recommendations.top_n, 5);
        assert_eq!(config.extraction.raw_excerpt_chars, 1000);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.recommendations.top_n = 3;
        config.recommendations.catalog_path = Some(PathBuf::from("/tmp/catalog.toml"));
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[recommendations]\ntop_n = 10\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.recommendations.top_n, 10);
        assert_eq!(config.scoring, ScoringConfig::default());
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let mut config = Config::default();
        config.scoring.required_weight = 0.9;
        assert!(matches!(config.validate(), Err(CareerPathError::Configuration(_))));

        config.scoring.required_weight = -0.1;
        assert!(config.validate().is_err());
    }
}
