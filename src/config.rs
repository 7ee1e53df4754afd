//! Configuration management for the CV matcher

use crate::error::{CvMatcherError, Result};
use crate::processing::advisor::default_recommended_skills;
use crate::processing::catalog::{default_catalog, JobPosting};
use crate::processing::vocabulary::Vocabulary;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub vocabulary: Vocabulary,
    pub catalog: Vec<JobPosting>,
    pub advice: AdviceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    pub recommended_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub pretty_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            catalog: default_catalog(),
            advice: AdviceConfig {
                recommended_skills: default_recommended_skills(),
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                pretty_json: true,
            },
        }
    }
}

impl Config {
    /// Load from the user config directory, writing the defaults on first use
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::from_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CvMatcherError::Configuration(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| CvMatcherError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Overwrite the stored configuration with the defaults
    pub fn reset() -> Result<Self> {
        let config = Self::default();
        config.save()?;
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("cv-matcher")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        for (category, keywords) in self.vocabulary.categories() {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CvMatcherError::Configuration(format!(
                    "Blank keyword in {} vocabulary",
                    category
                )));
            }
        }

        for (index, job) in self.catalog.iter().enumerate() {
            if job.title.trim().is_empty() {
                return Err(CvMatcherError::Configuration(format!(
                    "Catalog entry {} has an empty title",
                    index + 1
                )));
            }
            if job.required_degree.trim().is_empty() {
                return Err(CvMatcherError::Configuration(format!(
                    "Catalog entry '{}' has an empty required degree",
                    job.title
                )));
            }
        }

        Ok(())
    }

    pub fn get_job_by_title(&self, title: &str) -> Option<&JobPosting> {
        self.catalog.iter().find(|job| job.title == title)
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
        assert_eq!(config.catalog.len(), 3);
        assert_eq!(config.catalog[0].title, "Investment Analyst");
        assert!(config.get_job_by_title("Financial Analyst").is_some());
    }

    #[test]
    fn test_round_trip_through_toml_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.catalog.reverse();
        config.output.format = OutputFormat::Markdown;
        config.save_to(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.catalog, config.catalog);
        assert_eq!(loaded.vocabulary, config.vocabulary);
        assert_eq!(loaded.output.format, OutputFormat::Markdown);
    }

    #[test]
    fn test_rejects_empty_degree() {
        let mut config = Config::default();
        config.catalog[1].required_degree = "  ".to_string();
        assert!(matches!(config.validate(), Err(CvMatcherError::Configuration(_))));
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let mut config = Config::default();
        config.vocabulary.experiences.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "catalog = 42").unwrap();
        assert!(matches!(Config::from_file(&path), Err(CvMatcherError::Configuration(_))));
    }
}
