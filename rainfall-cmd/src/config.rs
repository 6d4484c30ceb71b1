//! TOML configuration.
//!
//! ```toml
//! [dataset]
//! source = "fixtures/precipitations.csv"   # path or http(s) URL
//! start_year = 1970
//! round_precision = 1
//!
//! [kmeans]
//! clusters = 5
//! ```
//!
//! Every key is optional; a missing file means all defaults.

use anyhow::Context;
use log::info;
use rainfall_core::MAX_ROUND_PRECISION;
use serde::Deserialize;
use std::path::Path;

/// Monthly rainfall of Barcelona since 1786, published by the city's open data portal.
pub const BARCELONA_DATASET_URL: &str = "https://opendata-ajuntament.barcelona.cat/data/dataset/5334c15e-0d70-410b-85f3-d97740ffc1ed/resource/6f1fb778-0767-478b-b332-c64a833d26d2/download/precipitacionsbarcelonadesde1786.csv";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub kmeans: KmeansConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatasetConfig {
    /// File path or http(s) URL of the monthly rainfall CSV.
    pub source: String,
    /// Years before this one are left out of every table.
    pub start_year: i32,
    /// Decimals kept on rainfall values and statistics, at most 15.
    pub round_precision: u32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: BARCELONA_DATASET_URL.to_string(),
            start_year: 1970,
            round_precision: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct KmeansConfig {
    pub clusters: usize,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self { clusters: 5 }
    }
}

impl Config {
    /// Read the configuration file, falling back to defaults when it is absent.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(content)?;
        anyhow::ensure!(
            config.dataset.round_precision <= MAX_ROUND_PRECISION,
            "round_precision must be at most {}, got {}",
            MAX_ROUND_PRECISION,
            config.dataset.round_precision
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dataset.start_year, 1970);
        assert_eq!(config.dataset.round_precision, 1);
        assert_eq!(config.kmeans.clusters, 5);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
[dataset]
source = "data/rain.csv"
round_precision = 2
"#,
        )
        .unwrap();
        assert_eq!(config.dataset.source, "data/rain.csv");
        assert_eq!(config.dataset.round_precision, 2);
        assert_eq!(config.dataset.start_year, 1970);
        assert_eq!(config.kmeans, KmeansConfig::default());
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::from_toml_str("[dataset]\nstart_year = \"soon\"\n").is_err());
    }

    #[test]
    fn rejects_excessive_round_precision() {
        let err = Config::from_toml_str("[dataset]\nround_precision = 400\n").unwrap_err();
        assert!(err.to_string().contains("round_precision must be at most 15"));
        let config = Config::from_toml_str("[dataset]\nround_precision = 15\n").unwrap();
        assert_eq!(config.dataset.round_precision, 15);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load("does/not/exist/rainfall.toml").unwrap();
        assert_eq!(config, Config::default());
    }
}
