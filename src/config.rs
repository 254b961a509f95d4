//! Configuration file support for review-sentiment.
//!
//! Provides YAML-based configuration through `review-sentiment.config.yml`
//! files, validation, and the merge of file values with command-line
//! overrides into the effective [`Settings`].

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::{AnalyzeRequest, OutputFormat};
use crate::sentiment_analysis::services::AggregatorConfig;
use crate::shared::error::SentimentError;
use crate::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "review-sentiment.config.yml";

pub const DEFAULT_REVIEW_SERVICE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LEXICON_ENDPOINT: &str = "http://localhost:8000/vader";
pub const DEFAULT_TRANSFORMER_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment";
pub const DEFAULT_API_TOKEN_ENV: &str = "HF_API_TOKEN";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_COUNTRY: &str = "us";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub review_source: Option<ReviewSourceSection>,
    pub lexicon: Option<LexiconSection>,
    pub transformer: Option<TransformerSection>,
    pub aggregation: Option<AggregationSection>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ReviewSourceSection {
    pub base_url: Option<String>,
    pub lang: Option<String>,
    pub country: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct LexiconSection {
    pub endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct TransformerSection {
    pub endpoint: Option<String>,
    /// Name of the environment variable holding the bearer token
    pub api_token_env: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AggregationSection {
    pub transformer_threshold: Option<f64>,
    pub low_confidence_cutoff: Option<f64>,
    pub max_concurrent_scoring: Option<usize>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "Config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        SentimentError::ConfigError {
            path: path.to_path_buf(),
            details: format!(
                "{}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                e
            ),
        }
    })?;

    validate_config(&config).map_err(|e| SentimentError::ConfigError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Loads the explicit config file, or discovers one in `dir`
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

fn check_unit_interval(name: &str, value: Option<f64>) -> Result<()> {
    if let Some(value) = value {
        if !(0.0..=1.0).contains(&value) {
            bail!("{} must be between 0 and 1, got {}", name, value);
        }
    }
    Ok(())
}

fn check_not_blank(name: &str, value: Option<&String>) -> Result<()> {
    if value.is_some_and(|v| v.trim().is_empty()) {
        bail!("{} must not be empty", name);
    }
    Ok(())
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(source) = &config.review_source {
        check_not_blank("review_source.base_url", source.base_url.as_ref())?;
        check_not_blank("review_source.lang", source.lang.as_ref())?;
        check_not_blank("review_source.country", source.country.as_ref())?;
        if source.count == Some(0) {
            bail!("review_source.count must be at least 1");
        }
    }
    if let Some(lexicon) = &config.lexicon {
        check_not_blank("lexicon.endpoint", lexicon.endpoint.as_ref())?;
    }
    if let Some(transformer) = &config.transformer {
        check_not_blank("transformer.endpoint", transformer.endpoint.as_ref())?;
        check_not_blank("transformer.api_token_env", transformer.api_token_env.as_ref())?;
    }
    if let Some(aggregation) = &config.aggregation {
        check_unit_interval(
            "aggregation.transformer_threshold",
            aggregation.transformer_threshold,
        )?;
        check_unit_interval(
            "aggregation.low_confidence_cutoff",
            aggregation.low_confidence_cutoff,
        )?;
        if aggregation.max_concurrent_scoring == Some(0) {
            bail!("aggregation.max_concurrent_scoring must be at least 1");
        }
    }
    if let Some(format) = &config.format {
        format
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("format: {}", e))?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; `None` falls back to the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub review_count: Option<usize>,
    pub transformer_threshold: Option<f64>,
    pub output: Option<PathBuf>,
}

/// Effective settings after merging CLI > config file > defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub review_service_url: String,
    pub lang: String,
    pub country: String,
    pub review_count: usize,
    pub lexicon_endpoint: String,
    pub transformer_endpoint: String,
    pub api_token_env: String,
    pub aggregation: AggregatorConfig,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(config: Option<ConfigFile>, overrides: Overrides) -> Result<Self> {
        let config = config.unwrap_or_default();
        let source = config.review_source.unwrap_or_default();
        let lexicon = config.lexicon.unwrap_or_default();
        let transformer = config.transformer.unwrap_or_default();
        let aggregation = config.aggregation.unwrap_or_default();

        let file_format = config
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(|e| SentimentError::Validation { message: e })?;

        let defaults = AggregatorConfig::default();
        let aggregation = AggregatorConfig {
            transformer_threshold: overrides
                .transformer_threshold
                .or(aggregation.transformer_threshold)
                .unwrap_or(defaults.transformer_threshold),
            low_confidence_cutoff: aggregation
                .low_confidence_cutoff
                .unwrap_or(defaults.low_confidence_cutoff),
            max_concurrent_scoring: aggregation
                .max_concurrent_scoring
                .unwrap_or(defaults.max_concurrent_scoring),
        };
        aggregation.validate()?;

        let review_count = overrides
            .review_count
            .or(source.count)
            .unwrap_or(AnalyzeRequest::DEFAULT_REVIEW_COUNT);
        if review_count == 0 {
            return Err(SentimentError::Validation {
                message: "Review count must be at least 1".to_string(),
            }
            .into());
        }

        Ok(Self {
            review_service_url: source
                .base_url
                .unwrap_or_else(|| DEFAULT_REVIEW_SERVICE_URL.to_string()),
            lang: source.lang.unwrap_or_else(|| DEFAULT_LANG.to_string()),
            country: source.country.unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
            review_count,
            lexicon_endpoint: lexicon
                .endpoint
                .unwrap_or_else(|| DEFAULT_LEXICON_ENDPOINT.to_string()),
            transformer_endpoint: transformer
                .endpoint
                .unwrap_or_else(|| DEFAULT_TRANSFORMER_ENDPOINT.to_string()),
            api_token_env: transformer
                .api_token_env
                .unwrap_or_else(|| DEFAULT_API_TOKEN_ENV.to_string()),
            aggregation,
            format: overrides.format.or(file_format).unwrap_or_default(),
            output: overrides.output,
        })
    }

    /// Bearer token from the configured environment variable, if set
    pub fn api_token(&self) -> Option<String> {
        std::env::var(&self.api_token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}
