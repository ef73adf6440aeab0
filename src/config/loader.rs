// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_OCR_BINARY, DEFAULT_OCR_LANGUAGE};
use crate::config::rules::{RuleSet, RulesConfig};
use crate::errors::{ConfigError, FailureStrategy};
use crate::observability::messages::config::{RuleValidationFailed, RulesResolved};
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure.
///
/// Every section is optional; an empty document yields the standard rule
/// revision, the default tesseract settings and plain-text export.
///
/// # Fields
/// * `rules` - Normalization rule revision and overrides
/// * `ocr` - OCR engine and image batch options
/// * `export` - Report output options
///
/// # Example
/// ```yaml
/// rules:
///   revision: standard
///   max_count: 500
/// ocr:
///   binary: tesseract
///   language: eng
///   timeout_seconds: 120
///   failure_strategy: continue_on_error
/// export:
///   format: json
/// ```
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub ocr: OcrConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Resolve the rule section against its revision preset.
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::from(&self.rules)
    }
}

/// OCR engine and batch options.
///
/// # Fields
/// * `binary` - tesseract executable (defaults to `tesseract` on `PATH`)
/// * `language` - tesseract language pack (defaults to `eng`)
/// * `timeout_seconds` - Per-image recognition timeout (optional, unbounded when unset)
/// * `failure_strategy` - What the batch does when one image fails
#[derive(Debug, Deserialize, Default, Clone)]
pub struct OcrConfig {
    pub binary: Option<String>,
    pub language: Option<String>,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
}

impl OcrConfig {
    pub fn get_binary(&self) -> &str {
        self.binary.as_deref().unwrap_or(DEFAULT_OCR_BINARY)
    }

    pub fn get_language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_OCR_LANGUAGE)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

/// Report output options.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
}

/// Report output format.
///
/// # Variants
/// * `Text` - Aligned plain-text columns
/// * `Json` - Pretty-printed JSON tables
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("Unknown export format: '{}'", other)),
        }
    }
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}

/// Parse a config from YAML text. An empty document is the default config.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let cfg: Config = serde_yaml::from_str(content)?;
    Ok(cfg)
}

/// Load a config from a YAML file and validate its rule set
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let source = path.as_ref().display().to_string();
    let cfg = load_config(path)?;
    validate_config(&cfg, &source)?;
    Ok(cfg)
}

/// Validate the rule set of an already loaded config.
pub fn validate_config(cfg: &Config, source: &str) -> Result<RuleSet, ConfigError> {
    let rules = cfg.rule_set();

    if let Err(errors) = crate::config::validate_rules(&rules) {
        for error in &errors {
            RuleValidationFailed {
                problem: &error.to_string(),
            }
            .log();
        }
        return Err(ConfigError::Validation(errors));
    }

    RulesResolved {
        source,
        revision: rules.revision.as_str(),
        pad_width: rules.pad_width,
        max_count: rules.max_count,
        keyword_count: rules.keywords().len(),
    }
    .log();

    Ok(rules)
}
