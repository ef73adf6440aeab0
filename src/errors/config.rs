// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Problems found while validating a resolved rule set
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Numeric bases must allow at least one digit
    #[error("min_digits must be at least 1, got {min_digits}")]
    MinDigitsTooSmall { min_digits: usize },

    /// The digit range is empty or the pad width is out of bounds
    #[error("pad_width must be between min_digits ({min_digits}) and {maximum}, got {pad_width}")]
    PadWidthOutOfRange {
        pad_width: usize,
        min_digits: usize,
        maximum: usize,
    },

    /// Repeat counts are clamped into `1..=max_count`
    #[error("max_count must be at least 1, got {max_count}")]
    MaxCountTooSmall { max_count: u32 },

    /// A keyword literal that could never be matched or rendered unambiguously
    #[error("Invalid keyword '{keyword}': {reason}")]
    InvalidKeyword { keyword: String, reason: &'static str },

    /// The same keyword listed twice (compared upper-cased)
    #[error("Duplicate keyword: '{keyword}'")]
    DuplicateKeyword { keyword: String },
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// Token pattern built from the keyword vocabulary did not compile
    #[error("Invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
