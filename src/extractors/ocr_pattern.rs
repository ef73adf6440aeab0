// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pattern scan for OCR output.
//!
//! Recognized text rarely has reliable delimiters (`45-2BOX 7` is typical), so
//! instead of splitting, the extractor scans for keyword literals and digit runs
//! anywhere in the text, case-insensitively. A digit run is 1 to `pad_width`
//! digits, optionally followed by `-` or one to three dots and up to five count
//! digits. Multi-word keywords accept any whitespace between their words.

use regex::Regex;

use crate::config::consts::MAX_COUNT_DIGITS;
use crate::config::RuleSet;
use crate::errors::ConfigError;
use crate::traits::TokenExtractor;

/// OCR pattern extractor - scans recognized text for keywords and digit runs
pub struct OcrPatternExtractor {
    pattern: Regex,
}

impl OcrPatternExtractor {
    pub fn new(rules: &RuleSet) -> Result<Self, ConfigError> {
        let pattern = Regex::new(&build_pattern(rules))?;
        Ok(Self { pattern })
    }
}

fn build_pattern(rules: &RuleSet) -> String {
    // Keywords come first and longest first so `HALF OFF` wins over `HALF`
    let mut alternatives: Vec<String> = rules
        .keywords()
        .iter()
        .map(|keyword| {
            keyword
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();

    alternatives.push(format!(
        r"\d{{1,{}}}(?:(?:\.{{1,3}}|-)\d{{1,{}}})?",
        rules.pad_width, MAX_COUNT_DIGITS
    ));

    format!("(?i)(?:{})", alternatives.join("|"))
}

impl TokenExtractor for OcrPatternExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
            .collect()
    }

    fn name(&self) -> &'static str {
        "ocr_pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<String> {
        OcrPatternExtractor::new(&RuleSet::standard())
            .unwrap()
            .extract(text)
    }

    #[test]
    fn finds_tokens_without_delimiters() {
        assert_eq!(extract("45-2BOX 7"), vec!["45-2", "BOX", "7"]);
    }

    #[test]
    fn keeps_dotted_counts_together() {
        assert_eq!(extract("123...4 | 56.7"), vec!["123...4", "56.7"]);
    }

    #[test]
    fn matches_keywords_case_insensitively() {
        assert_eq!(extract("half  off\nFull box"), vec!["half off", "Full", "box"]);
    }

    #[test]
    fn long_digit_runs_are_chunked() {
        assert_eq!(extract("123456"), vec!["123", "456"]);
    }

    #[test]
    fn legacy_rules_scan_digits_only() {
        let extractor = OcrPatternExtractor::new(&RuleSet::legacy()).unwrap();
        assert_eq!(extractor.extract("BOX 45"), vec!["45"]);
    }
}
