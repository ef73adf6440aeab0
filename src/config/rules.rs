// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Versioned normalization rules.
//!
//! Over its lifetime the tallying application shipped several incompatible rule
//! sets: two- versus three-digit bases, a count ceiling of 10 versus 500, with and
//! without keyword markers. Rather than branching inside the normalizer, each
//! rule set is a named [`RuleRevision`] preset that YAML can select and then
//! override field by field.
//!
//! # Example
//! ```yaml
//! rules:
//!   revision: legacy
//!   max_count: 20
//! ```

use serde::Deserialize;

use crate::config::consts::{
    DEFAULT_KEYWORDS, DEFAULT_MAX_COUNT, DEFAULT_MIN_DIGITS, DEFAULT_PAD_WIDTH,
    LEGACY_MAX_COUNT, LEGACY_MIN_DIGITS,
};

/// Named rule preset.
///
/// # Variants
/// * `Standard` - 1 to 3 digit bases, counts up to 500, keyword markers enabled
/// * `Legacy` - 2 to 3 digit bases, counts up to 10, no keywords
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum RuleRevision {
    #[default]
    Standard,
    Legacy,
}

impl RuleRevision {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleRevision::Standard => "standard",
            RuleRevision::Legacy => "legacy",
        }
    }
}

/// Rule section as written in YAML. Unset fields fall back to the revision preset.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RulesConfig {
    #[serde(default)]
    pub revision: RuleRevision,
    pub pad_width: Option<usize>,
    pub min_digits: Option<usize>,
    pub max_count: Option<u32>,
    pub keywords: Option<Vec<String>>,
}

/// Fully resolved normalization rules.
///
/// Keywords are stored upper-cased and ordered longest first so prefix matching
/// prefers `HALF OFF` over `HALF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub revision: RuleRevision,
    pub pad_width: usize,
    pub min_digits: usize,
    pub max_count: u32,
    keywords: Vec<String>,
}

impl RuleSet {
    pub fn new(
        revision: RuleRevision,
        pad_width: usize,
        min_digits: usize,
        max_count: u32,
        keywords: Vec<String>,
    ) -> Self {
        let mut keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.trim().to_uppercase())
            .collect();
        // Stable sort keeps the configured order among keywords of equal length
        keywords.sort_by(|a, b| b.len().cmp(&a.len()));

        Self {
            revision,
            pad_width,
            min_digits,
            max_count,
            keywords,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            RuleRevision::Standard,
            DEFAULT_PAD_WIDTH,
            DEFAULT_MIN_DIGITS,
            DEFAULT_MAX_COUNT,
            DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        )
    }

    pub fn legacy() -> Self {
        Self::new(
            RuleRevision::Legacy,
            DEFAULT_PAD_WIDTH,
            LEGACY_MIN_DIGITS,
            LEGACY_MAX_COUNT,
            Vec::new(),
        )
    }

    pub fn for_revision(revision: RuleRevision) -> Self {
        match revision {
            RuleRevision::Standard => Self::standard(),
            RuleRevision::Legacy => Self::legacy(),
        }
    }

    /// Keyword literals, upper-cased, longest first.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn keywords_enabled(&self) -> bool {
        !self.keywords.is_empty()
    }

    /// Longest keyword the (already upper-cased) token starts with, provided the
    /// keyword is not followed by another letter. Trailing digits are allowed
    /// (`BOX2` is `BOX`).
    pub fn keyword_prefix_of(&self, token: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| {
                token.strip_prefix(k.as_str()).map_or(false, |rest| {
                    !rest.starts_with(|c: char| c.is_ascii_alphabetic())
                })
            })
            .map(|k| k.as_str())
    }

    /// Keyword equal to the token, ignoring ASCII case.
    pub fn keyword_exactly(&self, token: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| k.eq_ignore_ascii_case(token))
            .map(|k| k.as_str())
    }

    /// Clamp a parsed repeat count into `1..=max_count`.
    pub fn clamp_count(&self, requested: u64) -> u32 {
        let ceiling = self.max_count.max(1);
        requested.max(1).min(u64::from(ceiling)) as u32
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<&RulesConfig> for RuleSet {
    fn from(config: &RulesConfig) -> Self {
        let preset = RuleSet::for_revision(config.revision);
        RuleSet::new(
            config.revision,
            config.pad_width.unwrap_or(preset.pad_width),
            config.min_digits.unwrap_or(preset.min_digits),
            config.max_count.unwrap_or(preset.max_count),
            config
                .keywords
                .clone()
                .unwrap_or_else(|| preset.keywords.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_keywords_are_longest_first() {
        let rules = RuleSet::standard();
        assert_eq!(rules.keywords()[0], "HALF OFF");
        assert_eq!(rules.keyword_prefix_of("HALF OFF"), Some("HALF OFF"));
        assert_eq!(rules.keyword_prefix_of("HALF"), Some("HALF"));
        assert_eq!(rules.keyword_prefix_of("AC-3"), Some("AC"));
        assert_eq!(rules.keyword_prefix_of("123"), None);
        assert_eq!(rules.keyword_prefix_of("ABC"), None);
        assert_eq!(rules.keyword_prefix_of("OFFER"), None);
        assert_eq!(rules.keyword_prefix_of("BOX2"), Some("BOX"));
        assert_eq!(rules.keyword_prefix_of("HALF5"), Some("HALF"));
    }

    #[test]
    fn legacy_has_no_keywords() {
        let rules = RuleSet::legacy();
        assert!(!rules.keywords_enabled());
        assert_eq!(rules.min_digits, 2);
        assert_eq!(rules.max_count, 10);
    }

    #[test]
    fn exact_keyword_ignores_case() {
        let rules = RuleSet::standard();
        assert_eq!(rules.keyword_exactly("box"), Some("BOX"));
        assert_eq!(rules.keyword_exactly("boxes"), None);
    }

    #[test]
    fn clamp_count_bounds() {
        let rules = RuleSet::standard();
        assert_eq!(rules.clamp_count(0), 1);
        assert_eq!(rules.clamp_count(42), 42);
        assert_eq!(rules.clamp_count(10_000), 500);
    }

    #[test]
    fn clamp_count_survives_zero_ceiling() {
        let mut rules = RuleSet::standard();
        rules.max_count = 0;
        assert_eq!(rules.clamp_count(5), 1);
        assert_eq!(rules.clamp_count(0), 1);
    }

    #[test]
    fn config_overrides_preset_fields() {
        let yaml = r#"
revision: legacy
max_count: 20
keywords: [box, full]
"#;
        let config: RulesConfig = serde_yaml::from_str(yaml).unwrap();
        let rules = RuleSet::from(&config);

        assert_eq!(rules.revision, RuleRevision::Legacy);
        assert_eq!(rules.min_digits, 2);
        assert_eq!(rules.max_count, 20);
        assert_eq!(rules.keywords(), &["FULL".to_string(), "BOX".to_string()]);
    }
}
