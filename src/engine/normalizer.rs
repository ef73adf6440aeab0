// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Single-token normalization.
//!
//! A raw token is either rejected or mapped to exactly one [`NormalizedEntry`]:
//!
//! 1. Runs of one to three dots become a single `-` (OCR tends to read a dash as an
//!    ellipsis), then the token is upper-cased and trimmed.
//! 2. A token starting with a whole keyword literal yields that keyword with count 1.
//!    Anything after the keyword is ignored, so `AC-3` is just `AC`.
//! 3. Otherwise the token must look like `<digits>[-<count>]`. The base is padded
//!    with zeros to the configured width and the count is clamped to
//!    `1..=max_count`. Segments after the count are ignored.
//!
//! Malformed tokens are not errors: noisy input is expected, so they simply
//! produce no entry.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::RuleSet;
use crate::engine::types::NormalizedEntry;

lazy_static! {
    static ref DOT_RUN: Regex = Regex::new(r"\.{1,3}").unwrap();
}

/// Normalizes raw tokens under one rule set.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer<'a> {
    rules: &'a RuleSet,
}

impl<'a> Normalizer<'a> {
    pub fn new(rules: &'a RuleSet) -> Self {
        Self { rules }
    }

    /// Normalize one raw token into zero or one entries.
    ///
    /// # Example
    /// ```
    /// use ticket_tally::config::RuleSet;
    /// use ticket_tally::engine::{NormalizedEntry, Normalizer};
    ///
    /// let rules = RuleSet::standard();
    /// let normalizer = Normalizer::new(&rules);
    ///
    /// assert_eq!(normalizer.normalize("7-2"), vec![NormalizedEntry::numeric("007", 2)]);
    /// assert_eq!(normalizer.normalize("box"), vec![NormalizedEntry::keyword("BOX")]);
    /// assert!(normalizer.normalize("abc").is_empty());
    /// ```
    pub fn normalize(&self, raw: &str) -> Vec<NormalizedEntry> {
        self.normalize_one(raw).into_iter().collect()
    }

    fn normalize_one(&self, raw: &str) -> Option<NormalizedEntry> {
        if raw.trim().is_empty() {
            return None;
        }

        let cleaned = clean_token(raw);

        if let Some(keyword) = self.rules.keyword_prefix_of(&cleaned) {
            return Some(NormalizedEntry::keyword(keyword));
        }

        if !cleaned.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let mut segments = cleaned.split('-');
        let base = segments.next()?;
        let key = self.pad_base(base)?;
        let count = segments
            .next()
            .map(|segment| self.parse_count(segment))
            .unwrap_or(1);

        Some(NormalizedEntry::numeric(key, count))
    }

    fn pad_base(&self, base: &str) -> Option<String> {
        let digits = base.len();
        if digits < self.rules.min_digits
            || digits > self.rules.pad_width
            || !base.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        Some(format!("{:0>width$}", base, width = self.rules.pad_width))
    }

    /// Leading digits of the count segment; no digits means a count of 1.
    fn parse_count(&self, segment: &str) -> u32 {
        let digits_end = segment
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(segment.len());
        let digits = &segment[..digits_end];

        if digits.is_empty() {
            return 1;
        }

        match digits.parse::<u64>() {
            Ok(requested) => self.rules.clamp_count(requested),
            // Only overflow can fail here: the segment is all digits
            Err(_) => self.rules.max_count,
        }
    }
}

/// Dot runs to dashes, upper-case, trim.
pub(crate) fn clean_token(raw: &str) -> String {
    DOT_RUN.replace_all(raw, "-").to_uppercase().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleRevision;

    fn normalize(raw: &str) -> Vec<NormalizedEntry> {
        Normalizer::new(&RuleSet::standard()).normalize(raw)
    }

    #[test]
    fn pads_bare_numbers() {
        assert_eq!(normalize("7"), vec![NormalizedEntry::numeric("007", 1)]);
        assert_eq!(normalize("45"), vec![NormalizedEntry::numeric("045", 1)]);
        assert_eq!(normalize("123"), vec![NormalizedEntry::numeric("123", 1)]);
    }

    #[test]
    fn every_short_number_pads_to_three_digits() {
        let rules = RuleSet::standard();
        let normalizer = Normalizer::new(&rules);
        for n in 0..1000u32 {
            let raw = n.to_string();
            let expected = format!("{:03}", n);
            assert_eq!(
                normalizer.normalize(&raw),
                vec![NormalizedEntry::numeric(expected, 1)],
                "token {}",
                raw
            );
        }
    }

    #[test]
    fn parses_and_clamps_counts() {
        assert_eq!(normalize("7-2"), vec![NormalizedEntry::numeric("007", 2)]);
        assert_eq!(normalize("123-500"), vec![NormalizedEntry::numeric("123", 500)]);
        assert_eq!(normalize("123-501"), vec![NormalizedEntry::numeric("123", 500)]);
        assert_eq!(
            normalize("5-99999999999999999999999"),
            vec![NormalizedEntry::numeric("005", 500)]
        );
    }

    #[test]
    fn bad_counts_default_to_one() {
        assert_eq!(normalize("12-"), vec![NormalizedEntry::numeric("012", 1)]);
        assert_eq!(normalize("12-x"), vec![NormalizedEntry::numeric("012", 1)]);
        assert_eq!(normalize("12-0"), vec![NormalizedEntry::numeric("012", 1)]);
        assert_eq!(normalize("12-3x"), vec![NormalizedEntry::numeric("012", 3)]);
    }

    #[test]
    fn segments_after_count_are_ignored() {
        assert_eq!(normalize("12-3-9"), vec![NormalizedEntry::numeric("012", 3)]);
    }

    #[test]
    fn dots_become_dashes() {
        assert_eq!(normalize("45.3"), vec![NormalizedEntry::numeric("045", 3)]);
        assert_eq!(normalize("45..3"), vec![NormalizedEntry::numeric("045", 3)]);
        assert_eq!(normalize("45...3"), vec![NormalizedEntry::numeric("045", 3)]);
    }

    #[test]
    fn rejects_empty_and_non_numeric() {
        assert!(normalize("").is_empty());
        assert!(normalize("   ").is_empty());
        assert!(normalize("abc").is_empty());
        assert!(normalize("-5").is_empty());
    }

    #[test]
    fn rejects_bases_outside_digit_range() {
        assert!(normalize("1234").is_empty());
        assert!(normalize("12ab").is_empty());
    }

    #[test]
    fn keywords_always_count_once() {
        assert_eq!(normalize("BOX"), vec![NormalizedEntry::keyword("BOX")]);
        assert_eq!(normalize("ac-3"), vec![NormalizedEntry::keyword("AC")]);
        assert_eq!(normalize(" half off "), vec![NormalizedEntry::keyword("HALF OFF")]);
        assert_eq!(normalize("half"), vec![NormalizedEntry::keyword("HALF")]);
        assert_eq!(normalize("Full...2"), vec![NormalizedEntry::keyword("FULL")]);
    }

    #[test]
    fn keyword_with_trailing_digits_counts_once() {
        assert_eq!(normalize("BOX2"), vec![NormalizedEntry::keyword("BOX")]);
        assert_eq!(normalize("ac3"), vec![NormalizedEntry::keyword("AC")]);
        assert_eq!(normalize("HALF5"), vec![NormalizedEntry::keyword("HALF")]);
    }

    #[test]
    fn keyword_followed_by_letters_is_not_a_keyword() {
        assert!(normalize("abc").is_empty());
        assert!(normalize("boxes").is_empty());
    }

    #[test]
    fn legacy_rules_need_two_digits_and_cap_at_ten() {
        let rules = RuleSet::legacy();
        let normalizer = Normalizer::new(&rules);

        assert!(normalizer.normalize("7").is_empty());
        assert!(normalizer.normalize("BOX").is_empty());
        assert_eq!(normalizer.normalize("45"), vec![NormalizedEntry::numeric("045", 1)]);
        assert_eq!(normalizer.normalize("45-30"), vec![NormalizedEntry::numeric("045", 10)]);
    }

    #[test]
    fn custom_pad_width() {
        let rules = RuleSet::new(RuleRevision::Standard, 2, 1, 500, Vec::new());
        let normalizer = Normalizer::new(&rules);

        assert_eq!(normalizer.normalize("7"), vec![NormalizedEntry::numeric("07", 1)]);
        assert!(normalizer.normalize("123").is_empty());
    }
}
