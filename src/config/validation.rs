// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rule set validation.
//!
//! A resolved [`RuleSet`] is checked before any text is normalized so that a bad
//! YAML override surfaces at load time instead of silently discarding every token.
//! All problems are collected and returned together.
//!
//! # Checks
//!
//! 1. **Digit range**: `1 <= min_digits <= pad_width <= MAX_PAD_WIDTH`
//! 2. **Count ceiling**: `max_count >= 1`
//! 3. **Keywords**: non-empty, not starting with a digit (a numeric key and a keyword
//!    must never be confused), no `-` (rendered counts use it as the separator),
//!    unique after upper-casing

use std::collections::HashSet;

use crate::config::consts::MAX_PAD_WIDTH;
use crate::config::RuleSet;
use crate::errors::ValidationError;

/// Validate a resolved rule set, returning every problem found.
///
/// # Example
/// ```
/// use ticket_tally::config::{validate_rules, RuleSet};
///
/// assert!(validate_rules(&RuleSet::standard()).is_ok());
/// ```
pub fn validate_rules(rules: &RuleSet) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if rules.min_digits < 1 {
        errors.push(ValidationError::MinDigitsTooSmall {
            min_digits: rules.min_digits,
        });
    }

    if rules.pad_width < rules.min_digits.max(1) || rules.pad_width > MAX_PAD_WIDTH {
        errors.push(ValidationError::PadWidthOutOfRange {
            pad_width: rules.pad_width,
            min_digits: rules.min_digits,
            maximum: MAX_PAD_WIDTH,
        });
    }

    if rules.max_count < 1 {
        errors.push(ValidationError::MaxCountTooSmall {
            max_count: rules.max_count,
        });
    }

    let mut seen = HashSet::new();
    for keyword in rules.keywords() {
        if let Some(reason) = keyword_problem(keyword) {
            errors.push(ValidationError::InvalidKeyword {
                keyword: keyword.clone(),
                reason,
            });
        } else if !seen.insert(keyword.as_str()) {
            errors.push(ValidationError::DuplicateKeyword {
                keyword: keyword.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn keyword_problem(keyword: &str) -> Option<&'static str> {
    if keyword.is_empty() {
        Some("keyword is empty")
    } else if keyword.starts_with(|c: char| c.is_ascii_digit()) {
        Some("keyword starts with a digit")
    } else if keyword.contains('-') {
        Some("keyword contains '-'")
    } else {
        None
    }
}
