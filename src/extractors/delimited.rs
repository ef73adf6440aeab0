// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use lazy_static::lazy_static;
use regex::Regex;

use crate::traits::TokenExtractor;

lazy_static! {
    static ref DELIMITERS: Regex = Regex::new(r"[\s,]+").unwrap();
}

/// Delimited extractor - splits typed input on runs of whitespace and commas
pub struct DelimitedExtractor;

impl DelimitedExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DelimitedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on whitespace/comma runs, dropping non-ASCII characters (emoji and the
/// like) from each piece.
pub(crate) fn split_delimited(text: &str) -> Vec<String> {
    DELIMITERS
        .split(text)
        .map(|piece| piece.chars().filter(char::is_ascii).collect::<String>())
        .filter(|token| !token.trim().is_empty())
        .collect()
}

impl TokenExtractor for DelimitedExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        split_delimited(text)
    }

    fn name(&self) -> &'static str {
        "delimited"
    }
}
