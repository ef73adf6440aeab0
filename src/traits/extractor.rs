// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Splits a raw text blob into candidate tokens for the normalizer.
///
/// Implementations differ only in how they find candidates: typed input is
/// delimited, OCR text is pattern-scanned, chat exports are cleaned line by line.
pub trait TokenExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &'static str;
}
