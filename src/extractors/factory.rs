// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use super::{ChatLogExtractor, DelimitedExtractor, OcrPatternExtractor};
use crate::config::RuleSet;
use crate::errors::ConfigError;
use crate::traits::TokenExtractor;

/// Where a text blob came from; decides how candidates are extracted.
///
/// # Variants
/// * `Manual` - Typed into the half/full text areas
/// * `Ocr` - Recognized from an uploaded image
/// * `ChatLog` - Read from an exported chat text file
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Manual,
    Ocr,
    ChatLog,
}

/// Factory for creating token extractors
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create the extractor for a text source
    ///
    /// - `Manual` -> DelimitedExtractor
    /// - `Ocr` -> OcrPatternExtractor (pattern built from the rule keywords)
    /// - `ChatLog` -> ChatLogExtractor
    pub fn create_extractor(
        kind: SourceKind,
        rules: &RuleSet,
    ) -> Result<Box<dyn TokenExtractor>, ConfigError> {
        match kind {
            SourceKind::Manual => Ok(Box::new(DelimitedExtractor::new())),
            SourceKind::Ocr => Ok(Box::new(OcrPatternExtractor::new(rules)?)),
            SourceKind::ChatLog => Ok(Box::new(ChatLogExtractor::new(rules))),
        }
    }

    /// List all available extractor implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["delimited", "ocr_pattern", "chat_log"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_extractor_per_source() {
        let rules = RuleSet::standard();
        let names: Vec<_> = [SourceKind::Manual, SourceKind::Ocr, SourceKind::ChatLog]
            .into_iter()
            .map(|kind| ExtractorFactory::create_extractor(kind, &rules).unwrap().name())
            .collect();

        assert_eq!(names, ExtractorFactory::list_available_implementations());
    }
}
