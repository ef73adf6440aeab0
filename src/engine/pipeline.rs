// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! One-stop entry point for the three text sources.
//!
//! [`TallyPipeline`] owns a resolved rule set together with one extractor per
//! source, so callers only pick the source and hand over text.

use std::path::Path;

use crate::config::{validate_rules, RuleSet};
use crate::engine::{render, Aggregator, FrequencyMap};
use crate::errors::ConfigError;
use crate::extractors::{ChatLogExtractor, DelimitedExtractor, OcrPatternExtractor, SourceKind};
use crate::observability::messages::{pipeline::ReportRendered, StructuredLog};
use crate::report::{ChatLogReport, TextReport};
use crate::traits::TokenExtractor;

pub struct TallyPipeline {
    rules: RuleSet,
    delimited: DelimitedExtractor,
    ocr: OcrPatternExtractor,
    chat_log: ChatLogExtractor,
}

impl TallyPipeline {
    /// Build a pipeline, rejecting rule sets that fail validation.
    pub fn new(rules: RuleSet) -> Result<Self, ConfigError> {
        validate_rules(&rules).map_err(ConfigError::Validation)?;

        Ok(Self {
            ocr: OcrPatternExtractor::new(&rules)?,
            chat_log: ChatLogExtractor::new(&rules),
            delimited: DelimitedExtractor::new(),
            rules,
        })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.rules)
    }

    pub fn extractor(&self, kind: SourceKind) -> &dyn TokenExtractor {
        match kind {
            SourceKind::Manual => &self.delimited,
            SourceKind::Ocr => &self.ocr,
            SourceKind::ChatLog => &self.chat_log,
        }
    }

    /// Aggregate one text blob from the given source.
    pub fn tally(&self, text: &str, kind: SourceKind) -> FrequencyMap {
        self.aggregator().aggregate(text, self.extractor(kind))
    }

    /// Tally the half and full inputs separately and merged.
    ///
    /// The merged column is the tally of `half + " " + full`, so keys keep the
    /// order in which they first appear across both inputs.
    pub fn text_report(&self, half: &str, full: &str) -> TextReport {
        let merged_text = format!("{} {}", half, full);
        let report = TextReport {
            half: render(&self.tally(half, SourceKind::Manual)),
            full: render(&self.tally(full, SourceKind::Manual)),
            merged: render(&self.tally(&merged_text, SourceKind::Manual)),
        };

        ReportRendered {
            report: "text",
            entries: report.merged.len(),
            total: report.merged.iter().map(|e| e.count).sum(),
        }
        .log();

        report
    }

    /// Tally the contents of an exported chat log.
    pub fn chat_log_report(&self, content: &str) -> ChatLogReport {
        let map = self.tally(content, SourceKind::ChatLog);
        let report = ChatLogReport {
            total: map.total(),
            entries: render(&map),
        };

        ReportRendered {
            report: "chat_log",
            entries: report.entries.len(),
            total: report.total,
        }
        .log();

        report
    }

    /// Read an exported chat log from disk and tally it.
    pub async fn chat_log_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<ChatLogReport> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(self.chat_log_report(&content))
    }
}
