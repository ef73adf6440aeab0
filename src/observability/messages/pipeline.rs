// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the normalization pipeline.
//!
//! This module contains message types for logging events related to:
//! * Token extraction and aggregation
//! * Rendering of the frequency map

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// One text blob folded into a frequency map.
///
/// # Log Level
/// `debug!` - Per-invocation detail
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::pipeline::AggregationCompleted;
///
/// let msg = AggregationCompleted {
///     extractor: "delimited",
///     candidates: 5,
///     accepted: 4,
///     distinct_keys: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct AggregationCompleted<'a> {
    pub extractor: &'a str,
    pub candidates: usize,
    pub accepted: usize,
    pub distinct_keys: usize,
}

impl Display for AggregationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Aggregated {} of {} '{}' candidates into {} distinct keys",
            self.accepted, self.candidates, self.extractor, self.distinct_keys
        )
    }
}

impl StructuredLog for AggregationCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            extractor = self.extractor,
            candidates = self.candidates,
            accepted = self.accepted,
            distinct_keys = self.distinct_keys,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "aggregation",
            span_name = name,
            extractor = self.extractor,
            candidates = self.candidates,
        )
    }
}

/// A report was rendered from one or more frequency maps.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::pipeline::ReportRendered;
///
/// let msg = ReportRendered {
///     report: "text",
///     entries: 12,
///     total: 40,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ReportRendered<'a> {
    pub report: &'a str,
    pub entries: usize,
    pub total: u64,
}

impl Display for ReportRendered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rendered {} report: {} entries, total count {}",
            self.report, self.entries, self.total
        )
    }
}

impl StructuredLog for ReportRendered<'_> {
    fn log(&self) {
        tracing::info!(
            report = self.report,
            entries = self.entries,
            total = self.total,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "report_rendered",
            span_name = name,
            report = self.report,
            entries = self.entries,
        )
    }
}
