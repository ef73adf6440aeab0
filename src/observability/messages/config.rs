// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration loaded and rules resolved.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::config::RulesResolved;
///
/// let msg = RulesResolved {
///     source: "rules.yaml",
///     revision: "standard",
///     pad_width: 3,
///     max_count: 500,
///     keyword_count: 9,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct RulesResolved<'a> {
    pub source: &'a str,
    pub revision: &'a str,
    pub pad_width: usize,
    pub max_count: u32,
    pub keyword_count: usize,
}

impl Display for RulesResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Rules resolved from {}: revision={}, pad_width={}, max_count={}, keywords={}",
            self.source, self.revision, self.pad_width, self.max_count, self.keyword_count
        )
    }
}

impl StructuredLog for RulesResolved<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            revision = self.revision,
            pad_width = self.pad_width,
            max_count = self.max_count,
            keyword_count = self.keyword_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "rules_resolved",
            span_name = name,
            source = self.source,
            revision = self.revision,
        )
    }
}

/// A single validation problem in the rule configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::config::RuleValidationFailed;
///
/// let msg = RuleValidationFailed {
///     problem: "max_count must be at least 1, got 0",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct RuleValidationFailed<'a> {
    pub problem: &'a str,
}

impl Display for RuleValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Rule validation failed: {}", self.problem)
    }
}

impl StructuredLog for RuleValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(problem = self.problem, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("rule_validation_failed", span_name = name, problem = self.problem)
    }
}
