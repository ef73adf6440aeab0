// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at its documented level with structured fields.
//!
//! # Organization
//!
//! * `pipeline` - Aggregation and rendering events
//! * `ocr` - OCR session lifecycle and per-image events
//! * `config` - Configuration loading and validation events

use tracing::Span;

pub mod config;
pub mod ocr;
pub mod pipeline;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event.
    fn log(&self);

    /// Open a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
