// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging throughout the crate. Message types follow a struct-based pattern
//! with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Keep field names consistent between the human-readable text and structured fields
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::pipeline` - Aggregation and rendering events
//! * `messages::ocr` - OCR session and image batch events
//! * `messages::config` - Configuration loading and validation events
//!
//! # Usage
//!
//! ```rust
//! use ticket_tally::observability::messages::{pipeline::AggregationCompleted, StructuredLog};
//!
//! let msg = AggregationCompleted {
//!     extractor: "delimited",
//!     candidates: 4,
//!     accepted: 3,
//!     distinct_keys: 2,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
