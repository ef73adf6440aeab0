// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Token extractors for the three text sources.
//!
//! # Available Extractors
//!
//! - **Delimited**: typed input, split on whitespace and commas
//! - **OCR pattern**: recognized image text, scanned for keywords and digit runs
//! - **Chat log**: exported chat files, scrubbed of timestamps, senders and
//!   boilerplate, then filtered to strict tokens
//!
//! # Architecture
//!
//! ```text
//! SourceKind → ExtractorFactory → TokenExtractor → Aggregator
//! ```

pub mod chat_log;
pub mod delimited;
pub mod factory;
pub mod ocr_pattern;

pub use chat_log::ChatLogExtractor;
pub use delimited::DelimitedExtractor;
pub use factory::{ExtractorFactory, SourceKind};
pub use ocr_pattern::OcrPatternExtractor;
