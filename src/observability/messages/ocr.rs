// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for OCR sessions and image batches.
//!
//! This module contains message types for logging events related to:
//! * Batch lifecycle (start, completion, cancellation)
//! * Per-image recognition results and failures
//! * Session teardown

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Image batch started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::ocr::OcrBatchStarted;
///
/// let msg = OcrBatchStarted {
///     engine: "tesseract",
///     image_count: 3,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct OcrBatchStarted<'a> {
    pub engine: &'a str,
    pub image_count: usize,
}

impl Display for OcrBatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "OCR batch started with engine '{}': {} images",
            self.engine, self.image_count
        )
    }
}

impl StructuredLog for OcrBatchStarted<'_> {
    fn log(&self) {
        tracing::info!(
            engine = self.engine,
            image_count = self.image_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "ocr_batch",
            span_name = name,
            engine = self.engine,
            image_count = self.image_count,
        )
    }
}

/// One image recognized and folded into the batch tally.
///
/// # Log Level
/// `debug!` - Per-image detail
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::ocr::ImageRecognized;
/// use std::time::Duration;
///
/// let msg = ImageRecognized {
///     image: "ticket-1.png",
///     text_length: 120,
///     accepted_tokens: 9,
///     duration: Duration::from_millis(800),
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct ImageRecognized<'a> {
    pub image: &'a str,
    pub text_length: usize,
    pub accepted_tokens: usize,
    pub duration: std::time::Duration,
}

impl Display for ImageRecognized<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Image '{}' recognized: {} chars, {} tokens, duration={:?}",
            self.image, self.text_length, self.accepted_tokens, self.duration
        )
    }
}

impl StructuredLog for ImageRecognized<'_> {
    fn log(&self) {
        tracing::debug!(
            image = self.image,
            text_length = self.text_length,
            accepted_tokens = self.accepted_tokens,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("image_recognized", span_name = name, image = self.image)
    }
}

/// One image failed; earlier results stay in the tally.
///
/// # Log Level
/// `warn!` - Degraded result, batch may continue
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::ocr::ImageFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "engine crashed");
/// let msg = ImageFailed {
///     image: "ticket-2.png",
///     error: &error,
/// };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct ImageFailed<'a> {
    pub image: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ImageFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Image '{}' failed: {}", self.image, self.error)
    }
}

impl StructuredLog for ImageFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            image = self.image,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("image_failed", span_name = name, image = self.image)
    }
}

/// Batch stopped early because the caller cancelled it.
///
/// # Log Level
/// `warn!` - Degraded result
pub struct OcrBatchCancelled {
    pub processed: usize,
    pub image_count: usize,
}

impl Display for OcrBatchCancelled {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "OCR batch cancelled after {} of {} images",
            self.processed, self.image_count
        )
    }
}

impl StructuredLog for OcrBatchCancelled {
    fn log(&self) {
        tracing::warn!(
            processed = self.processed,
            image_count = self.image_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "ocr_batch_cancelled",
            span_name = name,
            processed = self.processed,
        )
    }
}

/// Image batch finished (successfully or not).
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use ticket_tally::observability::messages::ocr::OcrBatchCompleted;
/// use std::time::Duration;
///
/// let msg = OcrBatchCompleted {
///     recognized: 4,
///     failed: 1,
///     total_count: 37,
///     duration: Duration::from_secs(5),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct OcrBatchCompleted {
    pub recognized: usize,
    pub failed: usize,
    pub total_count: u64,
    pub duration: std::time::Duration,
}

impl Display for OcrBatchCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "OCR batch completed: {} recognized, {} failed, total count {}, duration={:?}",
            self.recognized, self.failed, self.total_count, self.duration
        )
    }
}

impl StructuredLog for OcrBatchCompleted {
    fn log(&self) {
        tracing::info!(
            recognized = self.recognized,
            failed = self.failed,
            total_count = self.total_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "ocr_batch_completed",
            span_name = name,
            recognized = self.recognized,
            failed = self.failed,
        )
    }
}

/// Session could not be released cleanly.
///
/// # Log Level
/// `warn!` - Resource may leak until process exit
pub struct SessionTerminateFailed<'a> {
    pub engine: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SessionTerminateFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to terminate OCR session for engine '{}': {}",
            self.engine, self.error
        )
    }
}

impl StructuredLog for SessionTerminateFailed<'_> {
    fn log(&self) {
        tracing::warn!(engine = self.engine, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("session_terminate_failed", span_name = name, engine = self.engine)
    }
}
