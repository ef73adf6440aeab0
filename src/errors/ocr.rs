// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised by OCR engines and the image batch runner.
//!
//! OCR is the only collaborator whose failures reach the caller; malformed
//! tokens inside recognized text are dropped silently by the normalizer.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    /// The engine could not be started (binary missing, model download failed, ...)
    #[error("OCR engine '{engine}' unavailable: {reason}")]
    EngineUnavailable { engine: String, reason: String },

    /// The engine ran but could not recognize the image
    #[error("OCR failed for '{image}': {reason}")]
    RecognitionFailed { image: String, reason: String },

    /// Recognition exceeded the configured per-image timeout
    #[error("OCR for '{image}' timed out after {timeout:?}")]
    Timeout { image: String, timeout: Duration },

    #[error("I/O error during OCR: {0}")]
    Io(#[from] std::io::Error),
}
