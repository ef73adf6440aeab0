// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Image batches through an external OCR engine.
//!
//! OCR itself is a collaborator behind the [`OcrEngine`](crate::traits::OcrEngine)
//! trait. This module drives it: one session per batch, images recognized one at a
//! time, every recognized text folded into a shared tally, and the session always
//! released at the end.
//!
//! # Available Engines
//!
//! - **Tesseract**: shells out to the `tesseract` CLI per image
//! - **Stub** (test-only): scripted results, failures and delays

pub mod batch;
pub mod progress;
#[cfg(test)]
pub mod stub;
pub mod tesseract;

pub use batch::{BatchOptions, BatchOutcome, BatchStartError, ImageFailure, OcrBatchRunner};
pub use progress::{OcrProgress, ProgressReporter};
pub use tesseract::TesseractEngine;

use std::path::PathBuf;

/// One image to recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrImage {
    /// Name used in logs and failure reports
    pub label: String,
    pub path: PathBuf,
}

impl OcrImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { label, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_file_name() {
        let image = OcrImage::new("/tmp/scans/ticket-1.png");
        assert_eq!(image.label, "ticket-1.png");
        assert_eq!(image.path, PathBuf::from("/tmp/scans/ticket-1.png"));
    }
}
