// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::OcrError;
use crate::ocr::{OcrImage, ProgressReporter};

/// A text-recognition engine.
///
/// Engines hand out sessions so expensive state (a worker process, a loaded
/// model) is acquired once per image batch and released when the batch ends.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Acquire the engine's resources for one batch.
    async fn open_session(&self) -> Result<Box<dyn OcrSession>, OcrError>;

    fn name(&self) -> &'static str;
}

/// A live OCR session. Callers must always end it with [`OcrSession::terminate`].
#[async_trait]
pub trait OcrSession: Send {
    /// Recognize the text in one image, reporting progress along the way.
    ///
    /// Dropping the returned future must abort the recognition.
    async fn recognize(
        &mut self,
        image: &OcrImage,
        progress: &ProgressReporter,
    ) -> Result<String, OcrError>;

    /// Release the session's resources.
    async fn terminate(&mut self) -> Result<(), OcrError>;
}
