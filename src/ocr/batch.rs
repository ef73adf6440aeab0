// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential OCR over a batch of images.
//!
//! # Execution Flow
//!
//! 1. **Session**: open one engine session for the whole batch
//! 2. **Recognize**: one image at a time, each awaited before the next starts,
//!    racing the caller's [`CancellationToken`] and the optional per-image timeout
//! 3. **Fold**: every recognized text goes through the OCR pattern extractor and
//!    is aggregated into the batch tally
//! 4. **Release**: the session is terminated whether the batch finished, failed
//!    or was cancelled
//!
//! A failed image never costs the tally gathered from earlier images; the
//! [`FailureStrategy`] only decides whether later images are still attempted.

use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::config::OcrConfig;
use crate::engine::{render, FrequencyMap, TallyPipeline};
use crate::errors::{FailureStrategy, OcrError};
use crate::extractors::SourceKind;
use crate::observability::messages::ocr::{
    ImageFailed, ImageRecognized, OcrBatchCancelled, OcrBatchCompleted, OcrBatchStarted,
    SessionTerminateFailed,
};
use crate::observability::messages::StructuredLog;
use crate::ocr::{OcrImage, OcrProgress, ProgressReporter};
use crate::report::ImageReport;
use crate::traits::{OcrEngine, OcrSession};

/// Batch behavior knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Per-image recognition limit; `None` waits indefinitely
    pub timeout: Option<Duration>,
    pub failure_strategy: FailureStrategy,
}

impl From<&OcrConfig> for BatchOptions {
    fn from(config: &OcrConfig) -> Self {
        Self {
            timeout: config.timeout(),
            failure_strategy: config.failure_strategy,
        }
    }
}

/// An image that could not be recognized.
#[derive(Debug)]
pub struct ImageFailure {
    pub index: usize,
    pub image: String,
    pub error: OcrError,
}

/// The engine session could not be opened. The tally handed to the batch is
/// returned untouched.
#[derive(Debug, Error)]
#[error("OCR batch could not start")]
pub struct BatchStartError {
    #[source]
    pub error: OcrError,
    pub tally: FrequencyMap,
}

/// Everything a batch produced, including partial results.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub tally: FrequencyMap,
    pub recognized: usize,
    pub failures: Vec<ImageFailure>,
    pub cancelled: bool,
}

impl BatchOutcome {
    pub fn report(&self) -> ImageReport {
        ImageReport {
            total: self.tally.total(),
            entries: render(&self.tally),
            failures: self
                .failures
                .iter()
                .map(|f| format!("{}: {}", f.image, f.error))
                .collect(),
            cancelled: self.cancelled,
        }
    }
}

/// Drives an [`OcrEngine`] over a batch of images.
pub struct OcrBatchRunner<'a> {
    pipeline: &'a TallyPipeline,
    options: BatchOptions,
}

impl<'a> OcrBatchRunner<'a> {
    pub fn new(pipeline: &'a TallyPipeline, options: BatchOptions) -> Self {
        Self { pipeline, options }
    }

    /// Recognize every image into a fresh tally.
    ///
    /// Returns `Err` only when the engine session cannot be opened; per-image
    /// failures and cancellation are reported in the [`BatchOutcome`].
    pub async fn run(
        &self,
        engine: &dyn OcrEngine,
        images: &[OcrImage],
        cancel: &CancellationToken,
        progress: Option<UnboundedSender<OcrProgress>>,
    ) -> Result<BatchOutcome, OcrError> {
        self.run_with_tally(engine, images, cancel, progress, FrequencyMap::new())
            .await
            .map_err(|e| e.error)
    }

    /// Recognize every image, folding results into an existing tally.
    ///
    /// If the engine session cannot be opened, the tally comes back inside the
    /// [`BatchStartError`].
    pub async fn run_with_tally(
        &self,
        engine: &dyn OcrEngine,
        images: &[OcrImage],
        cancel: &CancellationToken,
        progress: Option<UnboundedSender<OcrProgress>>,
        tally: FrequencyMap,
    ) -> Result<BatchOutcome, BatchStartError> {
        let started = Instant::now();
        let start_msg = OcrBatchStarted {
            engine: engine.name(),
            image_count: images.len(),
        };
        let span = start_msg.span("ocr_batch");
        start_msg.log();

        let mut outcome = BatchOutcome {
            tally,
            ..BatchOutcome::default()
        };

        if cancel.is_cancelled() {
            outcome.cancelled = true;
        } else if !images.is_empty() {
            let mut session = match engine.open_session().instrument(span.clone()).await {
                Ok(session) => session,
                Err(error) => {
                    return Err(BatchStartError {
                        error,
                        tally: outcome.tally,
                    })
                }
            };

            self.recognize_all(session.as_mut(), images, cancel, progress, &mut outcome)
                .instrument(span.clone())
                .await;

            // Released on every path out of the loop
            if let Err(error) = session.terminate().await {
                SessionTerminateFailed {
                    engine: engine.name(),
                    error: &error,
                }
                .log();
            }
        }

        if outcome.cancelled {
            OcrBatchCancelled {
                processed: outcome.recognized + outcome.failures.len(),
                image_count: images.len(),
            }
            .log();
        }

        OcrBatchCompleted {
            recognized: outcome.recognized,
            failed: outcome.failures.len(),
            total_count: outcome.tally.total(),
            duration: started.elapsed(),
        }
        .log();

        Ok(outcome)
    }

    async fn recognize_all(
        &self,
        session: &mut dyn OcrSession,
        images: &[OcrImage],
        cancel: &CancellationToken,
        progress: Option<UnboundedSender<OcrProgress>>,
        outcome: &mut BatchOutcome,
    ) {
        let aggregator = self.pipeline.aggregator();
        let extractor = self.pipeline.extractor(SourceKind::Ocr);

        for (index, image) in images.iter().enumerate() {
            let reporter = ProgressReporter::new(progress.clone(), index, images.len());
            reporter.report(0.0);
            let image_started = Instant::now();

            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => None,
                result = self.recognize(&mut *session, image, &reporter) => Some(result),
            };

            match result {
                None => {
                    outcome.cancelled = true;
                    break;
                }
                Some(Ok(text)) => {
                    let accepted = aggregator.aggregate_into(&text, extractor, &mut outcome.tally);
                    outcome.recognized += 1;
                    reporter.report(1.0);

                    ImageRecognized {
                        image: &image.label,
                        text_length: text.len(),
                        accepted_tokens: accepted,
                        duration: image_started.elapsed(),
                    }
                    .log();
                }
                Some(Err(error)) => {
                    ImageFailed {
                        image: &image.label,
                        error: &error,
                    }
                    .log();

                    outcome.failures.push(ImageFailure {
                        index,
                        image: image.label.clone(),
                        error,
                    });

                    if self.options.failure_strategy == FailureStrategy::FailFast {
                        break;
                    }
                }
            }
        }
    }

    async fn recognize(
        &self,
        session: &mut dyn OcrSession,
        image: &OcrImage,
        reporter: &ProgressReporter,
    ) -> Result<String, OcrError> {
        let recognition = session.recognize(image, reporter);

        match self.options.timeout {
            Some(limit) => tokio::time::timeout(limit, recognition)
                .await
                .map_err(|_| OcrError::Timeout {
                    image: image.label.clone(),
                    timeout: limit,
                })?,
            None => recognition.await,
        }
    }
}
