// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use tokio::sync::mpsc::UnboundedSender;

/// Recognition progress for one image of a batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OcrProgress {
    pub image_index: usize,
    pub image_count: usize,
    /// Always within `0.0..=1.0`
    pub fraction: f32,
}

/// Handed to an OCR session so it can report progress for the current image.
///
/// Reporting is fire-and-forget: without a listener, or once the listener has
/// gone away, reports are dropped.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    sender: Option<UnboundedSender<OcrProgress>>,
    image_index: usize,
    image_count: usize,
}

impl ProgressReporter {
    pub fn new(
        sender: Option<UnboundedSender<OcrProgress>>,
        image_index: usize,
        image_count: usize,
    ) -> Self {
        Self {
            sender,
            image_index,
            image_count,
        }
    }

    /// A reporter nobody listens to.
    pub fn silent() -> Self {
        Self::new(None, 0, 1)
    }

    pub fn report(&self, fraction: f32) {
        if let Some(sender) = &self.sender {
            let fraction = if fraction.is_nan() {
                0.0
            } else {
                fraction.clamp(0.0, 1.0)
            };
            let _ = sender.send(OcrProgress {
                image_index: self.image_index,
                image_count: self.image_count,
                fraction,
            });
        }
    }
}
