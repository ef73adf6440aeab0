// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::OcrError;
use crate::ocr::{OcrImage, ProgressReporter};
use crate::traits::{OcrEngine, OcrSession};

/// What the stub does when asked to recognize an image
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Return this text
    Text(&'static str),
    /// Fail with this reason
    Fail(&'static str),
    /// Never finish
    Hang,
}

/// A scripted OCR engine for testing batch behavior
#[derive(Default)]
pub struct ScriptedEngine {
    script: Arc<HashMap<String, Step>>,
    unavailable: bool,
    opened: Arc<AtomicUsize>,
    terminated: Arc<AtomicUsize>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, label: &str, step: Step) -> Self {
        Arc::make_mut(&mut self.script).insert(label.to_string(), step);
        self
    }

    /// Make every `open_session` fail.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn sessions_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn sessions_terminated(&self) -> usize {
        self.terminated.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OcrEngine for ScriptedEngine {
    async fn open_session(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        if self.unavailable {
            return Err(OcrError::EngineUnavailable {
                engine: "scripted".to_string(),
                reason: "simulated startup failure".to_string(),
            });
        }

        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession {
            script: Arc::clone(&self.script),
            terminated: Arc::clone(&self.terminated),
        }))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

struct ScriptedSession {
    script: Arc<HashMap<String, Step>>,
    terminated: Arc<AtomicUsize>,
}

#[async_trait]
impl OcrSession for ScriptedSession {
    async fn recognize(
        &mut self,
        image: &OcrImage,
        progress: &ProgressReporter,
    ) -> Result<String, OcrError> {
        progress.report(0.5);

        match self.script.get(&image.label) {
            Some(Step::Text(text)) => Ok(text.to_string()),
            Some(Step::Fail(reason)) => Err(OcrError::RecognitionFailed {
                image: image.label.clone(),
                reason: reason.to_string(),
            }),
            Some(Step::Hang) => std::future::pending().await,
            None => Err(OcrError::RecognitionFailed {
                image: image.label.clone(),
                reason: "no script for image".to_string(),
            }),
        }
    }

    async fn terminate(&mut self) -> Result<(), OcrError> {
        self.terminated.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
