// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::OcrConfig;
use crate::errors::OcrError;
use crate::ocr::{OcrImage, ProgressReporter};
use crate::traits::{OcrEngine, OcrSession};

const ENGINE_NAME: &str = "tesseract";

/// Tesseract engine - runs the `tesseract` CLI once per image.
///
/// Opening a session only probes the binary; there is no long-lived worker to
/// keep, so terminating a session is free.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: String,
    language: String,
}

impl TesseractEngine {
    pub fn new(binary: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            language: language.into(),
        }
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self::new(config.get_binary(), config.get_language())
    }

    fn unavailable(&self, reason: impl Into<String>) -> OcrError {
        OcrError::EngineUnavailable {
            engine: format!("{} ({})", ENGINE_NAME, self.binary),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractEngine {
    async fn open_session(&self) -> Result<Box<dyn OcrSession>, OcrError> {
        let status = Command::new(&self.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;

        if !status.success() {
            return Err(self.unavailable(format!("version probe exited with {}", status)));
        }

        Ok(Box::new(TesseractSession {
            binary: self.binary.clone(),
            language: self.language.clone(),
        }))
    }

    fn name(&self) -> &'static str {
        ENGINE_NAME
    }
}

struct TesseractSession {
    binary: String,
    language: String,
}

#[async_trait]
impl OcrSession for TesseractSession {
    async fn recognize(
        &mut self,
        image: &OcrImage,
        progress: &ProgressReporter,
    ) -> Result<String, OcrError> {
        progress.report(0.0);

        // Dropping this future kills the child
        let output = Command::new(&self.binary)
            .arg(&image.path)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("tesseract exited with {}", output.status)
            } else {
                stderr
            };
            return Err(OcrError::RecognitionFailed {
                image: image.label.clone(),
                reason,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn terminate(&mut self) -> Result<(), OcrError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_unavailable() {
        let engine = TesseractEngine::new("/nonexistent/ticket-tally/tesseract", "eng");

        let result = engine.open_session().await;

        match result {
            Err(OcrError::EngineUnavailable { engine, .. }) => {
                assert!(engine.contains("/nonexistent/ticket-tally/tesseract"));
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("session opened without a binary"),
        }
    }

    #[test]
    fn takes_binary_and_language_from_config() {
        let config = OcrConfig {
            binary: Some("/opt/tesseract".to_string()),
            language: Some("deu".to_string()),
            ..OcrConfig::default()
        };

        let engine = TesseractEngine::from_config(&config);

        assert_eq!(engine.binary, "/opt/tesseract");
        assert_eq!(engine.language, "deu");
        assert_eq!(engine.name(), "tesseract");
    }
}
