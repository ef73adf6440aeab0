// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod execution;
mod export;
mod ocr;

pub use config::{ConfigError, ValidationError};
pub use execution::FailureStrategy;
pub use export::ExportError;
pub use ocr::OcrError;
