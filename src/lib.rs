// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // rule revisions + YAML loading
pub mod engine;     // normalize, aggregate, render
pub mod errors;     // error handling
pub mod extractors; // per-source tokenization
pub mod observability;
pub mod ocr;        // image batches
pub mod report;     // report tables + exporters
pub mod traits;     // unified abstractions
