// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Token normalization, aggregation and rendering.
//!
//! ```text
//! raw text → TokenExtractor → Normalizer → Aggregator (FrequencyMap) → render
//! ```
//!
//! Everything in this module is synchronous and owns no shared state; each call
//! builds its own [`FrequencyMap`], so independent inputs can be processed from
//! any number of tasks at once.

pub mod aggregator;
pub mod frequency_map;
pub mod normalizer;
pub mod pipeline;
pub mod renderer;
pub mod types;
#[cfg(test)]
mod integration_tests;

pub use aggregator::Aggregator;
pub use frequency_map::FrequencyMap;
pub use normalizer::Normalizer;
pub use pipeline::TallyPipeline;
pub use renderer::{render, render_strings};
pub use types::{NormalizedEntry, OutputEntry, TokenKey};
