// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

/// How an image batch reacts when one image fails to recognize.
///
/// Either way the tally accumulated from earlier images is kept.
///
/// # Variants
/// * `FailFast` - Stop the batch at the first failed image
/// * `ContinueOnError` - Record the failure and move on to the next image
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    #[default]
    FailFast,
    ContinueOnError,
}
