// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Width numeric keys are zero-padded to (`7` -> `007`)
pub const DEFAULT_PAD_WIDTH: usize = 3;
/// Fewest digits a numeric base may have under the standard revision
pub const DEFAULT_MIN_DIGITS: usize = 1;
/// Ceiling for a parsed repeat count under the standard revision
pub const DEFAULT_MAX_COUNT: u32 = 500;

/// Fewest digits a numeric base may have under the legacy revision
pub const LEGACY_MIN_DIGITS: usize = 2;
/// Ceiling for a parsed repeat count under the legacy revision
pub const LEGACY_MAX_COUNT: u32 = 10;

/// Widest pad width accepted by validation
pub const MAX_PAD_WIDTH: usize = 9;

/// Keyword literals recognized by the standard revision
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "AC", "BC", "AB", "HALF OFF", "FULL", "BOX", "OC", "OFF", "HALF",
];

/// Most digits a repeat count may carry in OCR and chat-log text
pub const MAX_COUNT_DIGITS: usize = 5;

/// Default tesseract executable
pub const DEFAULT_OCR_BINARY: &str = "tesseract";
/// Default tesseract language pack
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
