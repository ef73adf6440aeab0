// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;
use std::fmt;

/// Canonical key of a tallied token.
///
/// A key is either a zero-padded numeric string or a keyword literal, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKey {
    Numeric(String),
    Keyword(String),
}

impl TokenKey {
    pub fn as_str(&self) -> &str {
        match self {
            TokenKey::Numeric(key) | TokenKey::Keyword(key) => key,
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKey::Keyword(_))
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized token: a key and how many times it counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEntry {
    pub key: TokenKey,
    pub count: u32,
}

impl NormalizedEntry {
    pub fn numeric(key: impl Into<String>, count: u32) -> Self {
        Self {
            key: TokenKey::Numeric(key.into()),
            count,
        }
    }

    pub fn keyword(key: impl Into<String>) -> Self {
        Self {
            key: TokenKey::Keyword(key.into()),
            count: 1,
        }
    }
}

/// Rendered, externally visible form of a tallied key.
///
/// Displays as `key` when the count is 1 and `key-count` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub key: TokenKey,
    pub count: u64,
}

impl fmt::Display for OutputEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}-{}", self.key, self.count)
        }
    }
}

impl Serialize for OutputEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
