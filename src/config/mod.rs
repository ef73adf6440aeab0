// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod rules;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_config, load_config, parse_config, validate_config, Config, ExportConfig,
    ExportFormat, OcrConfig,
};
pub use rules::{RuleRevision, RuleSet, RulesConfig};
pub use validation::validate_rules;
