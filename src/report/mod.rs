// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Rendered reports and their exporters.
//!
//! Reports hold rendered [`OutputEntry`] lists only. A report is turned into one
//! or more [`ReportTable`]s, and an [`Exporter`](crate::traits::Exporter) writes
//! those tables out.

pub mod json;
pub mod plain_text;
pub mod table;

pub use json::JsonExporter;
pub use plain_text::PlainTextExporter;
pub use table::ReportTable;

use crate::config::ExportFormat;
use crate::engine::OutputEntry;
use crate::traits::Exporter;

/// Half, full and merged tallies of the two manual text inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextReport {
    pub half: Vec<OutputEntry>,
    pub full: Vec<OutputEntry>,
    pub merged: Vec<OutputEntry>,
}

/// Tally of one exported chat log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatLogReport {
    pub total: u64,
    pub entries: Vec<OutputEntry>,
}

/// Combined tally of an image batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageReport {
    /// Sum of all counts across the batch
    pub total: u64,
    pub entries: Vec<OutputEntry>,
    /// `image: reason` for every image that failed
    pub failures: Vec<String>,
    pub cancelled: bool,
}

/// Pick the exporter for a configured format
pub fn exporter_for(format: ExportFormat) -> Box<dyn Exporter> {
    match format {
        ExportFormat::Text => Box::new(PlainTextExporter::new()),
        ExportFormat::Json => Box::new(JsonExporter::new()),
    }
}
