// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Serialize;

use super::{ChatLogReport, ImageReport, TextReport};
use crate::engine::OutputEntry;

/// A titled table of rendered values, ready for an exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl ReportTable {
    /// One value per row under a single header
    pub fn single_column(title: &str, header: &str, entries: &[OutputEntry]) -> Self {
        Self {
            title: title.to_string(),
            headers: vec![header.to_string()],
            rows: entries.iter().map(|e| vec![e.to_string()]).collect(),
            notes: Vec::new(),
        }
    }

    /// Side-by-side `Half | Full | Merged` columns; shorter columns are padded
    /// with empty cells.
    pub fn from_text_report(report: &TextReport) -> Self {
        let columns = [&report.half, &report.full, &report.merged];
        let height = columns.iter().map(|c| c.len()).max().unwrap_or(0);

        let rows = (0..height)
            .map(|i| {
                columns
                    .iter()
                    .map(|column| column.get(i).map(ToString::to_string).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self {
            title: "Text Generator".to_string(),
            headers: vec!["Half".to_string(), "Full".to_string(), "Merged".to_string()],
            rows,
            notes: Vec::new(),
        }
    }

    pub fn from_image_report(report: &ImageReport) -> Self {
        let mut table = Self::single_column("Image Generator", "Value", &report.entries);
        table.notes.push(format!("Total Numbers: {}", report.total));
        table
            .notes
            .extend(report.failures.iter().map(|f| format!("Failed: {}", f)));
        if report.cancelled {
            table.notes.push("Batch cancelled; results are partial".to_string());
        }
        table
    }

    pub fn from_chat_log_report(report: &ChatLogReport) -> Self {
        let mut table = Self::single_column("Text File", "VALUE", &report.entries);
        table.notes.push(format!("Total Numbers: {}", report.total));
        table
    }
}
