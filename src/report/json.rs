// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use super::ReportTable;
use crate::errors::ExportError;
use crate::traits::Exporter;

/// JSON exporter - writes the tables as a pretty-printed array
pub struct JsonExporter;

impl JsonExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JsonExporter {
    fn export(&self, tables: &[ReportTable], out: &mut dyn Write) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut *out, tables)?;
        writeln!(out)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn writes_tables_as_json() {
        let tables = vec![ReportTable {
            title: "Image Generator".to_string(),
            headers: vec!["Value".to_string()],
            rows: vec![vec!["123-2".to_string()], vec!["BOX".to_string()]],
            notes: vec!["Total Numbers: 3".to_string()],
        }];

        let mut out = Vec::new();
        JsonExporter::new().export(&tables, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            json!([{
                "title": "Image Generator",
                "headers": ["Value"],
                "rows": [["123-2"], ["BOX"]],
                "notes": ["Total Numbers: 3"]
            }])
        );
    }

    #[test]
    fn omits_empty_notes() {
        let tables = vec![ReportTable {
            title: "Text File".to_string(),
            headers: vec!["VALUE".to_string()],
            rows: vec![],
            notes: vec![],
        }];

        let mut out = Vec::new();
        JsonExporter::new().export(&tables, &mut out).unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();

        assert!(value[0].get("notes").is_none());
    }
}
