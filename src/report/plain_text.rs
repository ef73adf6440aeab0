// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use super::ReportTable;
use crate::errors::ExportError;
use crate::traits::Exporter;

/// Plain-text exporter - left-aligned columns separated by two spaces
pub struct PlainTextExporter;

impl PlainTextExporter {
    pub fn new() -> Self {
        Self
    }

    fn write_table(table: &ReportTable, out: &mut dyn Write) -> Result<(), ExportError> {
        let widths: Vec<usize> = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        writeln!(out, "{}", table.title)?;
        writeln!(out, "{}", format_row(&table.headers, &widths))?;
        writeln!(out, "{}", format_row(&rule_cells(&widths), &widths))?;
        for row in &table.rows {
            writeln!(out, "{}", format_row(row, &widths))?;
        }
        for note in &table.notes {
            writeln!(out, "{}", note)?;
        }
        Ok(())
    }
}

impl Default for PlainTextExporter {
    fn default() -> Self {
        Self::new()
    }
}

fn rule_cells(widths: &[usize]) -> Vec<String> {
    widths.iter().map(|w| "-".repeat(*w)).collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

impl Exporter for PlainTextExporter {
    fn export(&self, tables: &[ReportTable], out: &mut dyn Write) -> Result<(), ExportError> {
        for (i, table) in tables.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            Self::write_table(table, out)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "plain_text"
    }
}
