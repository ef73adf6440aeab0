// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use crate::errors::ExportError;
use crate::report::ReportTable;

/// Writes rendered report tables to a byte stream.
///
/// Exporters only lay out what the renderer produced; they never re-derive counts.
pub trait Exporter: Send + Sync {
    fn export(&self, tables: &[ReportTable], out: &mut dyn Write) -> Result<(), ExportError>;

    fn name(&self) -> &'static str;
}
