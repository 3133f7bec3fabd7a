//! Local spreadsheet sink.
//!
//! Writes every named table to its own worksheet of a single workbook,
//! header row first. The file is overwritten on each run.

use std::path::PathBuf;

use async_trait::async_trait;
use rust_xlsxwriter::Workbook;

use crate::error::ExportError;
use crate::export::{NamedTable, RowSink};

pub struct XlsxSink {
    path: PathBuf,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSink for XlsxSink {
    async fn write(&self, tables: &[NamedTable]) -> Result<(), ExportError> {
        let mut workbook = Workbook::new();

        for named in tables {
            let sheet = workbook.add_worksheet();
            sheet.set_name(&named.name)?;
            for (row_idx, row) in named.table.with_header().iter().enumerate() {
                for (col_idx, value) in row.iter().enumerate() {
                    sheet.write_string(row_idx as u32, col_idx as u16, value)?;
                }
            }
        }

        workbook.save(&self.path)?;
        Ok(())
    }
}
