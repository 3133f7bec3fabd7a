//! Export schemas and sinks.
//!
//! The aggregator's output is flattened into [`Table`]s of strings here, and
//! a [`RowSink`] writes them to a tabular artifact. Two sink variants exist:
//! a local xlsx workbook and a cloud spreadsheet; both receive the same
//! tables, so the extraction core never knows which one is in play.

pub mod sheets;
pub mod xlsx;

use async_trait::async_trait;

use crate::error::ExportError;
use crate::model::{PlayerRow, TeamRow};

pub use sheets::SheetsSink;
pub use xlsx::XlsxSink;

/// Fixed column order for team stats, after the leading URL column.
pub const TEAM_STAT_COLUMNS: &[&str] = &[
    "W",
    "L",
    "Win Percentage",
    "Loss Percentage",
    "SO",
    "ERA",
    "FIP",
    "R",
    "H",
    "HR",
    "SB",
    "BA",
    "OBP",
    "SLG",
];

/// One flat table: a header row and data rows, all strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// All rows including the header, as the sinks write them.
    pub fn with_header(&self) -> Vec<Vec<String>> {
        let mut all = Vec::with_capacity(self.rows.len() + 1);
        all.push(self.columns.clone());
        all.extend(self.rows.iter().cloned());
        all
    }
}

/// A table paired with the sheet name it lands under.
#[derive(Debug, Clone)]
pub struct NamedTable {
    pub name: String,
    pub table: Table,
}

impl NamedTable {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

/// Builds the team stats table with its fixed column order.
///
/// Row order equals the traversal order of the input rows; no sorting or
/// deduplication happens here.
pub fn team_table(rows: &[TeamRow]) -> Table {
    let mut columns = Vec::with_capacity(TEAM_STAT_COLUMNS.len() + 1);
    columns.push("URL".to_string());
    columns.extend(TEAM_STAT_COLUMNS.iter().map(|c| c.to_string()));

    Table {
        columns,
        rows: rows.iter().map(|r| r.to_cells(TEAM_STAT_COLUMNS)).collect(),
    }
}

/// Builds the player stats table.
///
/// Player rows have no fixed schema, so the columns are URL, Stat Type,
/// then the union of stat keys across all rows in first-seen order; rows
/// lacking a key get a blank cell.
pub fn player_table(rows: &[PlayerRow]) -> Table {
    let mut stat_columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.stats.keys() {
            if !stat_columns.iter().any(|c| c == key) {
                stat_columns.push(key.to_string());
            }
        }
    }

    let mut columns = Vec::with_capacity(stat_columns.len() + 2);
    columns.push("URL".to_string());
    columns.push("Stat Type".to_string());
    columns.extend(stat_columns.iter().cloned());

    let rows = rows
        .iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(columns.len());
            cells.push(row.url.clone());
            cells.push(row.stat_type.to_string());
            for key in &stat_columns {
                cells.push(row.stats.get(key).unwrap_or_default().to_string());
            }
            cells
        })
        .collect();

    Table { columns, rows }
}

/// A tabular artifact the aggregated rows are written to.
///
/// Implementations replace the artifact's previous contents wholesale;
/// there are no append semantics.
#[async_trait]
pub trait RowSink: Send + Sync {
    async fn write(&self, tables: &[NamedTable]) -> Result<(), ExportError>;
}
