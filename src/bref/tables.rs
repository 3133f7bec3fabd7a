//! Table extraction: team totals rows and per-player body rows.
//!
//! Both extractors are pure functions of (document, table id). Missing
//! tables, footer sections, totals rows, and body sections are soft
//! outcomes: the public functions log a warning and return an empty result
//! so the caller can keep going with the rest of its URL list.

use scraper::{ElementRef, Html};

use crate::bref::helper::{cell_text, data_stat, selector};
use crate::bref::keys::StatKey;
use crate::error::{ScrapeError, TableError};
use crate::model::StatRecord;

/// Extracts the allowlisted fields of a table's totals row.
///
/// Returns an empty record when the table, its tfoot, or the totals row is
/// missing, after logging the diagnostic.
pub fn team_totals(document: &Html, table_id: &str, keys: &[StatKey]) -> StatRecord {
    match try_team_totals(document, table_id, keys) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(table_id, "{}", e);
            StatRecord::new()
        }
    }
}

/// Fallible form of [`team_totals`], exposing the lookup outcome.
pub fn try_team_totals(
    document: &Html,
    table_id: &str,
    keys: &[StatKey],
) -> Result<StatRecord, ScrapeError> {
    let table = find_table(document, table_id)?;

    let tfoot_sel = selector("tfoot")?;
    let tfoot = table
        .select(&tfoot_sel)
        .next()
        .ok_or_else(|| TableError::summary_section_not_found(table_id))?;

    let row_sel = selector("tr")?;
    let totals_row = tfoot
        .select(&row_sel)
        .next()
        .ok_or_else(|| TableError::summary_row_not_found(table_id))?;

    let cell_sel = selector("th, td")?;
    let mut record = StatRecord::new();
    for cell in totals_row.select(&cell_sel) {
        let Some(stat) = data_stat(cell) else {
            continue;
        };
        if let Some(out) = StatKey::lookup(keys, stat) {
            record.insert(out, cell_text(cell));
        }
    }

    Ok(record)
}

/// Extracts one record per body row of a table, every named cell included.
///
/// Returns an empty list when the table or its tbody is missing, after
/// logging the diagnostic.
pub fn player_rows(document: &Html, table_id: &str) -> Vec<StatRecord> {
    match try_player_rows(document, table_id) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(table_id, "{}", e);
            Vec::new()
        }
    }
}

/// Fallible form of [`player_rows`], exposing the lookup outcome.
pub fn try_player_rows(document: &Html, table_id: &str) -> Result<Vec<StatRecord>, ScrapeError> {
    let table = find_table(document, table_id)?;

    let tbody_sel = selector("tbody")?;
    let tbody = table
        .select(&tbody_sel)
        .next()
        .ok_or_else(|| TableError::body_section_not_found(table_id))?;

    let row_sel = selector("tr")?;
    let cell_sel = selector("th, td")?;

    let mut rows = Vec::new();
    for row in tbody.select(&row_sel) {
        let mut record = StatRecord::new();
        for cell in row.select(&cell_sel) {
            if let Some(stat) = data_stat(cell) {
                record.insert(stat, cell_text(cell));
            }
        }
        rows.push(record);
    }

    Ok(rows)
}

fn find_table<'a>(document: &'a Html, table_id: &str) -> Result<ElementRef<'a>, ScrapeError> {
    let table_sel = selector(&format!("table#{}", table_id))?;
    document
        .select(&table_sel)
        .next()
        .ok_or_else(|| TableError::table_not_found(table_id).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bref::keys::{BATTING_KEYS, PITCHING_KEYS};
    use crate::test_utils::html;

    mod team_totals {
        use super::*;

        #[test]
        fn test_extracts_allowlisted_pitching_fields() {
            let document = html::page_document(&[html::pitching_table()]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert_eq!(record.get("SO"), Some("55"));
            assert_eq!(record.get("ERA"), Some("3.21"));
            assert_eq!(record.get("FIP"), Some("3.50"));
            assert_eq!(record.get("W"), Some("10"));
            assert_eq!(record.get("L"), Some("5"));
            assert_eq!(record.len(), 5);
        }

        #[test]
        fn test_extracts_allowlisted_batting_fields() {
            let document = html::page_document(&[html::batting_table()]);
            let record = team_totals(&document, "team_batting", BATTING_KEYS);

            assert_eq!(record.get("R"), Some("6"));
            assert_eq!(record.get("H"), Some("9"));
            assert_eq!(record.get("HR"), Some("2"));
            assert_eq!(record.get("SB"), Some("1"));
            assert_eq!(record.get("BA"), Some(".267"));
            assert_eq!(record.get("OBP"), Some(".340"));
            assert_eq!(record.get("SLG"), Some(".450"));
        }

        #[test]
        fn test_ignores_unrecognized_identifiers() {
            let table = html::stat_table(
                "team_pitching",
                &[],
                &[html::totals_row(&[
                    ("W", "4"),
                    ("L", "2"),
                    ("balks", "1"),
                    ("wild_pitches", "3"),
                ])],
            );
            let document = html::page_document(&[table]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert_eq!(record.len(), 2);
            assert!(!record.contains_key("balks"));
        }

        #[test]
        fn test_trims_cell_text() {
            let table = html::stat_table(
                "team_pitching",
                &[],
                &[html::totals_row(&[("earned_run_avg", "  3.21\n ")])],
            );
            let document = html::page_document(&[table]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert_eq!(record.get("ERA"), Some("3.21"));
        }

        #[test]
        fn test_uses_first_tfoot_row_only() {
            let table = html::stat_table(
                "team_pitching",
                &[html::row(&[("W", "99")])],
                &[
                    html::totals_row(&[("W", "10"), ("L", "5")]),
                    html::totals_row(&[("W", "0"), ("L", "0")]),
                ],
            );
            let document = html::page_document(&[table]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert_eq!(record.get("W"), Some("10"));
            assert_eq!(record.get("L"), Some("5"));
        }

        #[test]
        fn test_missing_table_returns_empty() {
            let document = html::page_document(&[html::batting_table()]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert!(record.is_empty());
        }

        #[test]
        fn test_missing_tfoot_returns_empty() {
            let table = html::stat_table_without_tfoot(
                "team_pitching",
                &[html::row(&[("W", "10")])],
            );
            let document = html::page_document(&[table]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert!(record.is_empty());
        }

        #[test]
        fn test_missing_totals_row_returns_empty() {
            let table = html::stat_table("team_pitching", &[html::row(&[("W", "10")])], &[]);
            let document = html::page_document(&[table]);
            let record = team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert!(record.is_empty());
        }

        #[test]
        fn test_try_variant_reports_table_not_found() {
            let document = html::page_document(&[]);
            let result = try_team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert!(matches!(
                result,
                Err(ScrapeError::Table(TableError::TableNotFound { .. }))
            ));
        }

        #[test]
        fn test_try_variant_reports_missing_tfoot() {
            let table = html::stat_table_without_tfoot("team_pitching", &[]);
            let document = html::page_document(&[table]);
            let result = try_team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert!(matches!(
                result,
                Err(ScrapeError::Table(TableError::SummarySectionNotFound { .. }))
            ));
        }

        #[test]
        fn test_try_variant_reports_missing_totals_row() {
            let table = html::stat_table("team_pitching", &[], &[]);
            let document = html::page_document(&[table]);
            let result = try_team_totals(&document, "team_pitching", PITCHING_KEYS);

            assert!(matches!(
                result,
                Err(ScrapeError::Table(TableError::SummaryRowNotFound { .. }))
            ));
        }
    }

    mod player_rows {
        use super::*;

        #[test]
        fn test_one_record_per_body_row() {
            let document = html::page_document(&[html::batting_table()]);
            let rows = player_rows(&document, "team_batting");

            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].get("player"), Some("Judge"));
            assert_eq!(rows[1].get("player"), Some("Soto"));
        }

        #[test]
        fn test_every_named_cell_becomes_a_field() {
            let table = html::stat_table(
                "team_batting",
                &[html::row(&[
                    ("player", "Judge"),
                    ("H", "2"),
                    ("HR", "1"),
                    ("obscure_stat", "0.4"),
                ])],
                &[],
            );
            let document = html::page_document(&[table]);
            let rows = player_rows(&document, "team_batting");

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].len(), 4);
            assert_eq!(rows[0].get("obscure_stat"), Some("0.4"));
        }

        #[test]
        fn test_heterogeneous_field_sets() {
            let table = html::stat_table(
                "team_batting",
                &[
                    html::row(&[("H", "2"), ("HR", "1")]),
                    html::row(&[("H", "1"), ("SO", "3")]),
                ],
                &[],
            );
            let document = html::page_document(&[table]);
            let rows = player_rows(&document, "team_batting");

            assert_eq!(rows.len(), 2);
            assert!(rows[0].contains_key("HR"));
            assert!(!rows[0].contains_key("SO"));
            assert!(rows[1].contains_key("SO"));
            assert!(!rows[1].contains_key("HR"));
        }

        #[test]
        fn test_cells_without_data_stat_are_skipped() {
            let table = r#"<table id="team_batting"><tbody>
                <tr><td data-stat="H">2</td><td>garnish</td></tr>
            </tbody></table>"#
                .to_string();
            let document = html::page_document(&[table]);
            let rows = player_rows(&document, "team_batting");

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].len(), 1);
        }

        #[test]
        fn test_totals_row_not_included() {
            let document = html::page_document(&[html::pitching_table()]);
            let rows = player_rows(&document, "team_pitching");

            // Only the tbody row; the tfoot totals row stays out.
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].get("player"), Some("Cole"));
        }

        #[test]
        fn test_missing_table_returns_empty() {
            let document = html::page_document(&[]);
            let rows = player_rows(&document, "team_batting");

            assert!(rows.is_empty());
        }

        #[test]
        fn test_missing_tbody_returns_empty() {
            let table = html::stat_table_without_tbody(
                "team_batting",
                &[html::totals_row(&[("H", "9")])],
            );
            let document = html::page_document(&[table]);
            let rows = player_rows(&document, "team_batting");

            assert!(rows.is_empty());
        }

        #[test]
        fn test_try_variant_reports_missing_tbody() {
            let table = html::stat_table_without_tbody("team_batting", &[]);
            let document = html::page_document(&[table]);
            let result = try_player_rows(&document, "team_batting");

            assert!(matches!(
                result,
                Err(ScrapeError::Table(TableError::BodySectionNotFound { .. }))
            ));
        }
    }
}
