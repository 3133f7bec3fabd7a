//! Derived win/loss percentage metrics.
//!
//! These two fields are computed from the scraped "W" and "L" counts rather
//! than read off the page. The calculation only runs on records that came
//! out of a totals row; empty records never reach it.

use crate::error::ParseError;
use crate::model::record::StatRecord;

pub const WIN_PCT_KEY: &str = "Win Percentage";
pub const LOSS_PCT_KEY: &str = "Loss Percentage";

/// Computes win and loss percentages from the record's "W" and "L" fields
/// and inserts them under [`WIN_PCT_KEY`] and [`LOSS_PCT_KEY`].
///
/// A missing count defaults to zero. A present but non-numeric count is a
/// typed error and leaves the record untouched; callers log it and move on.
/// When wins + losses is zero both fields are the literal string "0",
/// otherwise each is formatted to two decimals with a trailing percent sign.
pub fn apply_win_loss_percentages(record: &mut StatRecord) -> Result<(), ParseError> {
    let wins = read_count(record, "W")?;
    let losses = read_count(record, "L")?;
    let total = wins + losses;

    let (win_pct, loss_pct) = if total > 0 {
        (
            format!("{:.2}%", wins as f64 / total as f64 * 100.0),
            format!("{:.2}%", losses as f64 / total as f64 * 100.0),
        )
    } else {
        ("0".to_string(), "0".to_string())
    };

    record.insert(WIN_PCT_KEY, win_pct);
    record.insert(LOSS_PCT_KEY, loss_pct);
    Ok(())
}

fn read_count(record: &StatRecord, key: &str) -> Result<u64, ParseError> {
    match record.get(key) {
        Some(text) => text
            .parse::<u64>()
            .map_err(|e| ParseError::number_parse(text, e)),
        None => Ok(0),
    }
}
