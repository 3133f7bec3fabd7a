//! Model definitions for scraped statistics.
//!
//! This module provides the record types extracted from box score pages and
//! the derived win/loss percentage calculation applied to team totals.

pub mod derived;
pub mod record;

pub use derived::{apply_win_loss_percentages, LOSS_PCT_KEY, WIN_PCT_KEY};
pub use record::{PlayerRow, StatRecord, StatType, TeamRow};
