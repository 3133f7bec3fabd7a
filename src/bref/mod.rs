//! Fetching and extraction for box score pages.

mod client;
mod helper;
mod keys;
mod tables;

pub use client::Client;
pub use keys::{StatKey, BATTING_KEYS, PITCHING_KEYS, TEAM_BATTING_TABLE, TEAM_PITCHING_TABLE};
pub use tables::{player_rows, team_totals, try_player_rows, try_team_totals};
