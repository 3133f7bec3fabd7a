//! Stat identifier allowlists.
//!
//! Each entry maps a cell's machine-readable `data-stat` identifier to the
//! short key it is recorded under. Adding a stat means adding a row here;
//! the extraction logic never changes.

/// One allowlist entry: source identifier and output key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatKey {
    pub data_stat: &'static str,
    pub out: &'static str,
}

const fn key(data_stat: &'static str, out: &'static str) -> StatKey {
    StatKey { data_stat, out }
}

pub const TEAM_PITCHING_TABLE: &str = "team_pitching";
pub const TEAM_BATTING_TABLE: &str = "team_batting";

/// Interesting fields of the pitching totals row.
pub const PITCHING_KEYS: &[StatKey] = &[
    key("SO", "SO"),
    key("earned_run_avg", "ERA"),
    key("fip", "FIP"),
    key("W", "W"),
    key("L", "L"),
];

/// Interesting fields of the batting totals row.
pub const BATTING_KEYS: &[StatKey] = &[
    key("R", "R"),
    key("H", "H"),
    key("HR", "HR"),
    key("SB", "SB"),
    key("batting_avg", "BA"),
    key("onbase_perc", "OBP"),
    key("slugging_perc", "SLG"),
];

impl StatKey {
    /// Looks up the output key for a source identifier in an allowlist.
    pub fn lookup(keys: &[StatKey], data_stat: &str) -> Option<&'static str> {
        keys.iter()
            .find(|k| k.data_stat == data_stat)
            .map(|k| k.out)
    }
}
