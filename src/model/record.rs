use std::collections::BTreeMap;
use std::fmt;

/// A mapping from stat short-name (e.g. "SO", "ERA", "BA") to its verbatim
/// cell text, scoped to one source page or one table row.
///
/// Keys are unique; iteration order is not meaningful for export, which
/// imposes its own column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatRecord {
    fields: BTreeMap<String, String>,
}

impl StatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing any previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Merges another record into this one; the other record wins on key
    /// collisions.
    pub fn extend(&mut self, other: StatRecord) {
        self.fields.extend(other.fields);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StatRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = StatRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Which table a player row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatType {
    Batting,
    Pitching,
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatType::Batting => write!(f, "Batting"),
            StatType::Pitching => write!(f, "Pitching"),
        }
    }
}

/// One URL's merged team totals, exported as a single spreadsheet row.
#[derive(Debug, Clone)]
pub struct TeamRow {
    pub url: String,
    pub stats: StatRecord,
}

impl TeamRow {
    /// Renders the row as cells: source URL first, then the given stat keys
    /// in order, with missing keys as empty strings.
    pub fn to_cells(&self, keys: &[&str]) -> Vec<String> {
        let mut cells = Vec::with_capacity(keys.len() + 1);
        cells.push(self.url.clone());
        for key in keys {
            cells.push(self.stats.get(key).unwrap_or_default().to_string());
        }
        cells
    }
}

/// One player table row, tagged with its source URL and stat type.
///
/// The field set is exactly whatever named cells existed in that row, so
/// different rows may carry different keys.
#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub url: String,
    pub stat_type: StatType,
    pub stats: StatRecord,
}
