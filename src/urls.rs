//! URL list input.
//!
//! The run starts from a CSV file with a `URL` column; any other columns
//! are ignored. A missing file or missing column is fatal at startup.

use serde_derive::Deserialize;

use crate::error::ConfigError;

pub const URL_COLUMN: &str = "URL";

#[derive(Deserialize, Debug)]
struct UrlRecord {
    #[serde(rename = "URL")]
    url: String,
}

/// Reads the source URLs from a CSV file, preserving file order.
pub fn load_url_list(path: &str) -> Result<Vec<String>, ConfigError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| ConfigError::url_file(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| ConfigError::url_file(path, e))?
        .clone();
    if !headers.iter().any(|h| h == URL_COLUMN) {
        return Err(ConfigError::missing_column(path, URL_COLUMN));
    }

    let mut urls = Vec::new();
    for record in reader.deserialize::<UrlRecord>() {
        let record = record.map_err(|e| ConfigError::url_file(path, e))?;
        urls.push(record.url);
    }
    Ok(urls)
}
