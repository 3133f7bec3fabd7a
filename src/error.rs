//! Error types for the box score exporter.
//!
//! This module defines typed errors for different components of the application,
//! providing better error categorization and enabling specific error handling strategies.

use thiserror::Error;

/// Result type alias using our custom error types.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error type that encompasses all application errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("configuration error")]
    Config(#[from] ConfigError),

    /// Page fetch and parsing errors
    #[error("scrape error")]
    Scrape(#[from] ScrapeError),

    /// Spreadsheet sink errors
    #[error("export error")]
    Export(#[from] ExportError),

    /// Generic errors that don't fit other categories
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable parsing failed
    #[error("failed to parse environment variables: {0}")]
    EnvParse(String),

    /// URL list file could not be read
    #[error("failed to read URL list from {path}: {message}")]
    UrlFile { path: String, message: String },

    /// URL list file lacks the required column
    #[error("URL list {path} has no '{column}' column")]
    MissingColumn { path: String, column: String },

    /// Configuration value is invalid
    #[error("invalid configuration value for {field}: {message}")]
    Invalid { field: String, message: String },
}

/// Page fetch and parsing errors.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    /// HTML parsing failed
    #[error("HTML parsing error")]
    Parse(#[from] ParseError),

    /// Table lookup came up empty somewhere
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Soft table-lookup outcomes.
///
/// Every variant is a diagnostic, not a fault: extractors log it and return
/// an empty result, and the aggregator carries on with the next URL.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// No table with the requested id on the page
    #[error("table '{table_id}' not found")]
    TableNotFound { table_id: String },

    /// Table has no footer section to hold the totals row
    #[error("table '{table_id}' has no tfoot section")]
    SummarySectionNotFound { table_id: String },

    /// Footer section exists but holds no rows
    #[error("table '{table_id}' has no totals row in tfoot")]
    SummaryRowNotFound { table_id: String },

    /// Table has no body section to hold player rows
    #[error("table '{table_id}' has no tbody section")]
    BodySectionNotFound { table_id: String },
}

/// HTML parsing errors.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Invalid CSS selector
    #[error("invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// Failed to parse numeric value
    #[error("failed to parse number from '{text}': {message}")]
    NumberParse { text: String, message: String },
}

/// Spreadsheet sink errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Local workbook write failed
    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Sheets API request failed
    #[error("Sheets API request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Sheets API returned an error status
    #[error("Sheets API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Credential file could not be read or parsed
    #[error("failed to load credentials from {path}: {message}")]
    Credentials { path: String, message: String },

    /// Sheets API base URL is unusable
    #[error("invalid Sheets API URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ConfigError {
    /// Creates a new environment parse error.
    pub fn env_parse(err: impl std::fmt::Display) -> Self {
        Self::EnvParse(err.to_string())
    }

    /// Creates a URL file read error.
    pub fn url_file(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::UrlFile {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Creates a missing column error.
    pub fn missing_column(path: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }

    /// Creates a new invalid configuration error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl TableError {
    /// Creates a table not found error.
    pub fn table_not_found(table_id: impl Into<String>) -> Self {
        Self::TableNotFound {
            table_id: table_id.into(),
        }
    }

    /// Creates a missing footer section error.
    pub fn summary_section_not_found(table_id: impl Into<String>) -> Self {
        Self::SummarySectionNotFound {
            table_id: table_id.into(),
        }
    }

    /// Creates a missing totals row error.
    pub fn summary_row_not_found(table_id: impl Into<String>) -> Self {
        Self::SummaryRowNotFound {
            table_id: table_id.into(),
        }
    }

    /// Creates a missing body section error.
    pub fn body_section_not_found(table_id: impl Into<String>) -> Self {
        Self::BodySectionNotFound {
            table_id: table_id.into(),
        }
    }
}

impl ParseError {
    /// Creates an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: err.to_string(),
        }
    }

    /// Creates a number parse error.
    pub fn number_parse(text: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::NumberParse {
            text: text.into(),
            message: err.to_string(),
        }
    }
}

impl ScrapeError {
    /// Creates a server error from HTTP status and response body.
    pub fn server_error(status: reqwest::StatusCode, body: String) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message: body,
        }
    }
}

impl ExportError {
    /// Creates a Sheets API error from HTTP status and response body.
    pub fn api(status: reqwest::StatusCode, body: String) -> Self {
        Self::Api {
            status: status.as_u16(),
            message: body,
        }
    }

    /// Creates a credentials error.
    pub fn credentials(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Credentials {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: err.to_string(),
        }
    }
}
