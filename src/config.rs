use anyhow::{anyhow, Result};
use serde_derive::Deserialize;
use std::str::FromStr;

use crate::error::ConfigError;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig> {
    match envy::from_env::<AppConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load AppConfig: {}", err)),
    }
}

fn default_urls_file() -> String {
    "urls.csv".to_string()
}

fn default_fetch_delay_ms() -> u64 {
    0
}

fn default_include_players() -> bool {
    false
}

#[derive(Deserialize, Debug)]
pub struct ScraperConfig {
    #[serde(default = "default_urls_file")]
    pub urls_file: String,
    // fixed pause between page fetches; 0 disables it
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,
    #[serde(default = "default_include_players")]
    pub include_players: bool,
}

pub fn load_scraper_config() -> Result<ScraperConfig> {
    match envy::prefixed("SCRAPER_").from_env::<ScraperConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load ScraperConfig: {}", err)),
    }
}

/// Which sink variant receives the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Xlsx,
    Sheets,
}

fn default_sink() -> String {
    "xlsx".to_string()
}

fn default_xlsx_path() -> String {
    "Baseball_Stats_2024.xlsx".to_string()
}

#[derive(Deserialize, Debug)]
pub struct ExportConfig {
    #[serde(default = "default_sink")]
    pub sink: String,
    #[serde(default = "default_xlsx_path")]
    pub xlsx_path: String,
}

impl ExportConfig {
    pub fn sink_kind(&self) -> Result<SinkKind, ConfigError> {
        match self.sink.as_str() {
            "xlsx" => Ok(SinkKind::Xlsx),
            "sheets" => Ok(SinkKind::Sheets),
            other => Err(ConfigError::invalid(
                "sink",
                format!("'{}' is not one of 'xlsx', 'sheets'", other),
            )),
        }
    }
}

pub fn load_export_config() -> Result<ExportConfig> {
    match envy::prefixed("EXPORT_").from_env::<ExportConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load ExportConfig: {}", err)),
    }
}

fn default_sheets_api_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_team_sheet() -> String {
    "Team Stats".to_string()
}

fn default_player_sheet() -> String {
    "Player Stats".to_string()
}

#[derive(Deserialize, Debug)]
pub struct SheetsConfig {
    pub credentials_path: String,
    pub spreadsheet_id: String,
    #[serde(default = "default_sheets_api_url")]
    pub api_url: String,
    #[serde(default = "default_team_sheet")]
    pub team_sheet: String,
    #[serde(default = "default_player_sheet")]
    pub player_sheet: String,
}

pub fn load_sheets_config() -> Result<SheetsConfig> {
    match envy::prefixed("SHEETS_").from_env::<SheetsConfig>() {
        Ok(config) => Ok(config),
        Err(err) => Err(anyhow!("Failed to load SheetsConfig: {}", err)),
    }
}
