//! Cloud spreadsheet sink.
//!
//! Talks to the Google Sheets REST API: each named table is written to the
//! sheet carrying its name inside one configured spreadsheet. A sheet that
//! does not exist yet is created, an existing one is cleared before being
//! repopulated with the header row and data rows.
//!
//! Authentication is an external collaborator: the credential file supplies
//! a ready bearer token, and minting that token (service account flow,
//! scope grants) happens outside this process.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response, Url};
use serde_derive::Deserialize;
use serde_json::json;

use crate::config::SheetsConfig;
use crate::error::ExportError;
use crate::export::{NamedTable, RowSink};

#[derive(Deserialize, Debug)]
struct ServiceCredentials {
    token: String,
}

#[derive(Deserialize, Debug)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Deserialize, Debug)]
struct SheetMeta {
    properties: SheetProperties,
}

#[derive(Deserialize, Debug)]
struct SheetProperties {
    title: String,
}

#[derive(Debug)]
pub struct SheetsSink {
    http_client: HttpClient,
    base_url: Url,
    spreadsheet_id: String,
    token: String,
}

impl SheetsSink {
    pub fn new(config: &SheetsConfig) -> Result<Self, ExportError> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| ExportError::invalid_url(&config.api_url, e))?;
        if base_url.cannot_be_a_base() {
            return Err(ExportError::invalid_url(
                &config.api_url,
                "not a base URL",
            ));
        }

        let credentials = load_credentials(&config.credentials_path)?;

        Ok(Self {
            http_client: HttpClient::new(),
            base_url,
            spreadsheet_id: config.spreadsheet_id.clone(),
            token: credentials.token,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ExportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ExportError::invalid_url(self.base_url.as_str(), "not a base URL"))?
            .extend(segments);
        Ok(url)
    }

    /// Fetches the titles of the sheets already present in the spreadsheet.
    async fn sheet_titles(&self) -> Result<Vec<String>, ExportError> {
        let url = self.endpoint(&["v4", "spreadsheets", &self.spreadsheet_id])?;
        let response = self
            .http_client
            .get(url)
            .query(&[("fields", "sheets.properties.title")])
            .bearer_auth(&self.token)
            .send()
            .await?;
        let meta: SpreadsheetMeta = check(response).await?.json().await?;

        Ok(meta
            .sheets
            .into_iter()
            .map(|s| s.properties.title)
            .collect())
    }

    async fn add_sheet(&self, title: &str) -> Result<(), ExportError> {
        let url = self.endpoint(&[
            "v4",
            "spreadsheets",
            &format!("{}:batchUpdate", self.spreadsheet_id),
        ])?;
        let body = json!({
            "requests": [{ "addSheet": { "properties": { "title": title } } }]
        });
        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn clear_sheet(&self, title: &str) -> Result<(), ExportError> {
        let url = self.endpoint(&[
            "v4",
            "spreadsheets",
            &self.spreadsheet_id,
            "values",
            &format!("{}:clear", title),
        ])?;
        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.token)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn update_values(
        &self,
        title: &str,
        values: &[Vec<String>],
    ) -> Result<(), ExportError> {
        let url = self.endpoint(&[
            "v4",
            "spreadsheets",
            &self.spreadsheet_id,
            "values",
            title,
        ])?;
        let body = json!({
            "range": title,
            "majorDimension": "ROWS",
            "values": values,
        });
        let response = self
            .http_client
            .put(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl RowSink for SheetsSink {
    async fn write(&self, tables: &[NamedTable]) -> Result<(), ExportError> {
        let existing = self.sheet_titles().await?;

        for named in tables {
            if !existing.iter().any(|t| t == &named.name) {
                tracing::info!(sheet = %named.name, "creating missing sheet");
                self.add_sheet(&named.name).await?;
            }
            self.clear_sheet(&named.name).await?;
            self.update_values(&named.name, &named.table.with_header())
                .await?;
            tracing::info!(
                sheet = %named.name,
                rows = named.table.rows.len(),
                "sheet repopulated"
            );
        }

        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, ExportError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ExportError::api(status, body))
    }
}

fn load_credentials(path: &str) -> Result<ServiceCredentials, ExportError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ExportError::credentials(path, e))?;
    serde_json::from_str(&raw).map_err(|e| ExportError::credentials(path, e))
}
