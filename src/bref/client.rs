use crate::error::ScrapeError;
use reqwest::Client as HttpClient;

/// Page fetcher: a plain HTTP GET returning the raw markup or an error.
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
        }
    }

    pub async fn get(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self
            .http_client
            .get(url)
            .header("user-agent", "reqwest")
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.text().await?)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ScrapeError::server_error(status, body))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
