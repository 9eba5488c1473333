use crate::domain::model::ReportKey;
use crate::domain::ports::ReportSource;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;

/// Reporting API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpReportSource {
    base_url: String,
    client: Client,
}

impl HttpReportSource {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        validate_url("base_url", base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn report_url(&self, key: &ReportKey) -> String {
        format!("{}{}", self.base_url, key.path())
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch(&self, key: &ReportKey) -> Result<String> {
        let url = self.report_url(key);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ReportError::HttpStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        Ok(response.text().await?)
    }
}
