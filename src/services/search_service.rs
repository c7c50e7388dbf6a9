use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::SerpApiSettings;
use crate::models::OrganicResult;

/// Number of results requested from the provider per query.
pub const RESULTS_PER_QUERY: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Transport failure. Built through `SearchError::http`, which drops the
    /// request URL because it carries the API key.
    #[error("search request failed: {0}")]
    Http(reqwest::Error),

    #[error("search provider returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("search provider error: {0}")]
    Api(String),

    #[error("failed to decode search response: {0}")]
    Decode(String),
}

impl SearchError {
    fn http(e: reqwest::Error) -> Self {
        SearchError::Http(e.without_url())
    }
}

/// A source of ordered organic results for a keyword.
///
/// One call per lookup; implementations must not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn organic_results(&self, keyword: &str) -> Result<Vec<OrganicResult>, SearchError>;
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    organic_results: Vec<SerpApiOrganicResult>,
}

#[derive(Debug, Deserialize)]
struct SerpApiOrganicResult {
    #[serde(default)]
    position: Option<u32>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    link: Option<String>,
}

/// Google search through SerpApi's JSON endpoint.
#[derive(Clone)]
pub struct SerpApiClient {
    http: reqwest::Client,
    settings: SerpApiSettings,
}

impl SerpApiClient {
    pub fn new(settings: SerpApiSettings) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, settings })
    }

    fn endpoint(&self) -> String {
        format!("{}/search.json", self.settings.base_url)
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn organic_results(&self, keyword: &str) -> Result<Vec<OrganicResult>, SearchError> {
        let num = RESULTS_PER_QUERY.to_string();
        let response = self
            .http
            .get(self.endpoint())
            .query(&[
                ("engine", "google"),
                ("q", keyword),
                ("num", num.as_str()),
                ("hl", self.settings.language.as_str()),
                ("gl", self.settings.country.as_str()),
                ("device", self.settings.device.as_str()),
                ("google_domain", self.settings.google_domain.as_str()),
                ("api_key", self.settings.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(SearchError::http)?;

        let status = response.status();
        let body = response.text().await.map_err(SearchError::http)?;

        if !status.is_success() {
            let message = serde_json::from_str::<SerpApiResponse>(&body)
                .ok()
                .and_then(|parsed| parsed.error)
                .unwrap_or(body);
            return Err(SearchError::Status { status, message });
        }

        let parsed: SerpApiResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(SearchError::Api(error));
        }

        tracing::debug!(
            keyword,
            count = parsed.organic_results.len(),
            "received organic results"
        );

        Ok(parsed
            .organic_results
            .into_iter()
            .enumerate()
            .map(|(index, result)| OrganicResult {
                position: result.position.unwrap_or(index as u32 + 1),
                title: result.title.unwrap_or_default(),
                link: result.link.unwrap_or_default(),
            })
            .collect())
    }
}
