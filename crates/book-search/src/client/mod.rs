//! Google Books API client.
//!
//! One TLS-verified HTTP client, one `volumes.list` request per search.
//! The API key is checked before the client is built, so a missing key never
//! reaches the network.

mod response;

use reqwest::Client;

use crate::config::{Config, VolumeFilter};
use crate::error::{ClientError, ClientResult, ConfigError};
use crate::models::Volumes;
use crate::query::SearchQuery;

/// Google Books volumes client.
#[derive(Clone)]
pub struct BooksClient {
    /// HTTP client.
    client: Client,

    /// Validated API key.
    api_key: String,

    /// Volumes API base URL.
    volumes_api_url: String,

    /// Optional volume filter.
    filter: Option<VolumeFilter>,
}

impl BooksClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no key is configured, or an
    /// error if HTTP client initialization fails.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let api_key = config.require_api_key()?.to_string();

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(reqwest::header::HeaderValue::from_str(&config.application_name)?)
            .https_only(config.volumes_api_url.starts_with("https://"))
            .gzip(true)
            .build()?;

        Ok(Self { client, api_key, volumes_api_url: config.volumes_api_url, filter: config.filter })
    }

    /// Search volumes matching a query.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not a volumes document.
    pub async fn search_volumes(&self, query: &SearchQuery) -> ClientResult<Volumes> {
        let url = format!("{}/volumes", self.volumes_api_url);

        let mut params = vec![
            ("q".to_string(), query.as_str().to_string()),
            ("key".to_string(), self.api_key.clone()),
        ];

        if let Some(filter) = self.filter {
            params.push(("filter".to_string(), filter.as_param().to_string()));
        }

        tracing::debug!(query = %query, filter = ?self.filter, "Searching volumes");

        // The request URL carries the API key; keep it out of error messages.
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| ClientError::Http(e.without_url()))?;
        let response = response::check_status(response).await?;
        let body = response.bytes().await.map_err(|e| ClientError::Http(e.without_url()))?;
        let volumes: Volumes = serde_json::from_slice(&body)?;

        tracing::info!(
            query = %query,
            total_items = volumes.total_items,
            returned = volumes.items.len(),
            "Search complete"
        );

        Ok(volumes)
    }
}

impl std::fmt::Debug for BooksClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BooksClient")
            .field("volumes_api_url", &self.volumes_api_url)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
