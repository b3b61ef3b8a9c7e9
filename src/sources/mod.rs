//! Fetch+normalize adapters for the external mention providers.
//!
//! Each adapter issues one read-only search request and maps the provider's
//! record shape onto [`Mention`]. Failures are reported as [`FetchError`];
//! the aggregation service decides what to do with them (it substitutes an
//! empty contribution rather than propagating).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::mention::Mention;

pub mod gnews;
pub mod hackernews;
pub mod reddit;

/// Identifier attached to every outbound request.
pub const USER_AGENT: &str = "instantproof-widget";

/// Term substituted when a caller supplies no query.
pub const DEFAULT_QUERY: &str = "reviews";

/// Errors produced by source adapters.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{provider} returned status {status}")]
    Api { provider: &'static str, status: u16 },
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Send a prepared request and decode its JSON body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    provider: &'static str,
) -> FetchResult<T> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Api {
            provider,
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

pub(crate) fn query_or_default(query: &str) -> &str {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        DEFAULT_QUERY
    } else {
        trimmed
    }
}

/// One method per provider so the aggregation service can fan out to all of
/// them and unit tests can substitute stubs.
#[async_trait]
pub trait MentionFetcher {
    async fn hackernews(&self, query: &str, limit: usize) -> FetchResult<Vec<Mention>>;
    async fn reddit(&self, query: &str, limit: usize) -> FetchResult<Vec<Mention>>;
    async fn news(&self, query: &str, limit: usize) -> FetchResult<Vec<Mention>>;
    /// Whether the news provider is provisioned with an API key.
    fn has_news_key(&self) -> bool;
}

/// Production fetcher backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    gnews_api_key: Option<String>,
}

impl HttpFetcher {
    pub fn new(gnews_api_key: Option<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            gnews_api_key,
        })
    }
}

#[async_trait]
impl MentionFetcher for HttpFetcher {
    async fn hackernews(&self, query: &str, limit: usize) -> FetchResult<Vec<Mention>> {
        hackernews::fetch(&self.client, query, limit).await
    }

    async fn reddit(&self, query: &str, limit: usize) -> FetchResult<Vec<Mention>> {
        reddit::fetch(&self.client, query, limit).await
    }

    async fn news(&self, query: &str, limit: usize) -> FetchResult<Vec<Mention>> {
        match &self.gnews_api_key {
            Some(key) => gnews::fetch(&self.client, key, query, limit).await,
            None => Ok(Vec::new()),
        }
    }

    fn has_news_key(&self) -> bool {
        self.gnews_api_key.is_some()
    }
}
