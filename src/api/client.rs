//! Blocking HTTP client for the Data API. One request at a time; the pipeline never overlaps calls.

use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

use super::{
    COMMENT_THREADS_ENDPOINT, CommentThreadsQuery, SEARCH_ENDPOINT, SearchQuery, YouTubeApi,
    api_error_message,
};
use crate::error::HarvestError;

/// Authenticated client: every request carries the developer key as `key=`.
pub struct YouTubeClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    /// Build a client against `base_url` (e.g. `https://www.googleapis.com/youtube/v3`).
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, HarvestError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| HarvestError::Transport {
                endpoint: "client",
                source,
            })?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{resource}` and return the body of a 2xx response.
    fn get(
        &self,
        endpoint: &'static str,
        resource: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, HarvestError> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("GET {} {:?}", url, params);
        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .map_err(|source| HarvestError::Transport { endpoint, source })?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|source| HarvestError::Transport { endpoint, source })?;
        if !status.is_success() {
            let message = api_error_message(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
            return Err(HarvestError::Api {
                endpoint,
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }
}

impl YouTubeApi for YouTubeClient {
    fn search_videos(&self, query: &SearchQuery<'_>) -> Result<String, HarvestError> {
        self.get(SEARCH_ENDPOINT, "search", &query.params())
    }

    fn list_comment_threads(
        &self,
        query: &CommentThreadsQuery<'_>,
    ) -> Result<String, HarvestError> {
        self.get(COMMENT_THREADS_ENDPOINT, "commentThreads", &query.params())
    }
}
