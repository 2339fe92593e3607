//! `reqwest`-backed device client.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use tracing::debug;

use crate::config::validate_base_url;
use crate::errors::ConfigError;
use crate::http::errors::FetchError;
use crate::http::traits::HttpGet;

/// HTTP client bound to one device base URL.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    base_url: Url,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = validate_base_url(base_url)?;

        // The device serves status files with no-store; ask intermediaries for the same.
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::InvalidConfiguration {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::InvalidUrl {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl HttpGet for ReqwestClient {
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, FetchError> {
        let url = self.resolve(path)?;

        debug!(event = "core.http.get_started", url = %url);

        let response =
            self.client
                .get(url.clone())
                .send()
                .await
                .map_err(|e| FetchError::Transport {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        debug!(event = "core.http.get_completed", url = %url, status = status.as_u16());
        Ok(body)
    }
}
