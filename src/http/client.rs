//! Low-level HTTP client: `PaprikaHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens in the load operation or the high-level client).

use crate::domain::coin::wire::{CoinDetailResponse, CoinResponse};
use crate::error::{HttpError, SdkError};
use crate::repository::CoinRepository;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Low-level HTTP client for the CoinPaprika REST API.
#[derive(Clone)]
pub struct PaprikaHttp {
    base_url: String,
    client: Client,
}

/// Error body shape used by the API (`{"error": "id not found"}`).
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(alias = "message")]
    error: Option<String>,
}

impl PaprikaHttp {
    /// Client with the transport's default timeouts.
    pub fn new(base_url: &str) -> Result<Self, SdkError> {
        Self::with_options(base_url, None, None)
    }

    pub fn with_options(
        base_url: &str,
        timeout: Option<Duration>,
        user_agent: Option<&str>,
    ) -> Result<Self, SdkError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        if let Some(ua) = user_agent {
            builder = builder.user_agent(ua);
        }
        let client = builder
            .build()
            .map_err(|e| SdkError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(base_url, client))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_coins(&self) -> Result<Vec<CoinResponse>, HttpError> {
        let url = format!("{}/v1/coins", self.base_url);
        self.get(&url).await
    }

    pub async fn get_coin_detail(&self, coin_id: &str) -> Result<CoinDetailResponse, HttpError> {
        let url = format!(
            "{}/v1/coins/{}",
            self.base_url,
            urlencoding::encode(coin_id)
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!(method = "GET", url, "Sending request");

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return serde_json::from_slice::<T>(&bytes).map_err(|e| {
                tracing::warn!(url, error = %e, "Malformed response body");
                HttpError::from(e)
            });
        }

        let body_text = resp.text().await.unwrap_or_default();
        let message = status_message(status, &body_text);
        tracing::warn!(
            url,
            status = status.as_u16(),
            message = message.as_deref().unwrap_or(""),
            "Request failed"
        );

        Err(HttpError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Upstream's explanation of a non-2xx response: the JSON `error` field when
/// present, else the status description. An empty body carries nothing.
fn status_message(status: StatusCode, body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error: Some(e) }) if !e.trim().is_empty() => Some(e.trim().to_string()),
        _ => status.canonical_reason().map(str::to_string),
    }
}

#[async_trait]
impl CoinRepository for PaprikaHttp {
    async fn get_coins(&self) -> Result<Vec<CoinResponse>, HttpError> {
        PaprikaHttp::get_coins(self).await
    }

    async fn get_coin_detail(&self, coin_id: &str) -> Result<CoinDetailResponse, HttpError> {
        PaprikaHttp::get_coin_detail(self, coin_id).await
    }
}
