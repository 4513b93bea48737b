//! High-level client: `PaprikaClient` with nested sub-client accessors.
//!
//! The `coins()` sub-client returns domain types directly. Screens use the
//! repository/use-case path instead; `repository()` hands out the shared
//! HTTP layer for that.

use crate::domain::coin::client::Coins;
use crate::error::SdkError;
use crate::http::PaprikaHttp;
use crate::load::{GetCoinDetail, GetCoins};
use crate::repository::CoinRepository;

use std::sync::Arc;
use std::time::Duration;

pub use crate::domain::coin::client::Coins as CoinsClient;

/// The primary entry point for the SDK.
#[derive(Clone)]
pub struct PaprikaClient {
    pub(crate) http: Arc<PaprikaHttp>,
}

impl PaprikaClient {
    pub fn builder() -> PaprikaClientBuilder {
        PaprikaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    // ── Screen wiring ────────────────────────────────────────────────────

    /// The HTTP layer as a `CoinRepository`.
    pub fn repository(&self) -> Arc<dyn CoinRepository> {
        self.http.clone()
    }

    pub fn get_coins(&self) -> GetCoins {
        GetCoins::new(self.repository())
    }

    pub fn get_coin_detail(&self) -> GetCoinDetail {
        GetCoinDetail::new(self.repository())
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PaprikaClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl Default for PaprikaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: None,
        }
    }
}

impl PaprikaClientBuilder {
    /// Defaults, with the base URL taken from `COINPAPRIKA_API_URL` when set.
    pub fn from_env() -> Self {
        let builder = Self::default();
        match std::env::var(crate::network::API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => builder.base_url(url.trim()),
            _ => builder,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Overall request timeout. Unset means the transport default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<PaprikaClient, SdkError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "Base URL must be http(s): {}",
                self.base_url
            )));
        }

        let http =
            PaprikaHttp::with_options(&self.base_url, self.timeout, self.user_agent.as_deref())?;
        tracing::debug!(base_url = http.base_url(), "Client built");
        Ok(PaprikaClient {
            http: Arc::new(http),
        })
    }
}
