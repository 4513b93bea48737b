//! # cryptocurrency-sdk
//!
//! A Rust client for the CoinPaprika coin listing API, plus the screen-level
//! load state that a list/detail UI renders.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: Domain models, wire types, wire-to-domain conversion
//! 2. **HTTP API**: `PaprikaHttp`, one method per endpoint
//! 3. **Repository**: `CoinRepository` boundary, with an in-memory mock
//! 4. **Load operations**: `GetCoins` / `GetCoinDetail` emitting `LoadState` streams
//! 5. **View models**: per-screen holders publishing the latest state
//! 6. **High-Level Client**: `PaprikaClient` with a `coins()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cryptocurrency_sdk::prelude::*;
//!
//! let client = PaprikaClient::builder().build()?;
//!
//! let coins = client.coins().list().await?;
//! let bitcoin = client.coins().get("btc-bitcoin").await?;
//!
//! let list = CoinListViewModel::new(client.get_coins());
//! let mut states = list.subscribe();
//! states.wait_for(|s| !s.is_loading() && !s.is_idle()).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and serde helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: Repository ──────────────────────────────────────────────────────

/// Repository trait and mock.
pub mod repository;

// ── Layer 4: Load operations ─────────────────────────────────────────────────

/// `LoadState` and the use cases that produce it.
pub mod load;

// ── Layer 5: View models ─────────────────────────────────────────────────────

/// Per-screen state holders and navigation arguments.
pub mod view_model;

// ── Layer 6: High-Level Client ───────────────────────────────────────────────

/// `PaprikaClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::CoinId;

    // Domain types
    pub use crate::domain::coin::{Coin, CoinDetail, TeamMember};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Repository
    pub use crate::repository::{CoinRepository, MockCoinRepository};

    // Load operations
    pub use crate::load::{
        GetCoinDetail, GetCoins, LoadState, DETAIL_FALLBACK_MESSAGE, LIST_FALLBACK_MESSAGE,
    };

    // View models
    pub use crate::view_model::{
        CoinDetailViewModel, CoinListViewModel, NavArgs, Screen, ScreenState, PARAM_COIN_ID,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CoinsClient, PaprikaClient, PaprikaClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::PaprikaHttp;
}
