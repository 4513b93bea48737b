//! Repository boundary between the load operations and the network.
//!
//! `PaprikaHttp` is the production implementation; [`mock::MockCoinRepository`]
//! serves canned data or synthetic failures without a network.

pub mod mock;

use crate::domain::coin::wire::{CoinDetailResponse, CoinResponse};
use crate::error::HttpError;
use async_trait::async_trait;
use std::sync::Arc;

pub use mock::MockCoinRepository;

/// Source of coin wire records.
#[async_trait]
pub trait CoinRepository: Send + Sync {
    async fn get_coins(&self) -> Result<Vec<CoinResponse>, HttpError>;

    async fn get_coin_detail(&self, coin_id: &str) -> Result<CoinDetailResponse, HttpError>;
}

#[async_trait]
impl<R: CoinRepository + ?Sized> CoinRepository for Arc<R> {
    async fn get_coins(&self) -> Result<Vec<CoinResponse>, HttpError> {
        (**self).get_coins().await
    }

    async fn get_coin_detail(&self, coin_id: &str) -> Result<CoinDetailResponse, HttpError> {
        (**self).get_coin_detail(coin_id).await
    }
}
