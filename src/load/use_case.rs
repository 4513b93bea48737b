//! Use cases: one load operation per screen, mapping wire records to domain.

use super::{load, LoadState, DETAIL_FALLBACK_MESSAGE, LIST_FALLBACK_MESSAGE};
use crate::domain::coin::{Coin, CoinDetail};
use crate::error::HttpError;
use crate::repository::CoinRepository;

use futures_util::Stream;
use std::sync::Arc;

/// Fetch the coin listing.
#[derive(Clone)]
pub struct GetCoins {
    repository: Arc<dyn CoinRepository>,
}

impl GetCoins {
    pub fn new(repository: Arc<dyn CoinRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(&self) -> impl Stream<Item = LoadState<Vec<Coin>>> + Send + 'static {
        let repository = Arc::clone(&self.repository);
        load("get_coins", LIST_FALLBACK_MESSAGE, move || async move {
            let coins = repository.get_coins().await?;
            Ok::<_, HttpError>(coins.into_iter().map(Coin::from).collect())
        })
    }
}

/// Fetch the detail record for one coin.
#[derive(Clone)]
pub struct GetCoinDetail {
    repository: Arc<dyn CoinRepository>,
}

impl GetCoinDetail {
    pub fn new(repository: Arc<dyn CoinRepository>) -> Self {
        Self { repository }
    }

    pub fn invoke(
        &self,
        coin_id: &str,
    ) -> impl Stream<Item = LoadState<CoinDetail>> + Send + 'static {
        let repository = Arc::clone(&self.repository);
        let coin_id = coin_id.to_string();
        load("get_coin_detail", DETAIL_FALLBACK_MESSAGE, move || async move {
            let detail = repository.get_coin_detail(&coin_id).await?;
            Ok::<_, HttpError>(CoinDetail::from(detail))
        })
    }
}
