//! Coins sub-client: listing and detail as domain types.

use crate::client::PaprikaClient;
use crate::domain::coin::{Coin, CoinDetail};
use crate::error::SdkError;

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a PaprikaClient,
}

impl<'a> Coins<'a> {
    /// All coins, in API order.
    pub async fn list(&self) -> Result<Vec<Coin>, SdkError> {
        let resp = self.client.http.get_coins().await?;
        Ok(resp.into_iter().map(Coin::from).collect())
    }

    /// Detail record for one coin.
    pub async fn get(&self, coin_id: &str) -> Result<CoinDetail, SdkError> {
        let resp = self.client.http.get_coin_detail(coin_id).await?;
        Ok(CoinDetail::from(resp))
    }
}
