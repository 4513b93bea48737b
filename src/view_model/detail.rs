//! Coin detail screen holder.

use super::nav::{NavArgs, PARAM_COIN_ID};
use super::session::Session;
use super::ScreenState;
use crate::domain::coin::CoinDetail;
use crate::load::GetCoinDetail;
use crate::shared::CoinId;

use tokio::sync::watch;

/// Holds the detail screen's state for one session.
///
/// The coin id comes from the navigation arguments. When it is missing the
/// holder never loads and stays [`ScreenState::Idle`]; that is a quiet no-op,
/// not an error state. Must be created from within a Tokio runtime.
pub struct CoinDetailViewModel {
    use_case: GetCoinDetail,
    coin_id: Option<CoinId>,
    session: Session<CoinDetail>,
}

impl CoinDetailViewModel {
    pub fn new(use_case: GetCoinDetail, args: &NavArgs) -> Self {
        let coin_id = args
            .get(PARAM_COIN_ID)
            .filter(|id| !id.is_empty())
            .map(CoinId::from);
        if coin_id.is_none() {
            tracing::info!("Detail screen opened without a coin id, nothing to load");
        }

        let vm = Self {
            use_case,
            coin_id,
            session: Session::new("coin_detail"),
        };
        vm.reload();
        vm
    }

    pub fn coin_id(&self) -> Option<&CoinId> {
        self.coin_id.as_ref()
    }

    pub fn state(&self) -> ScreenState<CoinDetail> {
        self.session.current()
    }

    pub fn detail(&self) -> Option<CoinDetail> {
        self.state().data().cloned()
    }

    /// Change-notified, read-only view of the state.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<CoinDetail>> {
        self.session.subscribe()
    }

    /// Start a fresh load for the navigated coin. No-op without an id.
    pub fn reload(&self) {
        if let Some(coin_id) = &self.coin_id {
            self.session.run(self.use_case.invoke(coin_id.as_str()));
        }
    }

    /// End the session; nothing is written to the state afterwards.
    pub fn close(&self) {
        self.session.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::wire::CoinDetailResponse;
    use crate::error::HttpError;
    use crate::repository::MockCoinRepository;
    use std::sync::Arc;

    fn detail_response() -> CoinDetailResponse {
        serde_json::from_value(serde_json::json!({
            "id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC",
            "rank": 1, "is_active": true, "description": "Digital gold",
            "tags": [{"id": "segwit", "name": "Segwit"}],
            "team": [{"id": "satoshi-nakamoto", "name": "Satoshi Nakamoto", "position": "Founder"}],
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_detail_without_id_never_loads() {
        let repo = Arc::new(MockCoinRepository::new().with_detail(detail_response()));
        let vm = CoinDetailViewModel::new(GetCoinDetail::new(repo.clone()), &NavArgs::new());

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        vm.reload();

        let state = vm.state();
        assert!(state.is_idle());
        assert!(!state.is_loading());
        assert_eq!(state.error(), "");
        assert!(vm.detail().is_none());
        assert!(vm.coin_id().is_none());
        assert_eq!(repo.detail_calls(), 0);
    }

    #[tokio::test]
    async fn test_detail_with_empty_id_never_loads() {
        let repo = Arc::new(MockCoinRepository::new().with_detail(detail_response()));
        let args = NavArgs::new().with(PARAM_COIN_ID, "");
        let vm = CoinDetailViewModel::new(GetCoinDetail::new(repo.clone()), &args);

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        vm.reload();

        assert!(vm.state().is_idle());
        assert_eq!(vm.state().error(), "");
        assert!(vm.coin_id().is_none());
        assert_eq!(repo.detail_calls(), 0);
        assert!(repo.requested_ids().is_empty());
    }

    #[tokio::test]
    async fn test_detail_loads_navigated_id() {
        let repo = Arc::new(MockCoinRepository::new().with_detail(detail_response()));
        let args = NavArgs::new().with(PARAM_COIN_ID, "btc-bitcoin");
        let vm = CoinDetailViewModel::new(GetCoinDetail::new(repo.clone()), &args);
        let mut rx = vm.subscribe();

        rx.wait_for(|s| s.is_terminal()).await.unwrap();
        let detail = vm.detail().unwrap();
        assert_eq!(detail.coin_id.as_str(), "btc-bitcoin");
        assert_eq!(detail.tags, ["Segwit"]);
        assert_eq!(detail.team[0].position, "Founder");
        assert_eq!(repo.requested_ids(), vec!["btc-bitcoin".to_string()]);
    }

    #[tokio::test]
    async fn test_detail_bare_failure_uses_detail_fallback() {
        let repo = Arc::new(MockCoinRepository::new().with_detail_error(HttpError::Status {
            status: 500,
            message: None,
        }));
        let args = NavArgs::new().with(PARAM_COIN_ID, "btc-bitcoin");
        let vm = CoinDetailViewModel::new(GetCoinDetail::new(repo), &args);
        let mut rx = vm.subscribe();

        rx.wait_for(|s| s.is_terminal()).await.unwrap();
        assert_eq!(vm.state().error(), "Something went wrong");
        assert!(vm.detail().is_none());
    }

    #[tokio::test]
    async fn test_detail_not_found_message_surfaces() {
        let repo = Arc::new(MockCoinRepository::new());
        let args = NavArgs::new().with(PARAM_COIN_ID, "nope-nope");
        let vm = CoinDetailViewModel::new(GetCoinDetail::new(repo), &args);
        let mut rx = vm.subscribe();

        rx.wait_for(|s| s.is_terminal()).await.unwrap();
        assert_eq!(vm.state().error(), "id not found");
    }

    #[tokio::test]
    async fn test_dropping_holder_abandons_load() {
        let repo = Arc::new(MockCoinRepository::new().with_detail(detail_response()).held());
        let args = NavArgs::new().with(PARAM_COIN_ID, "btc-bitcoin");
        let vm = CoinDetailViewModel::new(GetCoinDetail::new(repo.clone()), &args);
        let mut rx = vm.subscribe();
        rx.wait_for(|s| s.is_loading()).await.unwrap();

        drop(vm);
        repo.release(1);
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert!(rx.borrow().is_loading());
    }
}
