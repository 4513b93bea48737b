//! Coin list screen holder.

use super::session::Session;
use super::ScreenState;
use crate::domain::coin::Coin;
use crate::load::GetCoins;

use tokio::sync::watch;

/// Holds the list screen's state for one session.
///
/// Loading starts as soon as the holder is created. Must be created from
/// within a Tokio runtime.
pub struct CoinListViewModel {
    use_case: GetCoins,
    session: Session<Vec<Coin>>,
}

impl CoinListViewModel {
    pub fn new(use_case: GetCoins) -> Self {
        let vm = Self {
            use_case,
            session: Session::new("coin_list"),
        };
        vm.reload();
        vm
    }

    pub fn state(&self) -> ScreenState<Vec<Coin>> {
        self.session.current()
    }

    /// Coins from the last successful load; empty until then.
    pub fn coins(&self) -> Vec<Coin> {
        self.state().data().cloned().unwrap_or_default()
    }

    /// Change-notified, read-only view of the state.
    pub fn subscribe(&self) -> watch::Receiver<ScreenState<Vec<Coin>>> {
        self.session.subscribe()
    }

    /// Start a fresh load. Any load still in flight is abandoned.
    pub fn reload(&self) {
        self.session.run(self.use_case.invoke());
    }

    /// End the session; nothing is written to the state afterwards.
    pub fn close(&self) {
        self.session.close();
    }
}
