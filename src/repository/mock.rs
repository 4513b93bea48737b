//! In-memory `CoinRepository` for tests and offline demos.
//!
//! Responses are cloned out on every call, so the same mock can back any
//! number of load invocations. A mock can also be *held*: calls park until
//! [`MockCoinRepository::release`] is called, which lets tests observe the
//! `Loading` state or tear a session down while a request is in flight.

use super::CoinRepository;
use crate::domain::coin::wire::{CoinDetailResponse, CoinResponse};
use crate::error::HttpError;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tokio::sync::Semaphore;

pub struct MockCoinRepository {
    coins: Result<Vec<CoinResponse>, HttpError>,
    detail: Result<CoinDetailResponse, HttpError>,
    gate: Option<Semaphore>,
    coins_calls: AtomicUsize,
    detail_calls: AtomicUsize,
    requested_ids: Mutex<Vec<String>>,
}

impl Default for MockCoinRepository {
    fn default() -> Self {
        Self {
            coins: Ok(Vec::new()),
            detail: Err(HttpError::Status {
                status: 404,
                message: Some("id not found".to_string()),
            }),
            gate: None,
            coins_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
            requested_ids: Mutex::new(Vec::new()),
        }
    }
}

impl MockCoinRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_coins(mut self, coins: Vec<CoinResponse>) -> Self {
        self.coins = Ok(coins);
        self
    }

    pub fn with_coins_error(mut self, err: HttpError) -> Self {
        self.coins = Err(err);
        self
    }

    pub fn with_detail(mut self, detail: CoinDetailResponse) -> Self {
        self.detail = Ok(detail);
        self
    }

    pub fn with_detail_error(mut self, err: HttpError) -> Self {
        self.detail = Err(err);
        self
    }

    /// Park every call until [`release`](Self::release) is called.
    pub fn held(mut self) -> Self {
        self.gate = Some(Semaphore::new(0));
        self
    }

    /// Let `n` parked (or future) calls through.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn coins_calls(&self) -> usize {
        self.coins_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    /// Ids passed to `get_coin_detail`, in call order.
    pub fn requested_ids(&self) -> Vec<String> {
        self.ids().clone()
    }

    fn ids(&self) -> MutexGuard<'_, Vec<String>> {
        self.requested_ids
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
    }
}

#[async_trait]
impl CoinRepository for MockCoinRepository {
    async fn get_coins(&self) -> Result<Vec<CoinResponse>, HttpError> {
        self.coins_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.coins.clone()
    }

    async fn get_coin_detail(&self, coin_id: &str) -> Result<CoinDetailResponse, HttpError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.ids().push(coin_id.to_string());
        self.wait_for_gate().await;
        self.detail.clone()
    }
}
