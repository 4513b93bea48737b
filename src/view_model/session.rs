//! Per-screen session: owns the state channel and the in-flight load task.

use super::ScreenState;
use crate::load::LoadState;

use futures_util::{Stream, StreamExt};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// State channel plus the task currently feeding it.
///
/// Only the load task writes to the channel. Every write happens inside
/// `send_if_modified`, under the channel's lock, after checking that the
/// session is still open and that the task is the latest invocation. `close`
/// flips the liveness flag under the same lock, so no write can land after
/// teardown.
pub(crate) struct Session<T> {
    label: &'static str,
    tx: Arc<watch::Sender<ScreenState<T>>>,
    alive: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl<T> Session<T>
where
    T: Send + Sync + 'static,
{
    pub(crate) fn new(label: &'static str) -> Self {
        let (tx, _rx) = watch::channel(ScreenState::Idle);
        Self {
            label,
            tx: Arc::new(tx),
            alive: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
            task: Mutex::new(None),
        }
    }

    pub(crate) fn current(&self) -> ScreenState<T>
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<ScreenState<T>> {
        self.tx.subscribe()
    }

    pub(crate) fn is_open(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    /// Drive `states` on a new task, replacing any load still in flight.
    ///
    /// Must be called from within a Tokio runtime.
    pub(crate) fn run<S>(&self, states: S)
    where
        S: Stream<Item = LoadState<T>> + Send + 'static,
    {
        if !self.is_open() {
            tracing::debug!(screen = self.label, "Session closed, load not started");
            return;
        }

        let my_generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let tx = Arc::clone(&self.tx);
        let alive = Arc::clone(&self.alive);
        let generation = Arc::clone(&self.generation);
        let label = self.label;

        let handle = tokio::spawn(async move {
            futures_util::pin_mut!(states);
            while let Some(state) = states.next().await {
                let terminal = state.is_terminal();
                let written = tx.send_if_modified(|current| {
                    let current_task = generation.load(Ordering::SeqCst) == my_generation;
                    if !alive.load(Ordering::SeqCst) || !current_task {
                        return false;
                    }
                    *current = ScreenState::from(state);
                    true
                });
                if !written {
                    tracing::debug!(screen = label, "Load abandoned, dropping result");
                    return;
                }
                if terminal {
                    return;
                }
            }
        });

        let previous = self.task_slot().replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// End the session. In-flight results are dropped.
    pub(crate) fn close(&self) {
        self.tx.send_if_modified(|_| {
            self.alive.store(false, Ordering::SeqCst);
            false
        });
        if let Some(handle) = self.task_slot().take() {
            handle.abort();
            tracing::debug!(screen = self.label, "Session closed, in-flight load aborted");
        }
    }

    fn task_slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.task
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Drop for Session<T> {
    fn drop(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
        let slot = self
            .task
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}
