//! Load operations: wrap one repository call into a `LoadState` sequence.
//!
//! Every invocation is a fresh stream: `Loading`, then exactly one of
//! `Success` or `Error`, then end of stream. Failures never escape; they are
//! turned into a user-facing message, with a per-screen fallback when the
//! underlying failure carries none.

pub mod state;
pub mod use_case;

use crate::error::HttpError;
use futures_util::Stream;
use std::future::Future;

pub use state::LoadState;
pub use use_case::{GetCoinDetail, GetCoins};

/// Shown on the list screen when a failure has no message of its own.
pub const LIST_FALLBACK_MESSAGE: &str = "Something unexpected happened";

/// Shown on the detail screen when a failure has no message of its own.
pub const DETAIL_FALLBACK_MESSAGE: &str = "Something went wrong";

/// Run `fetch` once, yielding `Loading` and then its terminal state.
///
/// `label` only feeds the logs.
pub fn load<T, F, Fut>(
    label: &'static str,
    fallback: &'static str,
    fetch: F,
) -> impl Stream<Item = LoadState<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, HttpError>>,
{
    async_stream::stream! {
        tracing::debug!(operation = label, "Load started");
        yield LoadState::Loading;

        match fetch().await {
            Ok(data) => {
                tracing::debug!(operation = label, "Load succeeded");
                yield LoadState::Success(data);
            }
            Err(e) => {
                tracing::debug!(operation = label, error = %e, "Load failed");
                yield LoadState::Error(error_message(&e, fallback));
            }
        }
    }
}

/// User-facing text for a failure.
pub fn error_message(err: &HttpError, fallback: &str) -> String {
    err.message().unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[tokio::test]
    async fn test_load_success_sequence() {
        let states: Vec<_> = load("test", LIST_FALLBACK_MESSAGE, || async {
            Ok::<_, HttpError>(vec![1, 2, 3])
        })
        .collect()
        .await;
        assert_eq!(states, vec![LoadState::Loading, LoadState::Success(vec![1, 2, 3])]);
    }

    #[tokio::test]
    async fn test_load_transport_failure_uses_message() {
        let states: Vec<LoadState<()>> = load("test", LIST_FALLBACK_MESSAGE, || async {
            Err::<(), _>(HttpError::Transport("operation timed out".to_string()))
        })
        .collect()
        .await;
        assert_eq!(
            states,
            vec![LoadState::Loading, LoadState::Error("operation timed out".to_string())]
        );
    }

    #[tokio::test]
    async fn test_load_bare_status_uses_fallback() {
        let states: Vec<LoadState<()>> = load("test", DETAIL_FALLBACK_MESSAGE, || async {
            Err::<(), _>(HttpError::Status {
                status: 500,
                message: None,
            })
        })
        .collect()
        .await;
        assert_eq!(
            states,
            vec![LoadState::Loading, LoadState::Error("Something went wrong".to_string())]
        );
    }

    #[tokio::test]
    async fn test_load_emits_loading_before_fetch_runs() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let stream = load("test", LIST_FALLBACK_MESSAGE, move || async move {
            flag.store(true, Ordering::SeqCst);
            Ok::<_, HttpError>(())
        });
        futures_util::pin_mut!(stream);

        assert_eq!(stream.next().await, Some(LoadState::Loading));
        assert!(!ran.load(Ordering::SeqCst));
        assert_eq!(stream.next().await, Some(LoadState::Success(())));
        assert!(ran.load(Ordering::SeqCst));
        assert_eq!(stream.next().await, None);
    }

    #[test]
    fn test_load_needs_no_spawned_runtime() {
        let states: Vec<_> = tokio_test::block_on(
            load("test", LIST_FALLBACK_MESSAGE, || async { Ok::<_, HttpError>("done") })
                .collect::<Vec<_>>(),
        );
        assert_eq!(states, vec![LoadState::Loading, LoadState::Success("done")]);
    }

    #[test]
    fn test_error_message_fallback_strings_verbatim() {
        let bare = HttpError::Status {
            status: 503,
            message: Some(String::new()),
        };
        assert_eq!(error_message(&bare, LIST_FALLBACK_MESSAGE), "Something unexpected happened");
        assert_eq!(error_message(&bare, DETAIL_FALLBACK_MESSAGE), "Something went wrong");
    }
}
