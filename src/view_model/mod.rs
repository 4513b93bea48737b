//! View state holders: one per screen.
//!
//! A holder runs its load operation once on creation and publishes the
//! latest state through a `tokio::sync::watch` channel. The rendering layer
//! reads [`ScreenState`] values and never mutates them.

pub mod detail;
pub mod list;
pub mod nav;
mod session;

use crate::load::LoadState;

pub use detail::CoinDetailViewModel;
pub use list::CoinListViewModel;
pub use nav::{NavArgs, Screen, PARAM_COIN_ID};

/// What a screen currently shows.
///
/// `Idle` means no load has been started for this session (for example a
/// detail screen opened without a coin id). The other variants mirror
/// [`LoadState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for ScreenState<T> {
    fn default() -> Self {
        ScreenState::Idle
    }
}

impl<T> ScreenState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, ScreenState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ScreenState::Success(_) | ScreenState::Error(_))
    }

    /// The error text, or `""` when there is none.
    pub fn error(&self) -> &str {
        match self {
            ScreenState::Error(message) => message,
            _ => "",
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ScreenState::Success(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<LoadState<T>> for ScreenState<T> {
    fn from(state: LoadState<T>) -> Self {
        match state {
            LoadState::Loading => ScreenState::Loading,
            LoadState::Success(data) => ScreenState::Success(data),
            LoadState::Error(message) => ScreenState::Error(message),
        }
    }
}
