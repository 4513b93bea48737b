//! The tri-state result of one asynchronous fetch.

/// Exactly one of loading, loaded, or failed.
///
/// A load emits `Loading` first and then exactly one terminal variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// `Success` and `Error` end a load.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            LoadState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadState<U> {
        match self {
            LoadState::Loading => LoadState::Loading,
            LoadState::Success(data) => LoadState::Success(f(data)),
            LoadState::Error(message) => LoadState::Error(message),
        }
    }
}
