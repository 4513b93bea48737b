//! Network URL constants for the CoinPaprika API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coinpaprika.com";

/// Environment variable that overrides [`DEFAULT_API_URL`].
pub const API_URL_ENV: &str = "COINPAPRIKA_API_URL";
