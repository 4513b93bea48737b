//! Shared newtypes and utilities used across domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinPaprika coin identifiers (e.g. `"btc-bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl AsRef<str> for CoinId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde_transparent() {
        let id = CoinId::from("btc-bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""btc-bitcoin""#);
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_coin_id_display() {
        assert_eq!(CoinId::new("eth-ethereum").to_string(), "eth-ethereum");
    }
}
