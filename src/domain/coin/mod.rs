//! Coin domain: listing summaries, per-coin detail, team members.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

// ─── Coin ────────────────────────────────────────────────────────────────────

/// Summary record for one cryptocurrency in the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    /// Upstream display rank. The SDK never re-sorts by it.
    pub rank: u32,
    pub is_active: bool,
}

impl Coin {
    /// `"1. Bitcoin (BTC)"`
    pub fn title(&self) -> String {
        title(self.rank, &self.name, &self.symbol)
    }

    pub fn activity_label(&self) -> &'static str {
        activity_label(self.is_active)
    }
}

// ─── CoinDetail ──────────────────────────────────────────────────────────────

/// Extended record with description, tags and team for one cryptocurrency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub coin_id: CoinId,
    pub name: String,
    pub description: String,
    pub symbol: String,
    pub rank: u32,
    pub is_active: bool,
    /// Tag names, in API order.
    pub tags: Vec<String>,
    /// Team members, in API order.
    pub team: Vec<TeamMember>,
}

impl CoinDetail {
    pub fn title(&self) -> String {
        title(self.rank, &self.name, &self.symbol)
    }

    pub fn activity_label(&self) -> &'static str {
        activity_label(self.is_active)
    }
}

/// A person listed on a coin's team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub position: String,
}

fn title(rank: u32, name: &str, symbol: &str) -> String {
    format!("{}. {} ({})", rank, name, symbol)
}

fn activity_label(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}
