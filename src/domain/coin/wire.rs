//! Wire types for coin responses (REST).
//!
//! Only the fields the domain reads are required. Everything else is optional
//! and decoded leniently, so a malformed unused field never rejects a payload.

use crate::shared::serde_util::{lenient, null_as_empty, null_as_empty_string};
use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ─── Listing ─────────────────────────────────────────────────────────────────

/// One element of `GET /v1/coins`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
}

// ─── Detail ──────────────────────────────────────────────────────────────────

/// Tag record embedded in a coin detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TagResponse {
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub coin_counter: Option<u64>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub ico_counter: Option<u64>,
}

/// Team member record embedded in a coin detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamMemberResponse {
    #[serde(default, deserialize_with = "null_as_empty_string::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty_string::deserialize")]
    pub position: String,
}

/// Project links grouped by kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LinksResponse {
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub explorer: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub facebook: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub reddit: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub source_code: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub website: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub youtube: Vec<String>,
}

/// Typed link with optional per-platform statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkExtendedResponse {
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WhitepaperResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// `GET /v1/coins/{coin_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub is_active: bool,
    #[serde(default, deserialize_with = "null_as_empty_string::deserialize")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub tags: Vec<TagResponse>,
    #[serde(default, deserialize_with = "null_as_empty::deserialize")]
    pub team: Vec<TeamMemberResponse>,

    // Accepted and ignored by the mapper.
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub open_source: Option<bool>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub hardware_wallet: Option<bool>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub development_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub proof_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub org_structure: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub hash_algorithm: Option<String>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub first_data_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub last_data_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub links: Option<LinksResponse>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub links_extended: Option<Vec<LinkExtendedResponse>>,
    #[serde(default, deserialize_with = "lenient::deserialize", skip_serializing_if = "Option::is_none")]
    pub whitepaper: Option<WhitepaperResponse>,
}
