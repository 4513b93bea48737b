//! Conversion: wire responses → domain records.

use super::wire;
use super::{Coin, CoinDetail, TeamMember};

impl From<wire::CoinResponse> for Coin {
    fn from(source: wire::CoinResponse) -> Self {
        Coin {
            id: source.id,
            name: source.name,
            symbol: source.symbol,
            rank: source.rank,
            is_active: source.is_active,
        }
    }
}

impl From<wire::TeamMemberResponse> for TeamMember {
    fn from(source: wire::TeamMemberResponse) -> Self {
        TeamMember {
            id: source.id,
            name: source.name,
            position: source.position,
        }
    }
}

impl From<wire::CoinDetailResponse> for CoinDetail {
    fn from(source: wire::CoinDetailResponse) -> Self {
        CoinDetail {
            coin_id: source.id,
            name: source.name,
            description: source.description,
            symbol: source.symbol,
            rank: source.rank,
            is_active: source.is_active,
            tags: source.tags.into_iter().map(|t| t.name).collect(),
            team: source.team.into_iter().map(TeamMember::from).collect(),
        }
    }
}
