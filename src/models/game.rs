//! A recorded match result.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match, assigned by the store.
pub type MatchId = u64;

/// One played match. Immutable once recorded; only removed by a bulk reset.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub recorded_at: DateTime<Utc>,
}

impl GameMatch {
    pub fn new(id: MatchId, winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            id,
            winner,
            loser,
            recorded_at: Utc::now(),
        }
    }
}
