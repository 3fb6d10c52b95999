//! Derived views: standings rows and next-round pairings. Never persisted.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// A player's record at the time standings were computed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub matches_played: u32,
}

/// One scheduled match for the next round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    #[serde(rename = "id1")]
    pub player_1_id: PlayerId,
    #[serde(rename = "name1")]
    pub player_1_name: String,
    #[serde(rename = "id2")]
    pub player_2_id: PlayerId,
    #[serde(rename = "name2")]
    pub player_2_name: String,
}

impl Pairing {
    pub fn new(first: &StandingEntry, second: &StandingEntry) -> Self {
        Self {
            player_1_id: first.player_id,
            player_1_name: first.name.clone(),
            player_2_id: second.player_id,
            player_2_name: second.name.clone(),
        }
    }

    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.player_1_id, self.player_2_id]
    }
}
