//! Tournament facade over an injected store, and TournamentError.

use crate::logic;
use crate::models::game::MatchId;
use crate::models::player::{Player, PlayerId};
use crate::models::standing::{Pairing, StandingEntry};
use crate::store::Store;
use thiserror::Error;

/// Errors that can occur during tournament operations.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be reached or its data could not be read/written.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// A match referenced a player id the store does not know.
    #[error("Player with ID {0} not found")]
    UnknownPlayer(PlayerId),

    /// Winner and loser are the same player.
    #[error("Player {0} cannot play a match against themselves")]
    InvalidMatch(PlayerId),

    /// Odd number of players in the standings; the lowest-ranked one has no opponent.
    #[error("Odd number of players: {name} (ID {player_id}) has no opponent")]
    OddPlayerCount { player_id: PlayerId, name: String },

    /// Players cannot be deleted while matches still reference them.
    #[error("Cannot delete players while {matches} match(es) are recorded")]
    PlayersReferenced { matches: usize },

    #[error("Player name must not be empty")]
    EmptyName,
}

impl From<std::io::Error> for TournamentError {
    fn from(e: std::io::Error) -> Self {
        TournamentError::StoreUnavailable(e.to_string())
    }
}

impl From<csv::Error> for TournamentError {
    fn from(e: csv::Error) -> Self {
        TournamentError::StoreUnavailable(e.to_string())
    }
}

pub type Result<T, E = TournamentError> = std::result::Result<T, E>;

/// Client-facing tournament API. Holds no state of its own besides the store handle.
pub struct Tournament<S: Store> {
    store: S,
}

impl<S: Store> Tournament<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a player. The name is trimmed; duplicates are allowed.
    pub fn register_player(&self, name: &str) -> Result<Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let id = self.store.insert_player(name)?;
        log::info!("Registered player {} ({})", id, name);
        Ok(Player::new(id, name))
    }

    /// Record the outcome of a single match.
    pub fn report_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
        let id = self.store.insert_match(winner, loser).inspect_err(|e| {
            log::warn!("Rejected result {} beat {}: {}", winner, loser, e);
        })?;
        log::info!("Recorded match {}: {} beat {}", id, winner, loser);
        Ok(id)
    }

    pub fn count_players(&self) -> Result<usize> {
        self.store.count_players()
    }

    pub fn standings(&self) -> Result<Vec<StandingEntry>> {
        logic::player_standings(&self.store)
    }

    pub fn next_round_pairings(&self) -> Result<Vec<Pairing>> {
        logic::next_round_pairings(&self.store)
    }

    /// Remove every match, then every player. Id sequences keep counting.
    pub fn reset(&self) -> Result<()> {
        self.store.delete_all_matches()?;
        self.store.delete_all_players()?;
        log::info!("Tournament reset");
        Ok(())
    }
}
