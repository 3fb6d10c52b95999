//! In-process store: two vectors and id counters behind an RwLock.

use super::Store;
use crate::models::{GameMatch, MatchId, Player, PlayerId, Result, TournamentError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<GameMatch>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                players: Vec::new(),
                matches: Vec::new(),
                next_player_id: 1,
                next_match_id: 1,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| TournamentError::StoreUnavailable("lock error".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| TournamentError::StoreUnavailable("lock error".into()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for MemoryStore {
    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        let mut t = self.write()?;
        let id = t.next_player_id;
        t.next_player_id += 1;
        t.players.push(Player::new(id, name));
        Ok(id)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
        if winner == loser {
            return Err(TournamentError::InvalidMatch(winner));
        }
        let mut t = self.write()?;
        for pid in [winner, loser] {
            if !t.players.iter().any(|p| p.id == pid) {
                return Err(TournamentError::UnknownPlayer(pid));
            }
        }
        let id = t.next_match_id;
        t.next_match_id += 1;
        t.matches.push(GameMatch::new(id, winner, loser));
        Ok(id)
    }

    fn query_players(&self) -> Result<Vec<Player>> {
        Ok(self.read()?.players.clone())
    }

    fn query_matches(&self) -> Result<Vec<GameMatch>> {
        Ok(self.read()?.matches.clone())
    }

    fn delete_all_players(&self) -> Result<()> {
        let mut t = self.write()?;
        if !t.matches.is_empty() {
            return Err(TournamentError::PlayersReferenced {
                matches: t.matches.len(),
            });
        }
        t.players.clear();
        Ok(())
    }

    fn delete_all_matches(&self) -> Result<()> {
        self.write()?.matches.clear();
        Ok(())
    }

    fn count_players(&self) -> Result<usize> {
        Ok(self.read()?.players.len())
    }
}
