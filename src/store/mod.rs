//! Persistence for players and matches.
//!
//! The engine only talks to a [`Store`]; connection handling, locking and
//! file access belong to the implementation.

mod csv_store;
mod memory;

use crate::models::{GameMatch, MatchId, Player, PlayerId, Result};
use std::path::PathBuf;

pub use csv_store::CsvStore;
pub use memory::MemoryStore;

/// Record/query contract for the two persisted entities.
///
/// Every call is atomic on its own; nothing is guaranteed across calls.
pub trait Store: Send + Sync {
    /// Insert a player and return its new id.
    fn insert_player(&self, name: &str) -> Result<PlayerId>;

    /// Insert a match result. Fails with `InvalidMatch` if `winner == loser`
    /// and `UnknownPlayer` if either id is not registered; nothing is written then.
    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId>;

    /// All players, ordered by id.
    fn query_players(&self) -> Result<Vec<Player>>;

    /// All matches, ordered by id.
    fn query_matches(&self) -> Result<Vec<GameMatch>>;

    /// Remove every player. Fails with `PlayersReferenced` while matches exist.
    fn delete_all_players(&self) -> Result<()>;

    fn delete_all_matches(&self) -> Result<()>;

    fn count_players(&self) -> Result<usize>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        (**self).insert_player(name)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
        (**self).insert_match(winner, loser)
    }

    fn query_players(&self) -> Result<Vec<Player>> {
        (**self).query_players()
    }

    fn query_matches(&self) -> Result<Vec<GameMatch>> {
        (**self).query_matches()
    }

    fn delete_all_players(&self) -> Result<()> {
        (**self).delete_all_players()
    }

    fn delete_all_matches(&self) -> Result<()> {
        (**self).delete_all_matches()
    }

    fn count_players(&self) -> Result<usize> {
        (**self).count_players()
    }
}

/// Which backend to open. Passed explicitly at construction time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum StoreConfig {
    /// Process-local, lost on exit.
    #[default]
    Memory,
    /// CSV files under the given directory.
    Csv { data_dir: PathBuf },
}

/// Open the store described by `config`.
pub fn open_store(config: &StoreConfig) -> Result<Box<dyn Store>> {
    match config {
        StoreConfig::Memory => {
            log::info!("Using in-memory store");
            Ok(Box::new(MemoryStore::new()))
        }
        StoreConfig::Csv { data_dir } => {
            log::info!("Using CSV store at {}", data_dir.display());
            Ok(Box::new(CsvStore::open(data_dir)?))
        }
    }
}
