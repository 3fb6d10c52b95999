//! Swiss-system tournament: player registration, results, standings and next-round pairings.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use config::Config;
pub use logic::{compute_standings, next_round_pairings, player_standings, swiss_pairings};
pub use models::{
    GameMatch, MatchId, Pairing, Player, PlayerId, Result, StandingEntry, Tournament,
    TournamentError,
};
pub use store::{open_store, CsvStore, MemoryStore, Store, StoreConfig};
