//! Data structures for the Swiss tournament: players, matches, standings, pairings.

mod game;
mod player;
mod standing;
mod tournament;

pub use game::{GameMatch, MatchId};
pub use player::{Player, PlayerId};
pub use standing::{Pairing, StandingEntry};
pub use tournament::{Result, Tournament, TournamentError};
