//! Tournament logic: standings calculation and next-round pairing.

mod pairing;
mod standings;

pub use pairing::{next_round_pairings, swiss_pairings};
pub use standings::{compute_standings, player_standings};
