//! Next-round pairing: adjacent players in the standings meet.

use crate::logic::standings::player_standings;
use crate::models::{Pairing, Result, StandingEntry, TournamentError};
use crate::store::Store;

/// Pair rank 1 with rank 2, rank 3 with rank 4, and so on.
///
/// Players that already met are not kept apart. An odd count is an error naming
/// the lowest-ranked player, who would otherwise be left without an opponent.
pub fn swiss_pairings(standings: &[StandingEntry]) -> Result<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        let last = &standings[standings.len() - 1];
        log::warn!(
            "Cannot pair {} players: {} ({}) has no opponent",
            standings.len(),
            last.name,
            last.player_id
        );
        return Err(TournamentError::OddPlayerCount {
            player_id: last.player_id,
            name: last.name.clone(),
        });
    }

    let pairings: Vec<Pairing> = standings
        .chunks_exact(2)
        .map(|pair| Pairing::new(&pair[0], &pair[1]))
        .collect();
    log::debug!("Generated {} pairing(s)", pairings.len());
    Ok(pairings)
}

/// Standings from the store, then pairings from those standings.
pub fn next_round_pairings<S: Store + ?Sized>(store: &S) -> Result<Vec<Pairing>> {
    let standings = player_standings(store)?;
    swiss_pairings(&standings)
}
