//! Standings: per-player win and match counts, ranked.

use crate::models::{GameMatch, Player, PlayerId, Result, StandingEntry};
use crate::store::Store;
use std::collections::HashMap;

/// Compute standings from a snapshot of players and matches.
///
/// 1. Count wins per player (one pass over matches).
/// 2. Count matches played per player, winner or loser (second pass).
/// 3. One entry per player, including players with no matches.
/// 4. Sort by wins descending, ties by player id ascending.
pub fn compute_standings(players: &[Player], matches: &[GameMatch]) -> Vec<StandingEntry> {
    let mut wins: HashMap<PlayerId, u32> = HashMap::new();
    for m in matches {
        *wins.entry(m.winner).or_default() += 1;
    }

    let mut played: HashMap<PlayerId, u32> = HashMap::new();
    for m in matches {
        *played.entry(m.winner).or_default() += 1;
        *played.entry(m.loser).or_default() += 1;
    }

    let mut standings: Vec<StandingEntry> = players
        .iter()
        .map(|p| StandingEntry {
            player_id: p.id,
            name: p.name.clone(),
            wins: wins.get(&p.id).copied().unwrap_or(0),
            matches_played: played.get(&p.id).copied().unwrap_or(0),
        })
        .collect();

    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.player_id.cmp(&b.player_id)));
    standings
}

/// Read the current players and matches from the store and rank them.
pub fn player_standings<S: Store + ?Sized>(store: &S) -> Result<Vec<StandingEntry>> {
    let players = store.query_players()?;
    let matches = store.query_matches()?;
    let standings = compute_standings(&players, &matches);
    log::debug!(
        "Computed standings for {} player(s) over {} match(es)",
        standings.len(),
        matches.len()
    );
    Ok(standings)
}
