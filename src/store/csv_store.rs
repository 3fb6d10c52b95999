//! Durable store: one CSV file per table plus a file of id sequences.
//!
//! Every call opens the files it needs and closes them before returning.
//! A mutex serializes callers within the process.

use super::Store;
use crate::models::{GameMatch, MatchId, Player, PlayerId, Result, TournamentError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

const PLAYERS_FILE: &str = "players.csv";
const MATCHES_FILE: &str = "matches.csv";
const SEQUENCES_FILE: &str = "sequences.csv";

const PLAYER_HEADERS: [&str; 2] = ["id", "name"];
const MATCH_HEADERS: [&str; 4] = ["id", "winner", "loser", "recorded_at"];
const SEQUENCE_HEADERS: [&str; 2] = ["next_player_id", "next_match_id"];

/// Next ids to hand out. Survives resets so ids are never reused.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct Sequences {
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl Default for Sequences {
    fn default() -> Self {
        Self {
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

#[derive(Debug)]
pub struct CsvStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl CsvStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let store = Self {
            dir,
            lock: Mutex::new(()),
        };
        if !store.path(PLAYERS_FILE).exists() {
            write_rows::<Player>(&store.path(PLAYERS_FILE), &PLAYER_HEADERS, &[])?;
        }
        if !store.path(MATCHES_FILE).exists() {
            write_rows::<GameMatch>(&store.path(MATCHES_FILE), &MATCH_HEADERS, &[])?;
        }
        if !store.path(SEQUENCES_FILE).exists() {
            let seq = store.sequences()?;
            store.save_sequences(seq)?;
        }
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| TournamentError::StoreUnavailable("lock error".into()))
    }

    /// Next ids: the stored counters, never below the highest id on disk plus one.
    fn sequences(&self) -> Result<Sequences> {
        let stored = if self.path(SEQUENCES_FILE).exists() {
            read_rows::<Sequences>(&self.path(SEQUENCES_FILE))?
                .into_iter()
                .next()
        } else {
            None
        };
        let players: Vec<Player> = read_rows(&self.path(PLAYERS_FILE))?;
        let matches: Vec<GameMatch> = read_rows(&self.path(MATCHES_FILE))?;
        let floor = Sequences {
            next_player_id: players.iter().map(|p| p.id + 1).max().unwrap_or(1),
            next_match_id: matches.iter().map(|m| m.id + 1).max().unwrap_or(1),
        };
        if stored.is_none() {
            log::warn!(
                "No id sequences in {}, rebuilt as {:?}",
                self.dir.display(),
                floor
            );
        }
        let stored = stored.unwrap_or_default();
        Ok(Sequences {
            next_player_id: stored.next_player_id.max(floor.next_player_id),
            next_match_id: stored.next_match_id.max(floor.next_match_id),
        })
    }

    fn save_sequences(&self, seq: Sequences) -> Result<()> {
        write_rows(&self.path(SEQUENCES_FILE), &SEQUENCE_HEADERS, &[seq])
    }
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let rows = rdr.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(rows)
}

/// Replace the whole file: write a sibling temp file, then rename it over `path`.
fn write_rows<T: Serialize>(path: &Path, headers: &[&str], rows: &[T]) -> Result<()> {
    let tmp = path.with_extension("csv.tmp");
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&tmp)?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    let file = wtr
        .into_inner()
        .map_err(|e| TournamentError::StoreUnavailable(e.to_string()))?;
    file.sync_all()?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn append_row<T: Serialize>(path: &Path, row: &T) -> Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.serialize(row)?;
    wtr.flush()?;
    Ok(())
}

impl Store for CsvStore {
    fn insert_player(&self, name: &str) -> Result<PlayerId> {
        let _g = self.guard()?;
        let mut seq = self.sequences()?;
        let id = seq.next_player_id;
        seq.next_player_id += 1;
        // Sequence advances before the row lands; ids are never reused.
        self.save_sequences(seq)?;
        append_row(&self.path(PLAYERS_FILE), &Player::new(id, name))?;
        Ok(id)
    }

    fn insert_match(&self, winner: PlayerId, loser: PlayerId) -> Result<MatchId> {
        if winner == loser {
            return Err(TournamentError::InvalidMatch(winner));
        }
        let _g = self.guard()?;
        let players: Vec<Player> = read_rows(&self.path(PLAYERS_FILE))?;
        for pid in [winner, loser] {
            if !players.iter().any(|p| p.id == pid) {
                return Err(TournamentError::UnknownPlayer(pid));
            }
        }
        let mut seq = self.sequences()?;
        let id = seq.next_match_id;
        seq.next_match_id += 1;
        self.save_sequences(seq)?;
        append_row(&self.path(MATCHES_FILE), &GameMatch::new(id, winner, loser))?;
        Ok(id)
    }

    fn query_players(&self) -> Result<Vec<Player>> {
        let _g = self.guard()?;
        read_rows(&self.path(PLAYERS_FILE))
    }

    fn query_matches(&self) -> Result<Vec<GameMatch>> {
        let _g = self.guard()?;
        read_rows(&self.path(MATCHES_FILE))
    }

    fn delete_all_players(&self) -> Result<()> {
        let _g = self.guard()?;
        let matches: Vec<GameMatch> = read_rows(&self.path(MATCHES_FILE))?;
        if !matches.is_empty() {
            return Err(TournamentError::PlayersReferenced {
                matches: matches.len(),
            });
        }
        write_rows::<Player>(&self.path(PLAYERS_FILE), &PLAYER_HEADERS, &[])
    }

    fn delete_all_matches(&self) -> Result<()> {
        let _g = self.guard()?;
        write_rows::<GameMatch>(&self.path(MATCHES_FILE), &MATCH_HEADERS, &[])
    }

    fn count_players(&self) -> Result<usize> {
        let _g = self.guard()?;
        Ok(read_rows::<Player>(&self.path(PLAYERS_FILE))?.len())
    }
}
