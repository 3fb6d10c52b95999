#![allow(dead_code)]

use std::path::PathBuf;
use swiss_tournament::{CsvStore, MemoryStore, PlayerId, Store, Tournament};

pub fn memory_tournament() -> Tournament<MemoryStore> {
    Tournament::new(MemoryStore::new())
}

pub fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("swiss-tournament-{}", uuid::Uuid::new_v4()))
}

pub fn csv_tournament() -> Tournament<CsvStore> {
    Tournament::new(CsvStore::open(scratch_dir()).unwrap())
}

/// Register players named P1..Pn and return their ids.
pub fn register<S: Store>(t: &Tournament<S>, n: usize) -> Vec<PlayerId> {
    (1..=n)
        .map(|i| t.register_player(&format!("P{i}")).unwrap().id)
        .collect()
}
