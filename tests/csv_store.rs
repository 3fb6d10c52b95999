//! Integration tests for the CSV-backed store.

mod common;

use common::{csv_tournament, register, scratch_dir};
use std::collections::HashSet;
use std::fs;
use swiss_tournament::{open_store, CsvStore, Store, StoreConfig, Tournament, TournamentError};

#[test]
fn open_creates_files() {
    let dir = scratch_dir();
    let store = CsvStore::open(&dir).unwrap();
    assert_eq!(store.dir(), dir.as_path());
    for f in ["players.csv", "matches.csv", "sequences.csv"] {
        assert!(dir.join(f).exists(), "{f} missing");
    }
    assert_eq!(store.count_players().unwrap(), 0);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn data_survives_reopen() {
    let dir = scratch_dir();
    {
        let t = Tournament::new(CsvStore::open(&dir).unwrap());
        let ids = register(&t, 2);
        t.report_match(ids[1], ids[0]).unwrap();
    }
    let t = Tournament::new(CsvStore::open(&dir).unwrap());
    assert_eq!(t.count_players().unwrap(), 2);
    let matches = t.store().query_matches().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].winner, matches[0].loser), (2, 1));

    let standings = t.standings().unwrap();
    assert_eq!(standings[0].player_id, 2);
    assert_eq!(standings[0].name, "P2");
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn ids_keep_counting_across_reset_and_reopen() {
    let dir = scratch_dir();
    {
        let t = Tournament::new(CsvStore::open(&dir).unwrap());
        register(&t, 3);
        t.reset().unwrap();
    }
    let t = Tournament::new(CsvStore::open(&dir).unwrap());
    assert_eq!(t.register_player("Late").unwrap().id, 4);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn names_with_commas_and_quotes_round_trip() {
    let t = csv_tournament();
    t.register_player("O'Neil, \"Bud\"").unwrap();
    let players = t.store().query_players().unwrap();
    assert_eq!(players[0].name, "O'Neil, \"Bud\"");
    fs::remove_dir_all(t.store().dir()).unwrap();
}

#[test]
fn rejected_matches_write_nothing() {
    let t = csv_tournament();
    register(&t, 2);
    assert!(matches!(
        t.report_match(2, 2),
        Err(TournamentError::InvalidMatch(2))
    ));
    assert!(matches!(
        t.report_match(1, 7),
        Err(TournamentError::UnknownPlayer(7))
    ));
    assert!(t.store().query_matches().unwrap().is_empty());
    let id = t.report_match(1, 2).unwrap();
    assert_eq!(id, 1);
    fs::remove_dir_all(t.store().dir()).unwrap();
}

#[test]
fn delete_order_is_enforced() {
    let t = csv_tournament();
    register(&t, 2);
    t.report_match(1, 2).unwrap();
    assert!(matches!(
        t.store().delete_all_players(),
        Err(TournamentError::PlayersReferenced { matches: 1 })
    ));
    t.reset().unwrap();
    assert_eq!(t.count_players().unwrap(), 0);
    assert!(t.standings().unwrap().is_empty());
    fs::remove_dir_all(t.store().dir()).unwrap();
}

#[test]
fn four_player_round_pairs_leaders() {
    let t = csv_tournament();
    let ids = register(&t, 4);
    t.report_match(ids[0], ids[1]).unwrap();
    t.report_match(ids[2], ids[3]).unwrap();
    let pairings = t.next_round_pairings().unwrap();
    assert_eq!(pairings[0].player_ids(), [ids[0], ids[2]]);
    assert_eq!(pairings[1].player_ids(), [ids[1], ids[3]]);
    fs::remove_dir_all(t.store().dir()).unwrap();
}

#[test]
fn unreadable_data_is_store_unavailable() {
    let dir = scratch_dir();
    let store = CsvStore::open(&dir).unwrap();
    fs::remove_dir_all(&dir).unwrap();
    assert!(matches!(
        store.query_players(),
        Err(TournamentError::StoreUnavailable(_))
    ));
    let t = Tournament::new(store);
    assert!(matches!(
        t.standings(),
        Err(TournamentError::StoreUnavailable(_))
    ));
    assert!(matches!(
        t.next_round_pairings(),
        Err(TournamentError::StoreUnavailable(_))
    ));
}

#[test]
fn missing_matches_file_fails_whole_pairing() {
    let t = csv_tournament();
    register(&t, 4);
    fs::remove_file(t.store().dir().join("matches.csv")).unwrap();
    // Players are still readable, but nothing partial comes back.
    assert!(matches!(
        t.next_round_pairings(),
        Err(TournamentError::StoreUnavailable(_))
    ));
    assert!(matches!(
        t.standings(),
        Err(TournamentError::StoreUnavailable(_))
    ));
    fs::remove_dir_all(t.store().dir()).unwrap();
}

fn assert_unique_ids(t: &Tournament<CsvStore>) {
    let ids: Vec<_> = t.standings().unwrap().iter().map(|e| e.player_id).collect();
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids in {ids:?}");
}

#[test]
fn empty_sequences_file_does_not_reuse_ids() {
    let dir = scratch_dir();
    {
        let t = Tournament::new(CsvStore::open(&dir).unwrap());
        let ids = register(&t, 2);
        t.report_match(ids[0], ids[1]).unwrap();
    }
    fs::write(dir.join("sequences.csv"), "next_player_id,next_match_id\n").unwrap();

    let t = Tournament::new(CsvStore::open(&dir).unwrap());
    assert_eq!(t.register_player("New").unwrap().id, 3);
    assert_eq!(t.report_match(3, 1).unwrap(), 2);
    assert_unique_ids(&t);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn missing_sequences_file_is_rebuilt_from_data() {
    let dir = scratch_dir();
    {
        let t = Tournament::new(CsvStore::open(&dir).unwrap());
        register(&t, 3);
    }
    fs::remove_file(dir.join("sequences.csv")).unwrap();

    let t = Tournament::new(CsvStore::open(&dir).unwrap());
    assert!(dir.join("sequences.csv").exists());
    assert_eq!(t.register_player("New").unwrap().id, 4);
    assert_unique_ids(&t);
    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn rewrites_leave_no_temp_files() {
    let t = csv_tournament();
    let ids = register(&t, 2);
    t.report_match(ids[0], ids[1]).unwrap();
    t.reset().unwrap();
    let leftovers: Vec<_> = fs::read_dir(t.store().dir())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|n| n.ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "{leftovers:?}");
    fs::remove_dir_all(t.store().dir()).unwrap();
}

#[test]
fn open_store_picks_backend() {
    let dir = scratch_dir();
    let store = open_store(&StoreConfig::Csv {
        data_dir: dir.clone(),
    })
    .unwrap();
    store.insert_player("Solo").unwrap();
    assert!(fs::read_to_string(dir.join("players.csv"))
        .unwrap()
        .contains("Solo"));
    fs::remove_dir_all(dir).unwrap();

    let mem = open_store(&StoreConfig::Memory).unwrap();
    assert_eq!(mem.count_players().unwrap(), 0);
}
