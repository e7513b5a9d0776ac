use chrono::NaiveDate;
use scorecard_core::{Event, ScoreRecord, ScoreStore, StoreError};
use std::fs;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
}

fn sample_rows() -> Vec<ScoreRecord> {
    vec![
        ScoreRecord::new("Hana", "5", Event::Sprint100m, 13.12, day(1)),
        ScoreRecord::new("Ren", "6", Event::Run800m, 135.0, day(2)),
        ScoreRecord::new("Sora", "6", Event::LongJump, 3.456, day(3)),
        ScoreRecord::new("Yui", "5", Event::JavelinBallThrow, 27.3, day(4)),
    ]
}

#[test]
fn missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("none.csv"));
    assert!(store.load_all().unwrap().is_empty());
    assert!(store.is_empty().unwrap());
}

#[test]
fn append_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.csv"));

    let rows = sample_rows();
    for r in &rows {
        store.append(r).expect("append");
    }

    let loaded = store.load_all().expect("load_all");
    assert_eq!(loaded, rows);
    // rekorden ble avrundet ved opprettelse
    assert_eq!(loaded[2].record, 3.46);
}

#[test]
fn file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");
    let store = ScoreStore::new(&path);
    store
        .append(&ScoreRecord::new("Ren", "6", Event::Run800m, 135.0, day(2)))
        .unwrap();
    store
        .append(&ScoreRecord::new("Hana", "5", Event::HighJump, 1.1, day(9)))
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3, "header skrives kun én gang");
    assert_eq!(lines[0], "name,grade,event,record,score,date");
    // -9.44*135 + 2500 = 1225.6
    assert_eq!(lines[1], "Ren,6,800m,135.00,1225,2025-07-02");
    assert!(lines[2].starts_with("Hana,5,HighJump,1.10,"));
    assert!(lines[2].ends_with(",2025-07-09"));
}

#[test]
fn delete_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.csv"));
    let rows = sample_rows();
    for r in &rows {
        store.append(r).unwrap();
    }

    let removed = store.delete_at(1).unwrap();
    assert_eq!(removed, rows[1]);

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), rows.len() - 1);
    assert_eq!(loaded, vec![rows[0].clone(), rows[2].clone(), rows[3].clone()]);

    // posisjonene er nummerert på nytt
    store.delete_at(2).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![rows[0].clone(), rows[2].clone()]);
}

#[test]
fn delete_last_row_keeps_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");
    let store = ScoreStore::new(&path);
    store.append(&sample_rows()[0]).unwrap();

    store.delete_at(0).unwrap();
    assert!(store.load_all().unwrap().is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap().trim_end(), "name,grade,event,record,score,date");

    // ny append etter tom fil gir ikke dobbel header
    store.append(&sample_rows()[1]).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![sample_rows()[1].clone()]);
}

#[test]
fn out_of_range_delete_is_error_and_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");
    let store = ScoreStore::new(&path);
    for r in &sample_rows() {
        store.append(r).unwrap();
    }
    let before = fs::read(&path).unwrap();

    match store.delete_at(4) {
        Err(StoreError::PositionOutOfRange { position, len }) => {
            assert_eq!(position, 4);
            assert_eq!(len, 4);
        }
        other => panic!("expected PositionOutOfRange, got {:?}", other),
    }
    assert_eq!(fs::read(&path).unwrap(), before);

    let empty = ScoreStore::new(dir.path().join("missing.csv"));
    assert!(matches!(
        empty.delete_at(0),
        Err(StoreError::PositionOutOfRange { position: 0, len: 0 })
    ));
}

#[test]
fn loads_legacy_japanese_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score_data.csv");
    fs::write(
        &path,
        "名前,学年,種目,記録,得点,日付\n\
         はな,5,100m,13.12,1216,2025-06-30\n\
         そら,6,走幅跳,3.5,753,2025-07-01\n",
    )
    .unwrap();

    let loaded = ScoreStore::new(&path).load_all().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "はな");
    assert_eq!(loaded[0].event, Event::Sprint100m);
    assert_eq!(loaded[0].score, 1216);
    assert_eq!(loaded[1].event, Event::LongJump);
    assert_eq!(loaded[1].record, 3.5);
    assert_eq!(loaded[1].date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
}

#[test]
fn names_with_commas_survive() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path().join("scores.csv"));
    let r = ScoreRecord::new("Tanaka, Ken", "", Event::Hurdles80m, 15.0, day(5));
    store.append(&r).unwrap();
    assert_eq!(store.load_all().unwrap(), vec![r]);
}
