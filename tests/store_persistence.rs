use kawi::store::{
    FileStore, Favorites, History, KeyValueStore, KeywordBook, KeywordUpdate, MemoryStore,
    PoemRecord, SaveResult,
};
use tempfile::TempDir;

fn record(poem: &str) -> PoemRecord {
    PoemRecord::new(
        poem.to_string(),
        "north".to_string(),
        vec!["ดอย".to_string()],
    )
}

#[test]
fn favorites_deduplicate_by_exact_poem_text() {
    let favorites = Favorites::new(Box::new(MemoryStore::new()));

    assert_eq!(favorites.save(record("บทกวี")).unwrap(), SaveResult::Added);
    assert_eq!(
        favorites.save(record("บทกวี")).unwrap(),
        SaveResult::AlreadySaved
    );
    assert_eq!(favorites.save(record("อื่น")).unwrap(), SaveResult::Added);

    assert_eq!(favorites.list().unwrap().len(), 2);
}

#[test]
fn favorites_clear_empties_the_list() {
    let favorites = Favorites::new(Box::new(MemoryStore::new()));
    favorites.save(record("บทกวี")).unwrap();
    favorites.clear().unwrap();
    assert!(favorites.list().unwrap().is_empty());
}

#[test]
fn history_keeps_newest_first_and_caps_at_limit() {
    let history = History::new(Box::new(MemoryStore::new()), 10);

    for i in 0..12 {
        history.record(record(&format!("poem {}", i))).unwrap();
    }

    let records = history.list().unwrap();
    assert_eq!(records.len(), 10);
    assert_eq!(records[0].poem, "poem 11");
    assert_eq!(records[9].poem, "poem 2");
}

#[test]
fn keyword_book_enforces_distinct_and_limit() {
    let book = KeywordBook::new(Box::new(MemoryStore::new()));

    assert_eq!(book.add("north", "หนึ่ง").unwrap(), KeywordUpdate::Added);
    assert_eq!(book.add("north", "หนึ่ง").unwrap(), KeywordUpdate::Duplicate);
    assert_eq!(book.add("north", "สอง").unwrap(), KeywordUpdate::Added);
    assert_eq!(book.add("north", "สาม").unwrap(), KeywordUpdate::Added);
    assert_eq!(
        book.add("north", "สี่").unwrap(),
        KeywordUpdate::LimitReached
    );

    assert_eq!(book.list("north").unwrap().len(), 3);
}

#[test]
fn keyword_lists_are_scoped_per_region() {
    let book = KeywordBook::new(Box::new(MemoryStore::new()));

    book.add("north", "ดอย").unwrap();
    book.add("south", "ทะเล").unwrap();

    assert_eq!(book.list("north").unwrap(), vec!["ดอย".to_string()]);
    assert_eq!(book.list("south").unwrap(), vec!["ทะเล".to_string()]);
}

#[test]
fn keyword_remove_reports_presence() {
    let book = KeywordBook::new(Box::new(MemoryStore::new()));
    book.add("north", "ดอย").unwrap();

    assert!(book.remove("north", "ดอย").unwrap());
    assert!(!book.remove("north", "ดอย").unwrap());
    assert!(book.list("north").unwrap().is_empty());
}

#[test]
fn file_store_round_trips_and_treats_missing_keys_as_none() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    assert!(store.get("missing").unwrap().is_none());
    store.put("favorite_poems", "[]").unwrap();
    assert_eq!(store.get("favorite_poems").unwrap().as_deref(), Some("[]"));
}

#[test]
fn file_backed_history_survives_reopening() {
    let dir = TempDir::new().unwrap();

    {
        let history = History::new(Box::new(FileStore::new(dir.path().to_path_buf())), 10);
        history.record(record("คงทน")).unwrap();
    }

    let history = History::new(Box::new(FileStore::new(dir.path().to_path_buf())), 10);
    let records = history.list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].poem, "คงทน");
}

#[test]
fn record_serializes_with_the_expected_field_names() {
    let value = serde_json::to_value(record("บทกวี")).unwrap();
    for field in ["id", "poem", "region", "keywords", "timestamp"] {
        assert!(value.get(field).is_some(), "missing field '{}'", field);
    }
    assert_eq!(value["region"], "north");
    assert_eq!(value["keywords"][0], "ดอย");
}
