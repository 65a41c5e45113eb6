//! Load/save lifecycle against the filesystem.

use super::common::{sample_corpus, saved_sample, temp_notebook, write_notebook};
use remedy::{load_records, save_records, Record, RecordStore, SearchSession};
use std::fs;

#[test]
fn test_missing_file_loads_empty() {
    let (_dir, path) = temp_notebook();
    let store = RecordStore::load(&path).unwrap();
    assert!(store.is_empty());
    assert!(!path.exists(), "loading must not create the file");
}

#[test]
fn test_add_save_load_single_record() {
    let (_dir, path) = temp_notebook();
    let mut store = RecordStore::load(&path).unwrap();
    store.add(Record::new("New bug", "fix"));
    assert_eq!(store.list(), &[Record::new("New bug", "fix")]);

    store.save(&path).unwrap();
    let loaded = RecordStore::load(&path).unwrap();
    assert_eq!(loaded.list(), &[Record::new("New bug", "fix")]);
}

#[test]
fn test_round_trip_preserves_order() {
    let (_dir, path) = saved_sample();
    assert_eq!(load_records(&path).unwrap(), sample_corpus());
}

#[test]
fn test_save_overwrites_previous_content() {
    let (_dir, path) = saved_sample();
    save_records(&path, &[Record::new("only", "one")]).unwrap();
    assert_eq!(load_records(&path).unwrap(), vec![Record::new("only", "one")]);
}

#[test]
fn test_save_creates_parent_directories() {
    let (dir, _) = temp_notebook();
    let path = dir.path().join("nested").join("deeper").join("data.json");
    save_records(&path, &sample_corpus()).unwrap();
    assert_eq!(load_records(&path).unwrap().len(), 5);
}

#[test]
fn test_legacy_field_names_load_and_resave_canonical() {
    let (_dir, path) = write_notebook(
        r#"[
 {"title": "Null pointer dereference", "solution": "check before deref"},
 {"bug": "Deadlock in mutex", "solution": "avoid nested locks"}
]"#,
    );

    let store = RecordStore::load(&path).unwrap();
    assert_eq!(store.list()[0].label, "Null pointer dereference");
    assert_eq!(store.list()[1].label, "Deadlock in mutex");

    store.save(&path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("\"title\""));
    assert!(!content.contains("\"bug\""));
    assert_eq!(content.matches("\"label\"").count(), 2);
}

#[test]
fn test_malformed_content_is_parse_error() {
    for content in ["{", "{\"label\": \"a\"}", "[{\"label\": \"a\"}]", "[\"a\"]", "null"] {
        let (_dir, path) = write_notebook(content);
        let err = load_records(&path).unwrap_err();
        assert!(err.is_parse(), "{:?} should be a parse error, got {}", content, err);
        assert_eq!(err.path(), path.as_path());
    }
}

#[test]
fn test_empty_or_whitespace_file_is_parse_error() {
    for content in ["", "\n  \n"] {
        let (_dir, path) = write_notebook(content);
        assert!(load_records(&path).unwrap_err().is_parse());
        assert!(SearchSession::try_initialize(&path).unwrap_err().is_parse());
    }
}

#[test]
fn test_failed_save_leaves_destination_untouched() {
    let (dir, _) = temp_notebook();
    // The destination is a directory, so the final rename fails
    let target = dir.path().join("occupied");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep.txt"), "keep").unwrap();

    let err = save_records(&target, &sample_corpus()).unwrap_err();
    assert!(err.is_io());
    assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "keep");
    assert!(!dir.path().join("occupied.tmp").exists());
}

#[test]
fn test_failed_save_keeps_memory_and_can_retry() {
    let (dir, path) = temp_notebook();
    // A regular file where the parent directory should be
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let bad_path = blocker.join("data.json");

    let mut store = RecordStore::from_records(sample_corpus());
    store.add(Record::new("New bug", "fix"));

    assert!(store.save(&bad_path).unwrap_err().is_io());
    assert_eq!(store.len(), 6);

    store.save(&path).unwrap();
    assert_eq!(RecordStore::load(&path).unwrap(), store);
}
