//! The front-end interface: initialize, search, add, persist.

use super::common::{sample_corpus, saved_sample, temp_notebook, write_notebook, SAMPLE_LABELS};
use remedy::{RecordStore, SearchSession};

fn labels(results: &[(String, String)]) -> Vec<&str> {
    results.iter().map(|(label, _)| label.as_str()).collect()
}

#[test]
fn test_initialize_from_file() {
    let (_dir, path) = saved_sample();
    let session = SearchSession::initialize(&path);
    assert_eq!(session.records(), sample_corpus().as_slice());
    assert_eq!(session.path(), path.as_path());
}

#[test]
fn test_first_run_then_add_then_reopen() {
    let (_dir, path) = temp_notebook();

    let mut session = SearchSession::initialize(&path);
    assert!(session.search("").is_empty());

    assert_eq!(session.add_record("New bug", "fix"), 0);
    session.save().unwrap();

    let reopened = SearchSession::initialize(&path);
    assert_eq!(
        reopened.search(""),
        vec![("New bug".to_string(), "fix".to_string())]
    );
}

#[test]
fn test_search_scenarios() {
    let (_dir, path) = saved_sample();
    let session = SearchSession::initialize(&path);

    assert_eq!(
        labels(&session.on_query_changed("mutex")),
        vec!["Race condition for mutex", "Deadlock in mutex"]
    );
    assert_eq!(labels(&session.on_query_changed("")), SAMPLE_LABELS.to_vec());
}

#[test]
fn test_search_returns_solutions() {
    let (_dir, path) = saved_sample();
    let session = SearchSession::initialize(&path);
    let results = session.search("channel");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].1, "Fix for Channel closed twice");
}

#[test]
fn test_added_record_shows_at_end_of_empty_query() {
    let (_dir, path) = saved_sample();
    let mut session = SearchSession::initialize(&path);

    let index = session.on_record_added("Goroutine leak", "cancel the context");
    let all = session.search("");
    assert_eq!(all.len(), index + 1);
    assert_eq!(all[index].0, "Goroutine leak");
}

#[test]
fn test_added_record_is_searchable_immediately() {
    let mut session = SearchSession::with_store(RecordStore::new(), "unused.json");
    session.add_record("Goroutine leak", "cancel the context");
    assert_eq!(labels(&session.search("leak")), vec!["Goroutine leak"]);
}

#[test]
fn test_initialize_survives_malformed_file() {
    let (_dir, path) = write_notebook("[{\"label\": 1}]");
    let session = SearchSession::initialize(&path);
    assert!(session.records().is_empty());
    assert!(session.search("anything").is_empty());
}

#[test]
fn test_try_initialize_reports_malformed_file() {
    let (_dir, path) = write_notebook("not json");
    let err = SearchSession::try_initialize(&path).unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_persist_to_other_path() {
    let (_dir, path) = saved_sample();
    let (_other_dir, other) = temp_notebook();

    let mut session = SearchSession::initialize(&path);
    session.add_record("New bug", "fix");
    session.persist(&other).unwrap();

    assert_eq!(SearchSession::initialize(&other).records().len(), 6);
    // The original file is unchanged until save()
    assert_eq!(SearchSession::initialize(&path).records().len(), 5);
}
