//! Unit tests for the BookmarkManager public API.
//!
//! These tests exercise bookmark CRUD and query-by-field operations through
//! the `BookmarkManagerTrait` interface, using an in-memory SQLite database.

use rstest::rstest;

use gridia::database::Database;
use gridia::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use gridia::types::bookmark::BookmarkDraft;
use gridia::types::errors::BookmarkError;

fn setup() -> Database {
    Database::open_in_memory().expect("Failed to open in-memory database")
}

fn draft(title: &str, url: &str, category: &str, favorite: bool) -> BookmarkDraft {
    BookmarkDraft {
        title: title.to_string(),
        url: url.to_string(),
        category: category.to_string(),
        is_favorite: favorite,
    }
}

/// Adding a bookmark assigns an identifier and sets both timestamps to the
/// same instant.
#[test]
fn test_add_assigns_id_and_timestamps() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr
        .add_bookmark(&draft("Rust", "https://rust-lang.org", "Dev", false))
        .unwrap();
    assert!(id > 0);

    let bookmark = mgr.get_bookmark(id).unwrap();
    assert_eq!(bookmark.id, Some(id));
    assert_eq!(bookmark.title, "Rust");
    assert_eq!(bookmark.url, "https://rust-lang.org");
    assert_eq!(bookmark.category, "Dev");
    assert!(!bookmark.is_favorite);
    assert!(bookmark.created_at > 0);
    assert_eq!(bookmark.created_at, bookmark.updated_at);
}

/// Identifiers auto-increment across inserts.
#[test]
fn test_ids_increase_across_inserts() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let a = mgr.add_bookmark(&draft("A", "https://a.com", "X", false)).unwrap();
    let b = mgr.add_bookmark(&draft("B", "https://b.com", "X", false)).unwrap();
    assert!(b > a);
}

/// Updating rewrites the mutable fields, preserves id and created_at, and
/// refreshes updated_at.
#[test]
fn test_update_preserves_id_and_created_at() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr
        .add_bookmark(&draft("Old", "https://old.example", "Misc", false))
        .unwrap();
    let original = mgr.get_bookmark(id).unwrap();

    // Make the clock move so the refreshed updated_at is observable
    std::thread::sleep(std::time::Duration::from_millis(5));

    let mut edited = original.clone();
    edited.title = "New".to_string();
    edited.url = "https://new.example".to_string();
    edited.is_favorite = true;
    mgr.update_bookmark(&edited).unwrap();

    let stored = mgr.get_bookmark(id).unwrap();
    assert_eq!(stored.id, Some(id));
    assert_eq!(stored.title, "New");
    assert_eq!(stored.url, "https://new.example");
    assert!(stored.is_favorite);
    assert_eq!(stored.created_at, original.created_at, "created_at must survive updates");
    assert!(stored.updated_at > original.updated_at, "updated_at must be refreshed");
}

/// Updating a record that was never persisted is rejected.
#[test]
fn test_update_without_id_is_missing_id() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr.add_bookmark(&draft("A", "https://a.com", "X", false)).unwrap();
    let mut bookmark = mgr.get_bookmark(id).unwrap();
    bookmark.id = None;

    match mgr.update_bookmark(&bookmark) {
        Err(BookmarkError::MissingId) => {}
        other => panic!("Expected MissingId, got {:?}", other),
    }
}

/// Updating or deleting an unknown id reports NotFound.
#[test]
fn test_missing_id_is_not_found() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    match mgr.delete_bookmark(9999) {
        Err(BookmarkError::NotFound(9999)) => {}
        other => panic!("Expected NotFound(9999), got {:?}", other),
    }
    match mgr.get_bookmark(9999) {
        Err(BookmarkError::NotFound(9999)) => {}
        other => panic!("Expected NotFound(9999), got {:?}", other),
    }
}

/// Deleting removes the record outright; there is no tombstone.
#[test]
fn test_delete_bookmark() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr.add_bookmark(&draft("A", "https://a.com", "X", false)).unwrap();
    assert_eq!(mgr.list_bookmarks().unwrap().len(), 1);

    mgr.delete_bookmark(id).unwrap();
    assert!(mgr.list_bookmarks().unwrap().is_empty());

    // A second delete of the same id is NotFound
    assert!(matches!(mgr.delete_bookmark(id), Err(BookmarkError::NotFound(_))));
}

/// Listing returns every record in key order.
#[test]
fn test_list_returns_key_order() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    let a = mgr.add_bookmark(&draft("First", "https://a.com", "X", false)).unwrap();
    let b = mgr.add_bookmark(&draft("Second", "https://b.com", "Y", false)).unwrap();
    let c = mgr.add_bookmark(&draft("Third", "https://c.com", "X", true)).unwrap();

    let all = mgr.list_bookmarks().unwrap();
    let ids: Vec<i64> = all.iter().filter_map(|bm| bm.id).collect();
    assert_eq!(ids, vec![a, b, c]);
}

/// Query-by-category returns only exact label matches.
#[test]
fn test_bookmarks_by_category() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    mgr.add_bookmark(&draft("Rust", "https://rust-lang.org", "Dev", false)).unwrap();
    mgr.add_bookmark(&draft("SQLite", "https://sqlite.org", "Dev", false)).unwrap();
    mgr.add_bookmark(&draft("HN", "https://news.ycombinator.com", "News", false)).unwrap();

    let dev = mgr.bookmarks_by_category("Dev").unwrap();
    assert_eq!(dev.len(), 2);
    assert!(dev.iter().all(|b| b.category == "Dev"));

    // Category equality is exact, not case-folded
    assert!(mgr.bookmarks_by_category("dev").unwrap().is_empty());
    assert!(mgr.bookmarks_by_category("Cooking").unwrap().is_empty());
}

/// Favorite query returns only flagged bookmarks.
#[test]
fn test_favorite_bookmarks() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    mgr.add_bookmark(&draft("A", "https://a.com", "X", true)).unwrap();
    mgr.add_bookmark(&draft("B", "https://b.com", "X", false)).unwrap();
    mgr.add_bookmark(&draft("C", "https://c.com", "Y", true)).unwrap();

    let favorites = mgr.favorite_bookmarks().unwrap();
    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|b| b.is_favorite));
}

/// Search matches case-insensitively across title, URL, and category.
#[rstest]
#[case("rust", 1)]        // title, folded
#[case("RUST", 1)]        // title, uppercase query
#[case("ycombinator", 1)] // url only
#[case("dev", 2)]         // category
#[case("https", 3)]       // url, all records
#[case("quiche", 0)]      // no match
fn test_search_matches_all_fields(#[case] query: &str, #[case] expected: usize) {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    mgr.add_bookmark(&draft("Rust", "https://rust-lang.org", "Dev", false)).unwrap();
    mgr.add_bookmark(&draft("SQLite", "https://sqlite.org", "Dev", false)).unwrap();
    mgr.add_bookmark(&draft("HN", "https://news.ycombinator.com", "News", false)).unwrap();

    let results = mgr.search_bookmarks(query).unwrap();
    assert_eq!(results.len(), expected, "query '{}' should match {} bookmark(s)", query, expected);
}

/// Search folds non-ASCII text too; SQL LIKE would miss this.
#[test]
fn test_search_is_unicode_case_insensitive() {
    let db = setup();
    let mut mgr = BookmarkManager::new(db.connection());

    mgr.add_bookmark(&draft("Österreich Wiki", "https://de.wikipedia.org", "Reise", false))
        .unwrap();

    let results = mgr.search_bookmarks("österreich").unwrap();
    assert_eq!(results.len(), 1);
}
