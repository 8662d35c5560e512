//! Bookmark Manager for Gridia.
//!
//! Implements `BookmarkManagerTrait` — CRUD and query-by-field operations for
//! bookmarks, backed by SQLite via `rusqlite`.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::bookmark::{Bookmark, BookmarkDraft};
use crate::types::errors::BookmarkError;

/// Trait defining bookmark store operations.
pub trait BookmarkManagerTrait {
    /// Inserts a new bookmark. The store assigns the identifier and both
    /// timestamps. Returns the new ID.
    fn add_bookmark(&mut self, draft: &BookmarkDraft) -> Result<i64, BookmarkError>;
    /// Rewrites an existing bookmark's mutable fields and refreshes its
    /// `updated_at`. The identifier and `created_at` are never changed.
    fn update_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), BookmarkError>;
    fn delete_bookmark(&mut self, id: i64) -> Result<(), BookmarkError>;
    fn get_bookmark(&self, id: i64) -> Result<Bookmark, BookmarkError>;
    /// Lists every bookmark in key order.
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    fn bookmarks_by_category(&self, category: &str) -> Result<Vec<Bookmark>, BookmarkError>;
    fn favorite_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError>;
    /// Case-insensitive substring search across title, URL, and category.
    fn search_bookmarks(&self, query: &str) -> Result<Vec<Bookmark>, BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

const BOOKMARK_COLUMNS: &str = "id, title, url, category, favorite, created_at, updated_at";

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Reads a single `Bookmark` row into a struct.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            url: row.get(2)?,
            category: row.get(3)?,
            is_favorite: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    /// Runs a prepared SELECT over the bookmark columns and collects the rows.
    fn collect_bookmarks(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let rows = stmt
            .query_map(params, Self::row_to_bookmark)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| BookmarkError::DatabaseError(e.to_string()))?);
        }
        Ok(results)
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    fn add_bookmark(&mut self, draft: &BookmarkDraft) -> Result<i64, BookmarkError> {
        let now = Self::now();

        self.conn
            .execute(
                "INSERT INTO bookmarks (title, url, category, favorite, created_at, updated_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![draft.title, draft.url, draft.category, draft.is_favorite, now, now],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_bookmark(&mut self, bookmark: &Bookmark) -> Result<(), BookmarkError> {
        let id = bookmark.id.ok_or(BookmarkError::MissingId)?;
        let now = Self::now();

        // created_at is deliberately left out of the SET list
        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET title = ?1, url = ?2, category = ?3, favorite = ?4, updated_at = ?5 \
                 WHERE id = ?6",
                params![bookmark.title, bookmark.url, bookmark.category, bookmark.is_favorite, now, id],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id));
        }
        Ok(())
    }

    /// Removes a bookmark by ID. Hard delete, no tombstone.
    fn delete_bookmark(&mut self, id: i64) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id));
        }
        Ok(())
    }

    fn get_bookmark(&self, id: i64) -> Result<Bookmark, BookmarkError> {
        self.conn
            .query_row(
                &format!("SELECT {} FROM bookmarks WHERE id = ?1", BOOKMARK_COLUMNS),
                params![id],
                Self::row_to_bookmark,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => BookmarkError::NotFound(id),
                other => BookmarkError::DatabaseError(other.to_string()),
            })
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.collect_bookmarks(
            &format!("SELECT {} FROM bookmarks ORDER BY id", BOOKMARK_COLUMNS),
            &[],
        )
    }

    fn bookmarks_by_category(&self, category: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        self.collect_bookmarks(
            &format!(
                "SELECT {} FROM bookmarks WHERE category = ?1 ORDER BY id",
                BOOKMARK_COLUMNS
            ),
            &[&category],
        )
    }

    fn favorite_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        self.collect_bookmarks(
            &format!(
                "SELECT {} FROM bookmarks WHERE favorite = 1 ORDER BY id",
                BOOKMARK_COLUMNS
            ),
            &[],
        )
    }

    /// Searches bookmarks by title, URL, or category.
    ///
    /// Loads all rows and matches in Rust rather than with SQL LIKE, so the
    /// case folding is Unicode-correct and not limited to ASCII.
    fn search_bookmarks(&self, query: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let all = self.list_bookmarks()?;
        Ok(all.into_iter().filter(|b| b.matches_query(query)).collect())
    }
}
