//! App shell for Gridia.
//!
//! Holds the full bookmark list in memory, derives the filtered view via
//! synchronous predicate composition, and re-derives the category list from
//! the distinct values observed in the full set. All mutations go through
//! the bookmark store and are followed by a reload, so the cached list never
//! drifts from what is persisted.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::database::Database;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::types::bookmark::{Bookmark, BookmarkDraft};
use crate::types::errors::BookmarkError;

/// Which category the view is narrowed to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category narrowing ("all").
    #[default]
    All,
    /// Only bookmarks whose category equals the given label.
    Category(String),
}

/// Central application struct: owns the database and the in-memory view state.
pub struct App {
    pub db: Arc<Database>,
    bookmarks: Vec<Bookmark>,
    categories: Vec<String>,
    search_query: String,
    selected_category: CategoryFilter,
    show_favorites: bool,
}

impl App {
    /// Creates a new App backed by a database file, loading all bookmarks.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);
        let mut app = Self::from_db(db);
        app.reload()?;
        Ok(app)
    }

    /// Creates a new App backed by an in-memory database. Used by tests and
    /// the demo binary.
    pub fn open_in_memory() -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open_in_memory()?);
        let mut app = Self::from_db(db);
        app.reload()?;
        Ok(app)
    }

    fn from_db(db: Arc<Database>) -> Self {
        Self {
            db,
            bookmarks: Vec::new(),
            categories: Vec::new(),
            search_query: String::new(),
            selected_category: CategoryFilter::All,
            show_favorites: false,
        }
    }

    /// Re-reads the full bookmark list from the store and re-derives the
    /// category list (sorted, distinct, always from the full set).
    pub fn reload(&mut self) -> Result<(), BookmarkError> {
        let mgr = BookmarkManager::new(self.db.connection());
        self.bookmarks = mgr.list_bookmarks()?;

        let unique: BTreeSet<&str> = self.bookmarks.iter().map(|b| b.category.as_str()).collect();
        self.categories = unique.into_iter().map(String::from).collect();
        Ok(())
    }

    // ─── View state ───

    /// The full in-memory bookmark list.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Sorted distinct category labels observed in the full set.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.selected_category
    }

    pub fn show_favorites(&self) -> bool {
        self.show_favorites
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    /// Narrows the view to one category. Selecting a category turns the
    /// favorites filter off; the two are mutually exclusive.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.selected_category = filter;
        self.show_favorites = false;
    }

    /// Toggles the favorites-only filter. Turning it on resets the category
    /// selection back to all.
    pub fn toggle_favorites(&mut self) {
        self.show_favorites = !self.show_favorites;
        self.selected_category = CategoryFilter::All;
    }

    /// Derives the filtered view: favorites flag first (else category
    /// equality), then search narrowing across title / URL / category.
    /// A blank search query skips the narrowing step.
    pub fn filtered_bookmarks(&self) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| {
                if self.show_favorites {
                    b.is_favorite
                } else {
                    match &self.selected_category {
                        CategoryFilter::All => true,
                        CategoryFilter::Category(c) => &b.category == c,
                    }
                }
            })
            .filter(|b| {
                self.search_query.trim().is_empty() || b.matches_query(&self.search_query)
            })
            .collect()
    }

    // ─── Mutations ───

    /// Validates that title, URL, and category are non-empty after trimming,
    /// returning the trimmed values.
    fn validate(
        title: &str,
        url: &str,
        category: &str,
    ) -> Result<(String, String, String), BookmarkError> {
        let title = title.trim();
        let url = url.trim();
        let category = category.trim();
        for (field, value) in [("title", title), ("url", url), ("category", category)] {
            if value.is_empty() {
                return Err(BookmarkError::InvalidInput(format!(
                    "{} must not be empty",
                    field
                )));
            }
        }
        Ok((title.to_string(), url.to_string(), category.to_string()))
    }

    /// Saves a bookmark from the edit form: a record with an ID is updated in
    /// place, one without is inserted. Returns the record's ID.
    pub fn save_bookmark(&mut self, bookmark: &Bookmark) -> Result<i64, BookmarkError> {
        let (title, url, category) = Self::validate(&bookmark.title, &bookmark.url, &bookmark.category)?;

        let id = match bookmark.id {
            Some(id) => {
                let mut mgr = BookmarkManager::new(self.db.connection());
                mgr.update_bookmark(&Bookmark {
                    id: Some(id),
                    title,
                    url,
                    category,
                    is_favorite: bookmark.is_favorite,
                    created_at: bookmark.created_at,
                    updated_at: bookmark.updated_at,
                })?;
                id
            }
            None => {
                let mut mgr = BookmarkManager::new(self.db.connection());
                mgr.add_bookmark(&BookmarkDraft {
                    title,
                    url,
                    category,
                    is_favorite: bookmark.is_favorite,
                })?
            }
        };

        self.reload()?;
        Ok(id)
    }

    /// Deletes a bookmark and refreshes the view.
    pub fn delete_bookmark(&mut self, id: i64) -> Result<(), BookmarkError> {
        {
            let mut mgr = BookmarkManager::new(self.db.connection());
            mgr.delete_bookmark(id)?;
        }
        self.reload()
    }

    /// Flips the favorite flag on a persisted bookmark and refreshes the view.
    pub fn toggle_favorite(&mut self, id: i64) -> Result<(), BookmarkError> {
        {
            let mut mgr = BookmarkManager::new(self.db.connection());
            let mut bookmark = mgr.get_bookmark(id)?;
            bookmark.is_favorite = !bookmark.is_favorite;
            mgr.update_bookmark(&bookmark)?;
        }
        self.reload()
    }
}
