use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// `id` is assigned by the store on first insert; it is `None` only on a
/// record that has never been persisted. Timestamps are Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub category: String,
    pub is_favorite: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The fields a caller provides when creating a bookmark.
///
/// The store assigns the identifier and both timestamps on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkDraft {
    pub title: String,
    pub url: String,
    pub category: String,
    pub is_favorite: bool,
}

impl Bookmark {
    /// Returns true when the given query matches this bookmark's title, URL,
    /// or category, case-insensitively. An empty query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.url.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}
