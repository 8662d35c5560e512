use std::fmt;

// === BookmarkError ===

/// Errors related to bookmark store operations.
#[derive(Debug)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(i64),
    /// An operation requiring a persisted record was given one without an ID.
    MissingId,
    /// A provided field failed validation.
    InvalidInput(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::MissingId => write!(f, "Bookmark has no ID; it was never persisted"),
            BookmarkError::InvalidInput(msg) => write!(f, "Invalid bookmark: {}", msg),
            BookmarkError::DatabaseError(msg) => {
                write!(f, "Bookmark database error: {}", msg)
            }
        }
    }
}

impl std::error::Error for BookmarkError {}
