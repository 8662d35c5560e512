//! RPC method handler for the Gridia JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! application shell via the `App` struct.

use std::sync::Mutex;

use crate::app::{App, CategoryFilter};
use crate::services::license_registry;
use crate::types::bookmark::Bookmark;

use serde_json::{json, Value};

fn bookmarks_to_value(bookmarks: &[&Bookmark]) -> Result<Value, String> {
    let items: Result<Vec<Value>, _> = bookmarks
        .iter()
        .map(|b| serde_json::to_value(b))
        .collect();
    Ok(json!({ "items": items.map_err(|e| e.to_string())? }))
}

/// Pulls a required string field out of the params object.
fn require_str<'a>(params: &'a Value, field: &str) -> Result<&'a str, String> {
    params
        .get(field)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", field))
}

/// Pulls a required integer ID out of the params object.
fn require_id(params: &Value) -> Result<i64, String> {
    params
        .get("id")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| "missing id".to_string())
}

/// Rejects URLs outside the schemes the application will open.
fn check_url(url: &str) -> Result<(), String> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("invalid url: must start with http:// or https://".to_string());
    }
    Ok(())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.add" => {
            let title = require_str(params, "title")?;
            let url = require_str(params, "url")?;
            let category = require_str(params, "category")?;
            check_url(url)?;
            let is_favorite = params
                .get("isFavorite")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a
                .save_bookmark(&Bookmark {
                    id: None,
                    title: title.to_string(),
                    url: url.to_string(),
                    category: category.to_string(),
                    is_favorite,
                    created_at: 0,
                    updated_at: 0,
                })
                .map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "url": url, "title": title}))
        }
        "bookmark.update" => {
            let bookmark: Bookmark =
                serde_json::from_value(params.clone()).map_err(|e| e.to_string())?;
            if bookmark.id.is_none() {
                return Err("missing id".to_string());
            }
            check_url(&bookmark.url)?;

            let mut a = app.lock().map_err(|e| e.to_string())?;
            let id = a.save_bookmark(&bookmark).map_err(|e| e.to_string())?;
            Ok(json!({"id": id}))
        }
        "bookmark.delete" => {
            let id = require_id(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.delete_bookmark(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "bookmark.get" => {
            let id = require_id(params)?;
            let a = app.lock().map_err(|e| e.to_string())?;
            let found = a
                .bookmarks()
                .iter()
                .find(|b| b.id == Some(id))
                .ok_or_else(|| format!("Bookmark not found: {}", id))?;
            serde_json::to_value(found).map_err(|e| e.to_string())
        }
        "bookmark.toggleFavorite" => {
            let id = require_id(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.toggle_favorite(id).map_err(|e| e.to_string())?;
            let favorite = a
                .bookmarks()
                .iter()
                .find(|b| b.id == Some(id))
                .map(|b| b.is_favorite)
                .unwrap_or(false);
            Ok(json!({"id": id, "isFavorite": favorite}))
        }
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let all: Vec<&Bookmark> = a.bookmarks().iter().collect();
            bookmarks_to_value(&all)
        }
        "bookmark.search" => {
            let query = require_str(params, "query")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_search_query(query);
            let value = bookmarks_to_value(&a.filtered_bookmarks());
            a.set_search_query("");
            value
        }
        "bookmark.byCategory" => {
            let category = require_str(params, "category")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.select_category(CategoryFilter::Category(category.to_string()));
            let value = bookmarks_to_value(&a.filtered_bookmarks());
            a.select_category(CategoryFilter::All);
            value
        }
        "bookmark.favorites" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.show_favorites() {
                a.toggle_favorites();
            }
            let value = bookmarks_to_value(&a.filtered_bookmarks());
            if a.show_favorites() {
                a.toggle_favorites();
            }
            value
        }

        // ─── Categories ───
        "category.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.categories()}))
        }

        // ─── Licenses ───
        "licenses.list" => {
            let items = license_registry::licenses();
            Ok(json!({ "items": items }))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
