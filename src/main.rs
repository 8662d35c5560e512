//! Gridia — a local-first bookmark manager.
//!
//! Entry point: runs a console walkthrough of the components against an
//! in-memory database. The real UI process talks to the `gridia-rpc` binary.

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Gridia v{} — Demo Mode                    ║", env!("CARGO_PKG_VERSION"));
    println!("║          Local-first bookmark manager                        ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_bookmark_store();
    demo_app_shell();
    demo_licenses();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_database() {
    use gridia::database::connection::Database;
    use gridia::database::migrations;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  Schema version: {}", migrations::get_schema_version(db.connection()));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_bookmark_store() {
    use gridia::database::Database;
    use gridia::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
    use gridia::types::bookmark::BookmarkDraft;
    section("Bookmark Store");

    let db = Database::open_in_memory().expect("Failed to open database");
    let mut mgr = BookmarkManager::new(db.connection());

    let id = mgr
        .add_bookmark(&BookmarkDraft {
            title: "The Rust Programming Language".to_string(),
            url: "https://rust-lang.org".to_string(),
            category: "Dev".to_string(),
            is_favorite: true,
        })
        .unwrap();
    println!("  Added bookmark, store assigned id {}", id);

    let mut bookmark = mgr.get_bookmark(id).unwrap();
    bookmark.title = "Rust".to_string();
    mgr.update_bookmark(&bookmark).unwrap();
    let updated = mgr.get_bookmark(id).unwrap();
    println!(
        "  Updated title to \"{}\" (created_at preserved: {})",
        updated.title,
        updated.created_at == bookmark.created_at
    );

    println!("  Favorites: {}", mgr.favorite_bookmarks().unwrap().len());
    println!("  Search \"rust\": {} hit(s)", mgr.search_bookmarks("rust").unwrap().len());

    mgr.delete_bookmark(id).unwrap();
    println!("  Deleted bookmark, store is now empty: {}", mgr.list_bookmarks().unwrap().is_empty());
    println!("  ✓ BookmarkManager OK");
    println!();
}

fn demo_app_shell() {
    use gridia::app::{App, CategoryFilter};
    use gridia::types::bookmark::Bookmark;
    section("App Shell (filtering & search)");

    let mut app = App::open_in_memory().expect("Failed to init App");

    for (title, url, category, fav) in [
        ("Rust", "https://rust-lang.org", "Dev", true),
        ("Hacker News", "https://news.ycombinator.com", "News", false),
        ("SQLite", "https://sqlite.org", "Dev", false),
    ] {
        app.save_bookmark(&Bookmark {
            id: None,
            title: title.to_string(),
            url: url.to_string(),
            category: category.to_string(),
            is_favorite: fav,
            created_at: 0,
            updated_at: 0,
        })
        .unwrap();
    }

    println!("  Loaded {} bookmarks", app.bookmarks().len());
    println!("  Categories: {:?}", app.categories());

    app.select_category(CategoryFilter::Category("Dev".to_string()));
    println!("  Category \"Dev\": {} bookmark(s)", app.filtered_bookmarks().len());

    app.toggle_favorites();
    println!("  Favorites only: {} bookmark(s)", app.filtered_bookmarks().len());

    app.set_search_query("sqlite");
    app.select_category(CategoryFilter::All);
    println!("  Search \"sqlite\": {} bookmark(s)", app.filtered_bookmarks().len());

    println!("  ✓ App shell OK");
    println!();
}

fn demo_licenses() {
    use gridia::services::license_registry;
    section("License Registry");

    let licenses = license_registry::licenses();
    for info in &licenses {
        println!("  {} v{} — {}", info.name, info.version, info.license_type);
    }
    println!("  ✓ LicenseRegistry OK");
    println!();
}
