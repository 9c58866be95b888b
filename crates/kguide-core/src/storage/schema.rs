//! SQLite schema for the content store
//!
//! Four collections share one database: categories, translations,
//! advertisements, and users. Translations hang off categories by
//! foreign key; everything else is flat.

use rusqlite::{Connection, Result};

/// Current schema version for migrations
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Schema version tracking
        CREATE TABLE IF NOT EXISTS schema_info (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        -- Users table (OAuth-backed identities)
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            open_id TEXT UNIQUE NOT NULL,
            name TEXT,
            email TEXT,
            login_method TEXT,
            role TEXT NOT NULL DEFAULT 'user',
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            last_signed_in INTEGER NOT NULL
        );

        -- Categories table (language-independent)
        CREATE TABLE IF NOT EXISTS categories (
            id TEXT PRIMARY KEY,
            icon TEXT NOT NULL,
            display_order INTEGER NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        -- Translations table, one row per (category, language)
        CREATE TABLE IF NOT EXISTS translations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category_id TEXT NOT NULL,
            language TEXT NOT NULL,
            title TEXT NOT NULL,
            subtitle TEXT NOT NULL,
            overview TEXT NOT NULL,
            sections TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL,
            UNIQUE (category_id, language),
            FOREIGN KEY (category_id) REFERENCES categories(id) ON DELETE CASCADE
        );

        -- Advertisements table (top carousel, bottom grid, in-content)
        CREATE TABLE IF NOT EXISTS advertisements (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ad_type TEXT NOT NULL,
            position INTEGER NOT NULL,
            image_url TEXT NOT NULL,
            link_url TEXT NOT NULL,
            language TEXT NOT NULL,
            text TEXT NOT NULL,
            category_id TEXT,
            active INTEGER NOT NULL DEFAULT 1,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        -- Indexes for common query patterns

        -- Category list ordering
        CREATE INDEX IF NOT EXISTS idx_categories_display_order ON categories(display_order);

        -- Translations fetched per language
        CREATE INDEX IF NOT EXISTS idx_translations_language ON translations(language);

        -- Ad sets fetched per (type, language), ordered by position
        CREATE INDEX IF NOT EXISTS idx_ads_type_language_position
            ON advertisements(ad_type, language, position);

        -- In-content ads fetched per category
        CREATE INDEX IF NOT EXISTS idx_ads_category_id ON advertisements(category_id);

        -- Session lookups by OAuth id
        CREATE INDEX IF NOT EXISTS idx_users_open_id ON users(open_id);
        "#,
    )?;

    // Set schema version
    conn.execute(
        "INSERT OR REPLACE INTO schema_info (key, value) VALUES ('version', ?)",
        [SCHEMA_VERSION.to_string()],
    )?;

    Ok(())
}

/// Get the current schema version from the database
pub fn get_schema_version(conn: &Connection) -> Result<Option<i32>> {
    let mut stmt = conn.prepare("SELECT value FROM schema_info WHERE key = 'version'")?;
    let result: Result<String> = stmt.query_row([], |row| row.get(0));

    match result {
        Ok(version_str) => Ok(version_str.parse().ok()),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Check if schema needs initialization or migration
pub fn needs_init(conn: &Connection) -> bool {
    // Check if schema_info table exists
    let table_exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_info'")
        .and_then(|mut stmt| stmt.exists([]))
        .unwrap_or(false);

    if !table_exists {
        return true;
    }

    match get_schema_version(conn) {
        Ok(Some(v)) => v < SCHEMA_VERSION,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        // Verify tables exist
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"users".to_string()));
        assert!(tables.contains(&"categories".to_string()));
        assert!(tables.contains(&"translations".to_string()));
        assert!(tables.contains(&"advertisements".to_string()));
    }

    #[test]
    fn test_schema_version() {
        let conn = Connection::open_in_memory().unwrap();

        // Before init, needs init
        assert!(needs_init(&conn));

        init_schema(&conn).unwrap();

        // After init, has version and doesn't need init
        assert_eq!(get_schema_version(&conn).unwrap(), Some(SCHEMA_VERSION));
        assert!(!needs_init(&conn));
    }

    #[test]
    fn test_indexes_exist() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let indexes: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='index' AND name LIKE 'idx_%'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(indexes.contains(&"idx_categories_display_order".to_string()));
        assert!(indexes.contains(&"idx_translations_language".to_string()));
        assert!(indexes.contains(&"idx_ads_type_language_position".to_string()));
    }

    #[test]
    fn test_translation_natural_key_is_unique() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO categories (id, icon, display_order, created_at, updated_at)
             VALUES ('wifi', '📶', 11, 0, 0)",
            [],
        )
        .unwrap();

        let insert = "INSERT INTO translations
             (category_id, language, title, subtitle, overview, sections, created_at, updated_at)
             VALUES ('wifi', 'en', 'a', 'b', 'c', '[]', 0, 0)";
        conn.execute(insert, []).unwrap();

        // Second row for the same (category, language) pair must be rejected
        assert!(conn.execute(insert, []).is_err());
    }
}
