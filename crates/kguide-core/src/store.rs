//! SQLite-backed content store
//!
//! Owns the four collections (categories, translations, advertisements,
//! users) and exposes point/filter lookups over them. No business logic
//! lives here; the resolver composes these reads into client shapes.
//!
//! Content mutation is confined to `load_content`, the loader's
//! transactional clear-and-reload path. The only other write is the
//! user upsert backing the session flow.
//!
//! ## Usage
//!
//! ```ignore
//! let store = ContentStore::open(&config)?;
//!
//! let categories = store.categories()?;
//! let translation = store.translation("wifi", Language::En)?;
//! ```

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Transaction};
use tracing::debug;

use crate::config::Config;
use crate::models::{AdType, Advertisement, Category, Language, Role, Translation, User};
use crate::storage::schema::{init_schema, needs_init};
use crate::storage::{StoreError, StoreResult};

/// A full content set for one transactional reload
///
/// Categories must cover every translation's `category_id`; the schema's
/// foreign key rejects orphan translations at insert time.
#[derive(Debug, Clone, Default)]
pub struct ContentBundle {
    pub categories: Vec<Category>,
    pub translations: Vec<Translation>,
    pub advertisements: Vec<Advertisement>,
}

/// SQLite-backed store for the content site
pub struct ContentStore {
    conn: Connection,
}

impl ContentStore {
    /// Open or create the store at the configured database path
    pub fn open(config: &Config) -> StoreResult<Self> {
        let path = config.sqlite_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(&path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        if needs_init(&conn) {
            init_schema(&conn)?;
        }

        debug!(path = %path.display(), "opened content store");
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    // ==================== Category reads ====================

    /// Get all categories, in storage order
    ///
    /// Display ordering by the `order` attribute is the caller's concern.
    pub fn categories(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, icon, display_order, created_at, updated_at FROM categories",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Category {
                id: row.get(0)?,
                icon: row.get(1)?,
                order: row.get(2)?,
                created_at: from_millis(row.get(3)?),
                updated_at: from_millis(row.get(4)?),
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Get a category by slug
    pub fn category(&self, category_id: &str) -> StoreResult<Option<Category>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, icon, display_order, created_at, updated_at
             FROM categories WHERE id = ?",
        )?;

        let mut rows = stmt.query(params![category_id])?;
        match rows.next()? {
            Some(row) => Ok(Some(Category {
                id: row.get(0)?,
                icon: row.get(1)?,
                order: row.get(2)?,
                created_at: from_millis(row.get(3)?),
                updated_at: from_millis(row.get(4)?),
            })),
            None => Ok(None),
        }
    }

    // ==================== Translation reads ====================

    /// Get all translations for one language
    pub fn translations(&self, language: Language) -> StoreResult<Vec<Translation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category_id, language, title, subtitle, overview, sections,
                    created_at, updated_at
             FROM translations WHERE language = ?",
        )?;

        let rows = stmt
            .query_map(params![language.as_str()], translation_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(hydrate_translation).collect()
    }

    /// Get the translation for a (category, language) pair, if any
    pub fn translation(
        &self,
        category_id: &str,
        language: Language,
    ) -> StoreResult<Option<Translation>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, category_id, language, title, subtitle, overview, sections,
                    created_at, updated_at
             FROM translations WHERE category_id = ? AND language = ?",
        )?;

        let mut rows = stmt.query(params![category_id, language.as_str()])?;
        match rows.next()? {
            Some(row) => {
                let raw = translation_row(row)?;
                Ok(Some(hydrate_translation(raw)?))
            }
            None => Ok(None),
        }
    }

    // ==================== Advertisement reads ====================

    /// Get active ads of one type for one language, position ascending
    pub fn advertisements(
        &self,
        ad_type: AdType,
        language: Language,
    ) -> StoreResult<Vec<Advertisement>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ad_type, position, image_url, link_url, language, text,
                    category_id, active, created_at, updated_at
             FROM advertisements
             WHERE ad_type = ? AND language = ? AND active = 1
             ORDER BY position ASC",
        )?;

        let rows = stmt
            .query_map(params![ad_type.as_str(), language.as_str()], ad_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(hydrate_advertisement).collect()
    }

    /// Get active in-content ads for a (category, language) pair, position ascending
    pub fn in_content_ads(
        &self,
        category_id: &str,
        language: Language,
    ) -> StoreResult<Vec<Advertisement>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, ad_type, position, image_url, link_url, language, text,
                    category_id, active, created_at, updated_at
             FROM advertisements
             WHERE ad_type = 'in_content' AND category_id = ? AND language = ? AND active = 1
             ORDER BY position ASC",
        )?;

        let rows = stmt
            .query_map(params![category_id, language.as_str()], ad_row)?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter().map(hydrate_advertisement).collect()
    }

    // ==================== User operations ====================

    /// Get a user by OAuth id
    pub fn user(&self, open_id: &str) -> StoreResult<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, open_id, name, email, login_method, role,
                    created_at, updated_at, last_signed_in
             FROM users WHERE open_id = ?",
        )?;

        let mut rows = stmt.query(params![open_id])?;
        match rows.next()? {
            Some(row) => {
                let raw = user_row(row)?;
                Ok(Some(hydrate_user(raw)?))
            }
            None => Ok(None),
        }
    }

    /// Insert or refresh a user record by OAuth id
    ///
    /// Existing profile fields are only overwritten when a new value is
    /// supplied; `last_signed_in` is always refreshed.
    pub fn upsert_user(
        &mut self,
        open_id: &str,
        name: Option<&str>,
        email: Option<&str>,
        login_method: Option<&str>,
    ) -> StoreResult<User> {
        let now = Utc::now().timestamp_millis();
        self.conn.execute(
            "INSERT INTO users
                 (open_id, name, email, login_method, role, created_at, updated_at, last_signed_in)
             VALUES (?, ?, ?, ?, 'user', ?, ?, ?)
             ON CONFLICT(open_id) DO UPDATE SET
                 name = COALESCE(excluded.name, name),
                 email = COALESCE(excluded.email, email),
                 login_method = COALESCE(excluded.login_method, login_method),
                 updated_at = excluded.updated_at,
                 last_signed_in = excluded.last_signed_in",
            params![open_id, name, email, login_method, now, now, now],
        )?;

        self.user(open_id)?.ok_or_else(|| StoreError::MalformedRow {
            table: "users",
            id: open_id.to_string(),
            details: "row missing after upsert".to_string(),
        })
    }

    // ==================== Content reload ====================

    /// Replace all content with the given bundle
    ///
    /// Runs in a single transaction: clears categories, translations, and
    /// advertisements, then inserts the bundle. Users are untouched.
    pub fn load_content(&mut self, bundle: &ContentBundle) -> StoreResult<()> {
        let tx = self.conn.transaction()?;

        clear_content(&tx)?;

        for category in &bundle.categories {
            insert_category(&tx, category)?;
        }
        for translation in &bundle.translations {
            insert_translation(&tx, translation)?;
        }
        for ad in &bundle.advertisements {
            insert_advertisement(&tx, ad)?;
        }

        tx.commit()?;
        Ok(())
    }

    // ==================== Stats ====================

    /// Get count of categories
    pub fn category_count(&self) -> StoreResult<i64> {
        self.count("categories")
    }

    /// Get count of translations
    pub fn translation_count(&self) -> StoreResult<i64> {
        self.count("translations")
    }

    /// Get count of advertisements (active or not)
    pub fn advertisement_count(&self) -> StoreResult<i64> {
        self.count("advertisements")
    }

    /// Get count of users
    pub fn user_count(&self) -> StoreResult<i64> {
        self.count("users")
    }

    fn count(&self, table: &str) -> StoreResult<i64> {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(Into::into)
    }
}

// ==================== Internal structs ====================

struct TranslationRow {
    id: i64,
    category_id: String,
    language: String,
    title: String,
    subtitle: String,
    overview: String,
    sections: String,
    created_at: i64,
    updated_at: i64,
}

struct AdRow {
    id: i64,
    ad_type: String,
    position: i64,
    image_url: String,
    link_url: String,
    language: String,
    text: String,
    category_id: Option<String>,
    active: i64,
    created_at: i64,
    updated_at: i64,
}

struct UserRow {
    id: i64,
    open_id: String,
    name: Option<String>,
    email: Option<String>,
    login_method: Option<String>,
    role: String,
    created_at: i64,
    updated_at: i64,
    last_signed_in: i64,
}

// ==================== Row mapping ====================

fn translation_row(row: &rusqlite::Row) -> rusqlite::Result<TranslationRow> {
    Ok(TranslationRow {
        id: row.get(0)?,
        category_id: row.get(1)?,
        language: row.get(2)?,
        title: row.get(3)?,
        subtitle: row.get(4)?,
        overview: row.get(5)?,
        sections: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

fn ad_row(row: &rusqlite::Row) -> rusqlite::Result<AdRow> {
    Ok(AdRow {
        id: row.get(0)?,
        ad_type: row.get(1)?,
        position: row.get(2)?,
        image_url: row.get(3)?,
        link_url: row.get(4)?,
        language: row.get(5)?,
        text: row.get(6)?,
        category_id: row.get(7)?,
        active: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}

fn user_row(row: &rusqlite::Row) -> rusqlite::Result<UserRow> {
    Ok(UserRow {
        id: row.get(0)?,
        open_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        login_method: row.get(4)?,
        role: row.get(5)?,
        created_at: row.get(6)?,
        updated_at: row.get(7)?,
        last_signed_in: row.get(8)?,
    })
}

// ==================== Hydration ====================

fn hydrate_translation(row: TranslationRow) -> StoreResult<Translation> {
    let language =
        Language::parse(&row.language).ok_or_else(|| StoreError::MalformedRow {
            table: "translations",
            id: row.id.to_string(),
            details: format!("unknown language '{}'", row.language),
        })?;

    let sections = serde_json::from_str(&row.sections).map_err(|e| StoreError::MalformedRow {
        table: "translations",
        id: row.id.to_string(),
        details: format!("bad sections payload: {}", e),
    })?;

    Ok(Translation {
        id: row.id,
        category_id: row.category_id,
        language,
        title: row.title,
        subtitle: row.subtitle,
        overview: row.overview,
        sections,
        created_at: from_millis(row.created_at),
        updated_at: from_millis(row.updated_at),
    })
}

fn hydrate_advertisement(row: AdRow) -> StoreResult<Advertisement> {
    let ad_type = AdType::parse(&row.ad_type).ok_or_else(|| StoreError::MalformedRow {
        table: "advertisements",
        id: row.id.to_string(),
        details: format!("unknown ad type '{}'", row.ad_type),
    })?;

    let language = Language::parse(&row.language).ok_or_else(|| StoreError::MalformedRow {
        table: "advertisements",
        id: row.id.to_string(),
        details: format!("unknown language '{}'", row.language),
    })?;

    Ok(Advertisement {
        id: row.id,
        ad_type,
        position: row.position,
        image_url: row.image_url,
        link_url: row.link_url,
        language,
        text: row.text,
        category_id: row.category_id,
        active: row.active != 0,
        created_at: from_millis(row.created_at),
        updated_at: from_millis(row.updated_at),
    })
}

fn hydrate_user(row: UserRow) -> StoreResult<User> {
    let role = Role::parse(&row.role).ok_or_else(|| StoreError::MalformedRow {
        table: "users",
        id: row.id.to_string(),
        details: format!("unknown role '{}'", row.role),
    })?;

    Ok(User {
        id: row.id,
        open_id: row.open_id,
        name: row.name,
        email: row.email,
        login_method: row.login_method,
        role,
        created_at: from_millis(row.created_at),
        updated_at: from_millis(row.updated_at),
        last_signed_in: from_millis(row.last_signed_in),
    })
}

fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis).unwrap_or_else(Utc::now)
}

// ==================== Transaction helpers ====================

/// Clear content tables (preserving users and schema)
fn clear_content(tx: &Transaction) -> StoreResult<()> {
    // Order matters due to foreign keys
    tx.execute("DELETE FROM translations", [])?;
    tx.execute("DELETE FROM advertisements", [])?;
    tx.execute("DELETE FROM categories", [])?;
    Ok(())
}

fn insert_category(tx: &Transaction, category: &Category) -> StoreResult<()> {
    tx.execute(
        "INSERT INTO categories (id, icon, display_order, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
        params![
            category.id,
            category.icon,
            category.order,
            category.created_at.timestamp_millis(),
            category.updated_at.timestamp_millis(),
        ],
    )?;
    Ok(())
}

fn insert_translation(tx: &Transaction, translation: &Translation) -> StoreResult<()> {
    let sections =
        serde_json::to_string(&translation.sections).map_err(|e| StoreError::MalformedRow {
            table: "translations",
            id: translation.category_id.clone(),
            details: format!("unencodable sections: {}", e),
        })?;

    tx.execute(
        "INSERT INTO translations
             (category_id, language, title, subtitle, overview, sections, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            translation.category_id,
            translation.language.as_str(),
            translation.title,
            translation.subtitle,
            translation.overview,
            sections,
            translation.created_at.timestamp_millis(),
            translation.updated_at.timestamp_millis(),
        ],
    )?;
    Ok(())
}

fn insert_advertisement(tx: &Transaction, ad: &Advertisement) -> StoreResult<()> {
    tx.execute(
        "INSERT INTO advertisements
             (ad_type, position, image_url, link_url, language, text, category_id, active,
              created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            ad.ad_type.as_str(),
            ad.position,
            ad.image_url,
            ad.link_url,
            ad.language.as_str(),
            ad.text,
            ad.category_id,
            ad.active as i64,
            ad.created_at.timestamp_millis(),
            ad.updated_at.timestamp_millis(),
        ],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;
    use tempfile::TempDir;

    fn sample_bundle() -> ContentBundle {
        let mut wifi_en = Translation::new(
            "wifi",
            Language::En,
            "WiFi & Connectivity",
            "Stay connected everywhere",
            "Korea has some of the world's best coverage.",
            vec![Section::new("Rental", "Egg routers are at arrivals.")],
        );
        wifi_en.sections[0].add_link("Airport WiFi", "https://www.airport.kr");

        let wifi_ko = Translation::new(
            "wifi",
            Language::Ko,
            "와이파이",
            "어디서나 연결",
            "한국은 통신 환경이 우수합니다.",
            vec![],
        );

        let food_en = Translation::new(
            "food-guide",
            Language::En,
            "Food Guide",
            "Eat like a local",
            "From street food to fine dining.",
            vec![],
        );

        let mut inactive_top = Advertisement::new(
            AdType::TopSlot,
            1,
            "https://img.example.com/1.jpg",
            "https://english.visitkorea.or.kr",
            Language::En,
            "Discover Korea - Official Tourism Website",
        );
        inactive_top.set_active(false);

        let active_top = Advertisement::new(
            AdType::TopSlot,
            2,
            "https://img.example.com/2.jpg",
            "https://www.koreanair.com",
            Language::En,
            "Korean Air - Fly to Korea in Comfort",
        );

        let bottom = Advertisement::new(
            AdType::BottomBox,
            1,
            "https://img.example.com/3.jpg",
            "https://www.tmoney.co.kr",
            Language::En,
            "T-Money Card",
        );

        let mut wifi_ad_2 = Advertisement::new(
            AdType::InContent,
            2,
            "https://img.example.com/4.jpg",
            "https://esim.example.com",
            Language::En,
            "eSIM deals",
        );
        wifi_ad_2.set_category("wifi");

        let mut wifi_ad_1 = Advertisement::new(
            AdType::InContent,
            1,
            "https://img.example.com/5.jpg",
            "https://router.example.com",
            Language::En,
            "Pocket router rental",
        );
        wifi_ad_1.set_category("wifi");

        let mut food_ad = Advertisement::new(
            AdType::InContent,
            1,
            "https://img.example.com/6.jpg",
            "https://food.example.com",
            Language::En,
            "Seoul food tours",
        );
        food_ad.set_category("food-guide");

        ContentBundle {
            categories: vec![
                Category::new("wifi", "📶", 11),
                Category::new("food-guide", "🍜", 10),
                Category::new("emergency", "🚨", 7),
            ],
            translations: vec![wifi_en, wifi_ko, food_en],
            advertisements: vec![
                inactive_top,
                active_top,
                bottom,
                wifi_ad_2,
                wifi_ad_1,
                food_ad,
            ],
        }
    }

    fn seeded_store() -> ContentStore {
        let mut store = ContentStore::open_in_memory().unwrap();
        store.load_content(&sample_bundle()).unwrap();
        store
    }

    #[test]
    fn test_open_in_memory_is_empty() {
        let store = ContentStore::open_in_memory().unwrap();
        assert_eq!(store.category_count().unwrap(), 0);
        assert_eq!(store.translation_count().unwrap(), 0);
        assert_eq!(store.advertisement_count().unwrap(), 0);
    }

    #[test]
    fn test_load_content_counts() {
        let store = seeded_store();
        assert_eq!(store.category_count().unwrap(), 3);
        assert_eq!(store.translation_count().unwrap(), 3);
        assert_eq!(store.advertisement_count().unwrap(), 6);
    }

    #[test]
    fn test_load_content_replaces_data() {
        let mut store = seeded_store();

        let replacement = ContentBundle {
            categories: vec![Category::new("weather", "🌤️", 13)],
            translations: vec![],
            advertisements: vec![],
        };
        store.load_content(&replacement).unwrap();

        assert_eq!(store.category_count().unwrap(), 1);
        assert_eq!(store.translation_count().unwrap(), 0);
        assert_eq!(store.advertisement_count().unwrap(), 0);
        assert!(store.category("wifi").unwrap().is_none());
    }

    #[test]
    fn test_load_content_preserves_users() {
        let mut store = seeded_store();
        store
            .upsert_user("oauth|1", Some("Jin"), None, Some("cli"))
            .unwrap();

        store.load_content(&sample_bundle()).unwrap();

        assert_eq!(store.user_count().unwrap(), 1);
        assert!(store.user("oauth|1").unwrap().is_some());
    }

    #[test]
    fn test_categories_returns_all() {
        let store = seeded_store();
        let categories = store.categories().unwrap();
        assert_eq!(categories.len(), 3);

        let wifi = categories.iter().find(|c| c.id == "wifi").unwrap();
        assert_eq!(wifi.icon, "📶");
        assert_eq!(wifi.order, 11);
    }

    #[test]
    fn test_category_point_lookup() {
        let store = seeded_store();
        assert!(store.category("wifi").unwrap().is_some());
        assert!(store.category("nonexistent-category").unwrap().is_none());
    }

    #[test]
    fn test_translations_filtered_by_language() {
        let store = seeded_store();

        let en = store.translations(Language::En).unwrap();
        assert_eq!(en.len(), 2);
        assert!(en.iter().all(|t| t.language == Language::En));

        let ja = store.translations(Language::Ja).unwrap();
        assert!(ja.is_empty());
    }

    #[test]
    fn test_translation_pair_lookup() {
        let store = seeded_store();

        let hit = store.translation("wifi", Language::En).unwrap().unwrap();
        assert_eq!(hit.title, "WiFi & Connectivity");
        assert_eq!(hit.sections.len(), 1);
        assert_eq!(hit.sections[0].links[0].url, "https://www.airport.kr");

        // Same category, different language: present in ko, absent in ja
        assert!(store.translation("wifi", Language::Ko).unwrap().is_some());
        assert!(store.translation("wifi", Language::Ja).unwrap().is_none());
    }

    #[test]
    fn test_advertisements_excludes_inactive() {
        let store = seeded_store();

        let ads = store.advertisements(AdType::TopSlot, Language::En).unwrap();
        assert_eq!(ads.len(), 1);
        assert_eq!(ads[0].position, 2);
        assert_eq!(ads[0].text, "Korean Air - Fly to Korea in Comfort");
    }

    #[test]
    fn test_advertisements_ordered_by_position() {
        let store = seeded_store();

        let ads = store.in_content_ads("wifi", Language::En).unwrap();
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[0].position, 1);
        assert_eq!(ads[1].position, 2);
    }

    #[test]
    fn test_in_content_ads_filtered_by_category() {
        let store = seeded_store();

        let food_ads = store.in_content_ads("food-guide", Language::En).unwrap();
        assert_eq!(food_ads.len(), 1);
        assert_eq!(food_ads[0].text, "Seoul food tours");

        // No ads for the category is an empty result, not an error
        let none = store.in_content_ads("emergency", Language::En).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_orphan_translation_rejected() {
        let mut store = ContentStore::open_in_memory().unwrap();

        let bundle = ContentBundle {
            categories: vec![],
            translations: vec![Translation::new(
                "ghost",
                Language::En,
                "t",
                "s",
                "o",
                vec![],
            )],
            advertisements: vec![],
        };

        let result = store.load_content(&bundle);
        assert!(matches!(result, Err(StoreError::Database(_))));
    }

    #[test]
    fn test_malformed_sections_row_is_an_error() {
        let store = seeded_store();
        store
            .connection()
            .execute(
                "UPDATE translations SET sections = 'not json' WHERE category_id = 'wifi'
                 AND language = 'en'",
                [],
            )
            .unwrap();

        let result = store.translation("wifi", Language::En);
        assert!(matches!(result, Err(StoreError::MalformedRow { .. })));
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let mut store = ContentStore::open_in_memory().unwrap();
        store.upsert_user("oauth|1", None, None, None).unwrap();

        store
            .connection()
            .execute("UPDATE users SET role = 'root' WHERE open_id = 'oauth|1'", [])
            .unwrap();

        let result = store.user("oauth|1");
        assert!(matches!(result, Err(StoreError::MalformedRow { .. })));
    }

    #[test]
    fn test_upsert_user_inserts() {
        let mut store = ContentStore::open_in_memory().unwrap();

        let user = store
            .upsert_user("oauth|42", Some("Jin"), Some("jin@example.com"), Some("cli"))
            .unwrap();

        assert_eq!(user.open_id, "oauth|42");
        assert_eq!(user.name.as_deref(), Some("Jin"));
        assert_eq!(user.role, Role::User);
        assert_eq!(store.user_count().unwrap(), 1);
    }

    #[test]
    fn test_upsert_user_refreshes_without_clobbering() {
        let mut store = ContentStore::open_in_memory().unwrap();

        let first = store
            .upsert_user("oauth|42", Some("Jin"), Some("jin@example.com"), Some("cli"))
            .unwrap();

        std::thread::sleep(std::time::Duration::from_millis(10));

        // Second sign-in without profile fields keeps the stored ones
        let second = store.upsert_user("oauth|42", None, None, None).unwrap();

        assert_eq!(store.user_count().unwrap(), 1);
        assert_eq!(second.name.as_deref(), Some("Jin"));
        assert_eq!(second.email.as_deref(), Some("jin@example.com"));
        assert_eq!(second.created_at, first.created_at);
        assert!(second.last_signed_in > first.last_signed_in);
    }

    #[test]
    fn test_user_lookup_miss() {
        let store = ContentStore::open_in_memory().unwrap();
        assert!(store.user("oauth|missing").unwrap().is_none());
    }

    #[test]
    fn test_data_persists_across_reopens() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            data_dir: temp_dir.path().to_path_buf(),
            content_dir: None,
        };

        {
            let mut store = ContentStore::open(&config).unwrap();
            store.load_content(&sample_bundle()).unwrap();
        }

        let store = ContentStore::open(&config).unwrap();
        assert_eq!(store.category_count().unwrap(), 3);
        let translation = store.translation("wifi", Language::Ko).unwrap().unwrap();
        assert_eq!(translation.title, "와이파이");
    }
}
