//! Data models for kguide
//!
//! Defines the content entities (Category, Translation, Advertisement),
//! the fixed enums that key them (Language, AdType), and the User record
//! that shares the persistence layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Supported content languages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ko,
    Zh,
    Ja,
}

impl Language {
    /// All supported languages, in canonical order
    pub const ALL: [Language; 4] = [Language::En, Language::Ko, Language::Zh, Language::Ja];

    /// Parse a language code, returning `None` for anything outside the fixed set
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Language::En),
            "ko" => Some(Language::Ko),
            "zh" => Some(Language::Zh),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    /// Get the language code
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::Zh => "zh",
            Language::Ja => "ja",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advertisement placement kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdType {
    /// Top carousel slot
    TopSlot,
    /// Bottom grid box
    BottomBox,
    /// Placement inside category content
    InContent,
}

impl AdType {
    /// Parse a type tag, returning `None` for unknown tags
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "top_slot" => Some(AdType::TopSlot),
            "bottom_box" => Some(AdType::BottomBox),
            "in_content" => Some(AdType::InContent),
            _ => None,
        }
    }

    /// Get the type tag
    pub fn as_str(&self) -> &'static str {
        match self {
            AdType::TopSlot => "top_slot",
            AdType::BottomBox => "bottom_box",
            AdType::InContent => "in_content",
        }
    }
}

impl std::fmt::Display for AdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A travel-guide category
///
/// Categories are language-independent; their text lives on `Translation`
/// rows keyed by `(category_id, language)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Stable slug identifier (e.g. "wifi")
    pub id: String,
    /// Display icon glyph
    pub icon: String,
    /// Display order on the category list
    pub order: i64,
    /// When this category was created
    pub created_at: DateTime<Utc>,
    /// When this category was last updated
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a new category
    pub fn new(id: impl Into<String>, icon: impl Into<String>, order: i64) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            icon: icon.into(),
            order,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A named external link attached to a content section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionLink {
    /// Link label shown to the reader
    pub name: String,
    /// Destination URL
    pub url: String,
}

/// One section of a category's translated content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Section heading
    pub heading: String,
    /// Section body text
    pub body: String,
    /// Structured external links
    #[serde(default)]
    pub links: Vec<SectionLink>,
}

impl Section {
    /// Create a section with no links
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            links: Vec::new(),
        }
    }

    /// Attach a link
    pub fn add_link(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.links.push(SectionLink {
            name: name.into(),
            url: url.into(),
        });
    }
}

/// One category's content in one language
///
/// At most one translation exists per `(category_id, language)` pair;
/// that pair is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    /// Row id (assigned by the store)
    pub id: i64,
    /// Owning category slug
    pub category_id: String,
    /// Content language
    pub language: Language,
    /// Translated title
    pub title: String,
    /// Translated subtitle
    pub subtitle: String,
    /// Free-text overview
    pub overview: String,
    /// Ordered content sections
    pub sections: Vec<Section>,
    /// When this translation was created
    pub created_at: DateTime<Utc>,
    /// When this translation was last updated
    pub updated_at: DateTime<Utc>,
}

impl Translation {
    /// Create a new translation
    pub fn new(
        category_id: impl Into<String>,
        language: Language,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        overview: impl Into<String>,
        sections: Vec<Section>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            category_id: category_id.into(),
            language,
            title: title.into(),
            subtitle: subtitle.into(),
            overview: overview.into(),
            sections,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An advertisement placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advertisement {
    /// Row id (assigned by the store)
    pub id: i64,
    /// Placement kind
    pub ad_type: AdType,
    /// Display order within the (type, language) partition
    pub position: i64,
    /// Creative image
    pub image_url: String,
    /// Destination link
    pub link_url: String,
    /// Audience language
    pub language: Language,
    /// Display text
    pub text: String,
    /// Owning category (in-content placements only)
    pub category_id: Option<String>,
    /// Whether this ad is served
    pub active: bool,
    /// When this ad was created
    pub created_at: DateTime<Utc>,
    /// When this ad was last updated
    pub updated_at: DateTime<Utc>,
}

impl Advertisement {
    /// Create a new active advertisement
    pub fn new(
        ad_type: AdType,
        position: i64,
        image_url: impl Into<String>,
        link_url: impl Into<String>,
        language: Language,
        text: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            ad_type,
            position,
            image_url: image_url.into(),
            link_url: link_url.into(),
            language,
            text: text.into(),
            category_id: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the owning category (in-content placements)
    pub fn set_category(&mut self, category_id: impl Into<String>) {
        self.category_id = Some(category_id.into());
        self.updated_at = Utc::now();
    }

    /// Activate or deactivate this ad
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.updated_at = Utc::now();
    }
}

/// User roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Parse a role tag, returning `None` for unknown tags
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Get the role tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// An authenticated user
///
/// Backed by external OAuth; none of the content queries touch this
/// record, it only shares the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Row id (assigned by the store)
    pub id: i64,
    /// OAuth identifier, unique per user
    pub open_id: String,
    /// Display name
    pub name: Option<String>,
    /// Email address
    pub email: Option<String>,
    /// How the user signed in
    pub login_method: Option<String>,
    /// Role flag (unused by content queries)
    pub role: Role,
    /// When this user was created
    pub created_at: DateTime<Utc>,
    /// When this user was last updated
    pub updated_at: DateTime<Utc>,
    /// When this user last signed in
    pub last_signed_in: DateTime<Utc>,
}

impl User {
    /// Best available label for display: name, then email, then open id
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.open_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("en"), Some(Language::En));
        assert_eq!(Language::parse("ko"), Some(Language::Ko));
        assert_eq!(Language::parse("zh"), Some(Language::Zh));
        assert_eq!(Language::parse("ja"), Some(Language::Ja));
        assert_eq!(Language::parse("fr"), None);
        assert_eq!(Language::parse("EN"), None);
        assert_eq!(Language::parse(""), None);
    }

    #[test]
    fn test_language_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.as_str()), Some(language));
        }
    }

    #[test]
    fn test_language_display() {
        assert_eq!(format!("{}", Language::Ja), "ja");
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::Ko).unwrap();
        assert_eq!(json, "\"ko\"");
        let parsed: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(parsed, Language::Zh);
    }

    #[test]
    fn test_ad_type_parse() {
        assert_eq!(AdType::parse("top_slot"), Some(AdType::TopSlot));
        assert_eq!(AdType::parse("bottom_box"), Some(AdType::BottomBox));
        assert_eq!(AdType::parse("in_content"), Some(AdType::InContent));
        assert_eq!(AdType::parse("sidebar"), None);
    }

    #[test]
    fn test_ad_type_serde_tag() {
        let json = serde_json::to_string(&AdType::TopSlot).unwrap();
        assert_eq!(json, "\"top_slot\"");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("root"), None);
    }

    #[test]
    fn test_category_new() {
        let category = Category::new("wifi", "📶", 11);
        assert_eq!(category.id, "wifi");
        assert_eq!(category.icon, "📶");
        assert_eq!(category.order, 11);
    }

    #[test]
    fn test_section_links() {
        let mut section = Section::new("Getting online", "Rental counters are at arrivals.");
        assert!(section.links.is_empty());

        section.add_link("Airport WiFi", "https://www.airport.kr");
        assert_eq!(section.links.len(), 1);
        assert_eq!(section.links[0].name, "Airport WiFi");
    }

    #[test]
    fn test_section_serde_defaults_links() {
        // Older payloads omit the links field entirely
        let section: Section =
            serde_json::from_str(r#"{"heading":"H","body":"B"}"#).unwrap();
        assert!(section.links.is_empty());
    }

    #[test]
    fn test_translation_new() {
        let translation = Translation::new(
            "wifi",
            Language::En,
            "WiFi & Connectivity",
            "Stay connected",
            "Korea has excellent coverage.",
            vec![Section::new("Rental", "Pick up an egg router.")],
        );
        assert_eq!(translation.id, 0);
        assert_eq!(translation.category_id, "wifi");
        assert_eq!(translation.language, Language::En);
        assert_eq!(translation.sections.len(), 1);
    }

    #[test]
    fn test_advertisement_new_is_active() {
        let ad = Advertisement::new(
            AdType::TopSlot,
            1,
            "https://img.example.com/a.jpg",
            "https://example.com",
            Language::En,
            "Discover Korea",
        );
        assert!(ad.active);
        assert!(ad.category_id.is_none());
    }

    #[test]
    fn test_advertisement_set_category() {
        let mut ad = Advertisement::new(
            AdType::InContent,
            1,
            "https://img.example.com/a.jpg",
            "https://example.com",
            Language::En,
            "eSIM deals",
        );
        ad.set_category("wifi");
        assert_eq!(ad.category_id.as_deref(), Some("wifi"));
    }

    #[test]
    fn test_advertisement_set_active() {
        let mut ad = Advertisement::new(
            AdType::BottomBox,
            3,
            "https://img.example.com/b.jpg",
            "https://example.com",
            Language::Ko,
            "T-Money Card",
        );
        ad.set_active(false);
        assert!(!ad.active);
    }

    #[test]
    fn test_translation_serialization() {
        let translation = Translation::new(
            "food-guide",
            Language::Ja,
            "グルメガイド",
            "本場の味",
            "概要",
            vec![Section::new("屋台", "市場で食べ歩き。")],
        );
        let json = serde_json::to_string(&translation).unwrap();
        let deserialized: Translation = serde_json::from_str(&json).unwrap();
        assert_eq!(translation, deserialized);
    }

    #[test]
    fn test_user_display_name() {
        let now = Utc::now();
        let mut user = User {
            id: 1,
            open_id: "oauth|123".to_string(),
            name: Some("Jin".to_string()),
            email: Some("jin@example.com".to_string()),
            login_method: None,
            role: Role::User,
            created_at: now,
            updated_at: now,
            last_signed_in: now,
        };
        assert_eq!(user.display_name(), "Jin");

        user.name = None;
        assert_eq!(user.display_name(), "jin@example.com");

        user.email = None;
        assert_eq!(user.display_name(), "oauth|123");
    }
}
