//! Query API surface
//!
//! One entry point per content query, mirroring what the site's router
//! exposes. Each validates its raw string inputs against the fixed
//! domains, then delegates to the resolver and returns its result
//! verbatim - absent and empty payloads included.
//!
//! Validation failures never reach the store. Store failures propagate
//! unchanged; nothing here retries or recovers.

use thiserror::Error;

use crate::models::{AdType, Advertisement, Language, Translation, User};
use crate::resolver::{CategoryListEntry, ContentResolver};
use crate::session::Session;
use crate::storage::StoreError;
use crate::store::ContentStore;

/// Errors surfaced by the API boundary
#[derive(Error, Debug)]
pub enum ApiError {
    /// Caller-supplied input outside the fixed domain
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// The query surface consumed by callers
pub struct ContentApi<'a> {
    store: &'a ContentStore,
    session: &'a Session,
}

impl<'a> ContentApi<'a> {
    /// Create the API surface over a store and session
    pub fn new(store: &'a ContentStore, session: &'a Session) -> Self {
        Self { store, session }
    }

    fn resolver(&self) -> ContentResolver<'a> {
        ContentResolver::new(self.store)
    }

    // ==================== Content queries ====================

    /// Category list with translations merged in for one language
    pub fn category_list(&self, language: &str) -> ApiResult<Vec<CategoryListEntry>> {
        let language = parse_language(language)?;
        Ok(self.resolver().category_list(language)?)
    }

    /// One category's translated content, absent when not found
    pub fn category_detail(
        &self,
        category_id: &str,
        language: &str,
    ) -> ApiResult<Option<Translation>> {
        let category_id = require_category_id(category_id)?;
        let language = parse_language(language)?;
        Ok(self.resolver().category_detail(category_id, language)?)
    }

    /// Top carousel ads for one language
    pub fn top_slot_ads(&self, language: &str) -> ApiResult<Vec<Advertisement>> {
        let language = parse_language(language)?;
        Ok(self.resolver().ad_set(AdType::TopSlot, language)?)
    }

    /// Bottom grid ads for one language
    pub fn bottom_box_ads(&self, language: &str) -> ApiResult<Vec<Advertisement>> {
        let language = parse_language(language)?;
        Ok(self.resolver().ad_set(AdType::BottomBox, language)?)
    }

    /// In-content ads for one category and language
    pub fn in_content_ads(
        &self,
        category_id: &str,
        language: &str,
    ) -> ApiResult<Vec<Advertisement>> {
        let category_id = require_category_id(category_id)?;
        let language = parse_language(language)?;
        Ok(self.resolver().in_content_ads(category_id, language)?)
    }

    // ==================== Session passthrough ====================

    /// The currently signed-in user, absent when signed out
    pub fn me(&self) -> ApiResult<Option<User>> {
        match self.session.current()? {
            Some(open_id) => Ok(self.store.user(&open_id)?),
            None => Ok(None),
        }
    }

    /// Terminate the current session
    pub fn logout(&self) -> ApiResult<()> {
        self.session.terminate()?;
        Ok(())
    }
}

/// Validate a language code against the fixed set
fn parse_language(input: &str) -> Result<Language, ApiError> {
    Language::parse(input).ok_or_else(|| {
        ApiError::Validation(format!(
            "unknown language '{}' (expected one of: en, ko, zh, ja)",
            input
        ))
    })
}

/// Validate that a category id is a non-empty identifier
fn require_category_id(input: &str) -> Result<&str, ApiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("category id must not be empty".into()));
    }
    Ok(trimmed)
}
