//! Content resolution
//!
//! Composes store lookups into the shapes the presentation layer
//! consumes: the category list merged with one language's translations,
//! single category details, and the three ad sets.
//!
//! Every operation is a stateless read; the resolver holds nothing but
//! a borrowed store handle.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{AdType, Advertisement, Language, Section, Translation};
use crate::storage::StoreResult;
use crate::store::ContentStore;

/// One row of the resolved category list
///
/// Carries the category's language-independent fields unconditionally;
/// the translated fields are empty placeholders when no translation
/// exists for the requested language.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryListEntry {
    pub id: String,
    pub icon: String,
    pub order: i64,
    pub title: String,
    pub subtitle: String,
    pub overview: String,
    pub sections: Vec<Section>,
}

/// Read-time composition over a shared store handle
pub struct ContentResolver<'a> {
    store: &'a ContentStore,
}

impl<'a> ContentResolver<'a> {
    /// Create a resolver over the given store
    pub fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    /// Resolve the full category list for one language
    ///
    /// Left-joins categories with that language's translations by
    /// category id. Categories without a translation are never omitted;
    /// they carry empty-string/empty-vec placeholders instead.
    ///
    /// Output is sorted ascending by `order`, ties broken by id, so
    /// repeated calls against unchanged data return identical sequences.
    pub fn category_list(&self, language: Language) -> StoreResult<Vec<CategoryListEntry>> {
        let categories = self.store.categories()?;
        let mut translations: HashMap<String, Translation> = self
            .store
            .translations(language)?
            .into_iter()
            .map(|t| (t.category_id.clone(), t))
            .collect();

        let mut entries: Vec<CategoryListEntry> = categories
            .into_iter()
            .map(|category| match translations.remove(&category.id) {
                Some(translation) => CategoryListEntry {
                    id: category.id,
                    icon: category.icon,
                    order: category.order,
                    title: translation.title,
                    subtitle: translation.subtitle,
                    overview: translation.overview,
                    sections: translation.sections,
                },
                None => CategoryListEntry {
                    id: category.id,
                    icon: category.icon,
                    order: category.order,
                    title: String::new(),
                    subtitle: String::new(),
                    overview: String::new(),
                    sections: Vec::new(),
                },
            })
            .collect();

        entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        Ok(entries)
    }

    /// Resolve one category's translation for one language
    ///
    /// Returns `None` when the category does not exist or has no
    /// translation for that exact language. There is no cross-language
    /// fallback; the caller decides how to present absence.
    pub fn category_detail(
        &self,
        category_id: &str,
        language: Language,
    ) -> StoreResult<Option<Translation>> {
        // Translations of a deleted category must not surface
        if self.store.category(category_id)?.is_none() {
            return Ok(None);
        }
        self.store.translation(category_id, language)
    }

    /// Resolve the ordered ad set for one placement type and language
    ///
    /// An empty sequence means "no ads to display" and is a valid result.
    pub fn ad_set(&self, ad_type: AdType, language: Language) -> StoreResult<Vec<Advertisement>> {
        self.store.advertisements(ad_type, language)
    }

    /// Resolve the in-content ads for one category and language
    pub fn in_content_ads(
        &self,
        category_id: &str,
        language: Language,
    ) -> StoreResult<Vec<Advertisement>> {
        self.store.in_content_ads(category_id, language)
    }
}
