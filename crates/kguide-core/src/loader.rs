//! Content loading
//!
//! Builds a [`ContentBundle`] from a content directory and hands it to
//! the store's transactional reload. The directory holds one JSON file
//! per language (`content_en.json`, `content_ko.json`, ...) plus an
//! optional `advertisements.json` with the seed ad records.
//!
//! Older content files embed links inside section bodies as
//! `🔗 Label: https://...` lines. That convention is deprecated; the
//! loader lifts such lines into the structured `links` field so nothing
//! downstream ever string-scans for them.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{AdType, Advertisement, Category, Language, Section, SectionLink, Translation};
use crate::storage::{StoreError, StoreResult};
use crate::store::{ContentBundle, ContentStore};

/// Marker prefix of a legacy embedded link line
const LINK_MARKER: char = '🔗';

/// Counts reported after a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub categories: usize,
    pub translations: usize,
    pub advertisements: usize,
}

// ==================== Input file shapes ====================

#[derive(Deserialize)]
struct ContentFile {
    categories: Vec<ContentCategory>,
}

#[derive(Deserialize)]
struct ContentCategory {
    id: String,
    icon: String,
    order: i64,
    title: String,
    subtitle: String,
    content: ContentBody,
}

#[derive(Deserialize)]
struct ContentBody {
    overview: String,
    #[serde(default)]
    sections: Vec<ContentSection>,
}

#[derive(Deserialize)]
struct ContentSection {
    heading: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    links: Vec<ContentLink>,
}

#[derive(Deserialize)]
struct ContentLink {
    name: String,
    url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AdRecord {
    #[serde(rename = "type")]
    ad_type: String,
    position: i64,
    image_url: String,
    link_url: String,
    language: String,
    text: String,
    #[serde(default)]
    category_id: Option<String>,
    #[serde(default = "default_active")]
    active: i64,
}

fn default_active() -> i64 {
    1
}

// ==================== Loading ====================

/// Read a content directory into a bundle without touching the store
pub fn read_bundle(dir: &Path) -> StoreResult<ContentBundle> {
    let mut bundle = ContentBundle::default();
    let mut seen_categories: HashSet<String> = HashSet::new();

    for language in Language::ALL {
        let path = dir.join(format!("content_{}.json", language.as_str()));
        if !path.exists() {
            warn!(language = %language, path = %path.display(), "content file missing, skipping");
            continue;
        }

        let file = read_content_file(&path)?;
        let mut count = 0;

        for record in file.categories {
            // The first file to mention a category defines its icon and order
            if seen_categories.insert(record.id.clone()) {
                bundle
                    .categories
                    .push(Category::new(&record.id, &record.icon, record.order));
            }

            let sections = record
                .content
                .sections
                .into_iter()
                .map(into_section)
                .collect();

            bundle.translations.push(Translation::new(
                &record.id,
                language,
                record.title,
                record.subtitle,
                record.content.overview,
                sections,
            ));
            count += 1;
        }

        info!(language = %language, categories = count, "read content file");
    }

    let ads_path = dir.join("advertisements.json");
    if ads_path.exists() {
        bundle.advertisements = read_advertisements(&ads_path)?;
        info!(count = bundle.advertisements.len(), "read seed advertisements");
    } else {
        warn!(path = %ads_path.display(), "advertisements file missing, skipping");
    }

    Ok(bundle)
}

/// Load a content directory into the store
pub fn load_dir(store: &mut ContentStore, dir: &Path) -> StoreResult<LoadSummary> {
    let bundle = read_bundle(dir)?;
    store.load_content(&bundle)?;

    Ok(LoadSummary {
        categories: bundle.categories.len(),
        translations: bundle.translations.len(),
        advertisements: bundle.advertisements.len(),
    })
}

fn read_content_file(path: &PathBuf) -> StoreResult<ContentFile> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::ReadError {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|e| StoreError::InvalidFormat {
        path: path.clone(),
        details: e.to_string(),
    })
}

fn read_advertisements(path: &PathBuf) -> StoreResult<Vec<Advertisement>> {
    let content = std::fs::read_to_string(path).map_err(|source| StoreError::ReadError {
        path: path.clone(),
        source,
    })?;

    let records: Vec<AdRecord> =
        serde_json::from_str(&content).map_err(|e| StoreError::InvalidFormat {
            path: path.clone(),
            details: e.to_string(),
        })?;

    records
        .into_iter()
        .map(|record| {
            let ad_type = AdType::parse(&record.ad_type).ok_or_else(|| {
                StoreError::InvalidFormat {
                    path: path.clone(),
                    details: format!("unknown ad type '{}'", record.ad_type),
                }
            })?;

            let language = Language::parse(&record.language).ok_or_else(|| {
                StoreError::InvalidFormat {
                    path: path.clone(),
                    details: format!("unknown language '{}'", record.language),
                }
            })?;

            let mut ad = Advertisement::new(
                ad_type,
                record.position,
                record.image_url,
                record.link_url,
                language,
                record.text,
            );
            if let Some(category_id) = record.category_id {
                ad.set_category(category_id);
            }
            if record.active == 0 {
                ad.set_active(false);
            }
            Ok(ad)
        })
        .collect()
}

// ==================== Section normalization ====================

fn into_section(input: ContentSection) -> Section {
    let mut links: Vec<SectionLink> = input
        .links
        .into_iter()
        .map(|link| SectionLink {
            name: link.name,
            url: link.url,
        })
        .collect();

    let mut body_lines: Vec<&str> = Vec::new();
    for line in input.text.lines() {
        match parse_legacy_link_line(line) {
            Some(link) => links.push(link),
            None => body_lines.push(line),
        }
    }

    Section {
        heading: input.heading,
        body: body_lines.join("\n"),
        links,
    }
}

/// Recognize a legacy `🔗 Label: https://...` line
fn parse_legacy_link_line(line: &str) -> Option<SectionLink> {
    let rest = line.trim().strip_prefix(LINK_MARKER)?;
    let at = rest.find("http")?;

    let name = rest[..at].trim().trim_end_matches(':').trim().to_string();
    let url = rest[at..].trim().to_string();
    if url.is_empty() {
        return None;
    }

    Some(SectionLink { name, url })
}
