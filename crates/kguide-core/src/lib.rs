//! kguide Core Library
//!
//! This crate provides the core functionality for kguide, a multilingual
//! travel-guide content site: category listings, per-category translated
//! content, and three tiers of advertisement placements keyed by language
//! and category.
//!
//! # Architecture
//!
//! - **ContentStore**: SQLite-backed collections with point/filter lookups
//! - **ContentResolver**: read-time composition into client-facing shapes
//! - **ContentApi**: input validation and dispatch over the resolver
//!
//! The store is populated by the loader from per-language content files;
//! everything above it is a stateless read.
//!
//! # Quick Start
//!
//! ```text
//! let config = Config::load()?;
//! let store = ContentStore::open(&config)?;
//! let session = Session::new(&config);
//!
//! let api = ContentApi::new(&store, &session);
//! let entries = api.category_list("en")?;
//! ```
//!
//! # Modules
//!
//! - `store`: SQLite-backed content store
//! - `resolver`: join/filter/fallback composition
//! - `api`: validated query surface and session passthrough
//! - `models`: data structures for the four collections
//! - `loader`: content-directory ingest
//! - `session`: file-backed session record
//! - `storage`: schema management and typed errors
//! - `config`: application configuration

pub mod api;
pub mod config;
pub mod loader;
pub mod models;
pub mod resolver;
pub mod session;
pub mod storage;
pub mod store;

pub use api::{ApiError, ApiResult, ContentApi};
pub use config::Config;
pub use loader::{load_dir, read_bundle, LoadSummary};
pub use models::{
    AdType, Advertisement, Category, Language, Role, Section, SectionLink, Translation, User,
};
pub use resolver::{CategoryListEntry, ContentResolver};
pub use session::Session;
pub use storage::{StoreError, StoreResult};
pub use store::{ContentBundle, ContentStore};
