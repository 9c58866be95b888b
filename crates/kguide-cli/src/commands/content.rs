//! Content query command handlers

use anyhow::Result;

use kguide_core::{ContentApi, ContentStore, Session};

use crate::output::Output;

/// List categories with translations merged in for one language
pub fn categories(
    store: &ContentStore,
    session: &Session,
    language: &str,
    output: &Output,
) -> Result<()> {
    let api = ContentApi::new(store, session);
    let entries = api.category_list(language)?;
    output.print_category_list(&entries);
    Ok(())
}

/// Show one category's translated content
pub fn show(
    store: &ContentStore,
    session: &Session,
    category: &str,
    language: &str,
    output: &Output,
) -> Result<()> {
    let api = ContentApi::new(store, session);
    let detail = api.category_detail(category, language)?;
    output.print_category_detail(detail.as_ref());
    Ok(())
}

/// List top carousel ads
pub fn top_ads(
    store: &ContentStore,
    session: &Session,
    language: &str,
    output: &Output,
) -> Result<()> {
    let api = ContentApi::new(store, session);
    let ads = api.top_slot_ads(language)?;
    output.print_ads(&ads);
    Ok(())
}

/// List bottom grid ads
pub fn bottom_ads(
    store: &ContentStore,
    session: &Session,
    language: &str,
    output: &Output,
) -> Result<()> {
    let api = ContentApi::new(store, session);
    let ads = api.bottom_box_ads(language)?;
    output.print_ads(&ads);
    Ok(())
}

/// List in-content ads for one category
pub fn in_content_ads(
    store: &ContentStore,
    session: &Session,
    category: &str,
    language: &str,
    output: &Output,
) -> Result<()> {
    let api = ContentApi::new(store, session);
    let ads = api.in_content_ads(category, language)?;
    output.print_ads(&ads);
    Ok(())
}
