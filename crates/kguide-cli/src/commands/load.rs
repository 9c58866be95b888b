//! Load command handler

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use kguide_core::{load_dir, Config, ContentStore};

use crate::output::Output;

/// Load content files and seed ads into the store
pub fn load(
    store: &mut ContentStore,
    config: &Config,
    dir: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let dir = match dir.or_else(|| config.content_dir.clone()) {
        Some(d) => d,
        None => bail!(
            "No content directory given. Pass --dir or set one with:\n  \
             kguide config set content_dir /path/to/content"
        ),
    };

    if !dir.is_dir() {
        bail!("Content directory not found: {}", dir.display());
    }

    let summary = load_dir(store, &dir)
        .with_context(|| format!("Failed to load content from {}", dir.display()))?;

    output.success(&format!(
        "Loaded {} categories, {} translations, {} advertisements",
        summary.categories, summary.translations, summary.advertisements
    ));

    Ok(())
}
