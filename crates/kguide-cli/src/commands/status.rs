//! Status command handler

use anyhow::Result;

use kguide_core::{Config, ContentStore, Session};

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(
    store: &ContentStore,
    config: &Config,
    session: &Session,
    output: &Output,
) -> Result<()> {
    let db_path = config.sqlite_path();
    let db_size = std::fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
    let signed_in = session.current().unwrap_or(None);

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "storage": {
                        "database_path": db_path,
                        "database_size": db_size,
                    },
                    "counts": {
                        "categories": store.category_count().unwrap_or(0),
                        "translations": store.translation_count().unwrap_or(0),
                        "advertisements": store.advertisement_count().unwrap_or(0),
                        "users": store.user_count().unwrap_or(0)
                    },
                    "session": signed_in
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("kguide Status");
            println!("=============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!("  Size:     {}", human_size(db_size));
            println!();
            println!("Contents:");
            println!("  Categories:     {}", store.category_count().unwrap_or(0));
            println!("  Translations:   {}", store.translation_count().unwrap_or(0));
            println!(
                "  Advertisements: {}",
                store.advertisement_count().unwrap_or(0)
            );
            println!("  Users:          {}", store.user_count().unwrap_or(0));
            println!();
            println!("Session:");
            match signed_in {
                Some(open_id) => println!("  Signed in: {}", open_id),
                None => println!("  Signed in: (nobody)"),
            }
        }
    }

    Ok(())
}

/// Format a byte count for humans
fn human_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
