//! Session command handlers
//!
//! The deployed site signs users in through external OAuth; these
//! commands drive the same user-record and session plumbing locally.

use anyhow::{Context, Result};

use kguide_core::{ContentApi, ContentStore, Session};

use crate::output::Output;

/// Record a sign-in for the given OAuth id
pub fn login(
    store: &mut ContentStore,
    session: &Session,
    open_id: &str,
    name: Option<String>,
    email: Option<String>,
    output: &Output,
) -> Result<()> {
    let user = store
        .upsert_user(open_id, name.as_deref(), email.as_deref(), Some("cli"))
        .context("Failed to record user")?;

    session
        .sign_in(&user.open_id)
        .context("Failed to write session")?;

    output.success(&format!("Signed in as {}", user.display_name()));
    Ok(())
}

/// Show the currently signed-in user
pub fn whoami(store: &ContentStore, session: &Session, output: &Output) -> Result<()> {
    let api = ContentApi::new(store, session);
    match api.me()? {
        Some(user) => output.print_user(&user),
        None => output.message("Not signed in."),
    }
    Ok(())
}

/// Terminate the current session
pub fn logout(store: &ContentStore, session: &Session, output: &Output) -> Result<()> {
    let api = ContentApi::new(store, session);
    api.logout()?;
    output.success("Signed out");
    Ok(())
}
