use tracing::info;

use crate::auth::Directory;
use crate::entity::{ActivityEntry, User};
use crate::error::{ForecourtError, Result};
use crate::storage::JsonStore;

/// Resolve credentials, persist the sanitized identity as the session
/// singleton and log a LOGIN entry.
///
/// A failed attempt returns the generic invalid-credentials error and
/// leaves the activity log untouched.
pub fn login(
    store: &mut JsonStore,
    directory: &dyn Directory,
    email: &str,
    password: &str,
) -> Result<User> {
    let user = directory
        .authenticate(email, password)
        .ok_or(ForecourtError::InvalidCredentials)?;

    store.set_session(user.clone());
    store.append_activity(ActivityEntry::new(
        &user.id,
        "LOGIN",
        format!("User {} logged in", user.name),
    ));
    info!(user = %user.name, role = %user.role, "session started");

    Ok(user)
}

/// Log a LOGOUT entry for the current identity (if any) and clear it.
/// Returns the identity that was logged out, or `None` if there was no
/// active session.
pub fn logout(store: &mut JsonStore) -> Option<User> {
    let user = store.current_user().cloned()?;

    store.append_activity(ActivityEntry::new(
        &user.id,
        "LOGOUT",
        format!("User {} logged out", user.name),
    ));
    store.clear_session();
    info!(user = %user.name, "session ended");

    Some(user)
}

/// The current session identity, or the not-logged-in error.
pub fn require_user(store: &JsonStore) -> Result<User> {
    store
        .current_user()
        .cloned()
        .ok_or(ForecourtError::NotLoggedIn)
}
