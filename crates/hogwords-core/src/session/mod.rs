//! Session state: the persisted store, role resolution, and the
//! auth-failure guard that clears a rejected session.

mod guard;
mod role;
mod store;


pub use guard::*;
pub use role::Role;
pub use store::*;

use serde_json::Value;
use std::path::Path;
use tracing::warn;

/// Decide which role the page shell should render for.
///
/// Never fails: a missing token, a missing or unparsable user record, or a
/// missing or unknown `role` all resolve to [`Role::Guest`]. The store is
/// only read.
pub fn resolve_role(store: &impl SessionStore) -> Role {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
    let user = store.get(USER_KEY).filter(|u| !u.is_empty());
    let (Some(_), Some(user)) = (token, user) else {
        return Role::Guest;
    };

    match serde_json::from_str::<Value>(&user) {
        Ok(record) => record
            .get("role")
            .and_then(Value::as_str)
            .map(Role::from_tag)
            .unwrap_or_default(),
        Err(_) => Role::Guest,
    }
}

/// Resolve the role of the session persisted at `path`.
///
/// An unreadable or malformed file resolves like an empty store.
pub fn resolve_role_at(path: impl AsRef<Path>) -> Role {
    match FileStore::open(path) {
        Ok(store) => resolve_role(&store),
        Err(e) => {
            warn!("{e}, treating session as empty");
            Role::Guest
        }
    }
}
