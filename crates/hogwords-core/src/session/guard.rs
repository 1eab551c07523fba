//! HTTP-layer session handling: attaching the bearer credential and
//! clearing the session when the API rejects it.

use tracing::info;

use super::store::{SessionStore, TOKEN_KEY, USER_KEY};

const STUDENT_LOGIN: &str = "/auth/login";
const TEACHER_LOGIN: &str = "/teacher/login";
const ADMIN_LOGIN: &str = "/admin/login";

/// `Authorization` header value for the stored token, if any.
pub fn bearer_header(store: &impl SessionStore) -> Option<String> {
    store
        .get(TOKEN_KEY)
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// Login page matching the area of the site `path` belongs to.
pub fn login_route_for(path: &str) -> &'static str {
    if path.starts_with("/teacher") {
        TEACHER_LOGIN
    } else if path.starts_with("/admin") {
        ADMIN_LOGIN
    } else {
        STUDENT_LOGIN
    }
}

fn is_login_page(path: &str) -> bool {
    [STUDENT_LOGIN, TEACHER_LOGIN, ADMIN_LOGIN]
        .iter()
        .any(|login| path.contains(login))
}

/// React to an API response status.
///
/// On 401/403 the session is cleared and the login route to redirect to is
/// returned. No redirect is returned when the user already is on a login
/// page. Any other status leaves the store untouched.
pub fn handle_auth_failure(
    store: &mut impl SessionStore,
    status: u16,
    path: &str,
) -> Option<&'static str> {
    if status != 401 && status != 403 {
        return None;
    }

    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);

    if is_login_page(path) {
        return None;
    }
    let target = login_route_for(path);
    info!("session rejected with {status} on {path}, redirecting to {target}");
    Some(target)
}
