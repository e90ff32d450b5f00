//! Session-based view guards. UX-only; real access control must live on the
//! API.

use crate::forms::navigator::{Navigator, AUTH_ROUTE};
use crate::forms::session::SessionStore;

/// Returns `true` when a token is stored; otherwise redirects to the auth
/// page and returns `false`.
pub fn require_session(session: &SessionStore, navigator: &dyn Navigator) -> bool {
    if session.is_authenticated() {
        true
    } else {
        navigator.navigate(AUTH_ROUTE);
        false
    }
}

/// Drops the stored token and returns to the auth page.
pub fn logout(session: &SessionStore, navigator: &dyn Navigator) {
    session.clear();
    navigator.navigate(AUTH_ROUTE);
}
