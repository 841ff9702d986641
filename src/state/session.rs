#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::SessionUser;

/// Authentication session state, provided once per page load via context.
///
/// The session is owned by the hosted auth backend; this struct only
/// mirrors it. `loading` starts `true` and flips to `false` exactly once,
/// when the initial session fetch resolves.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Dismiss the auth error banner. Only ever triggered by the user.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Where an unauthenticated visitor of `current_path` should be sent.
///
/// Returns `None` while the session is still resolving or when the user is
/// authenticated; otherwise the auth entry point with the original
/// destination preserved as the `next` return target.
pub fn redirect_target(session: &SessionState, current_path: &str) -> Option<String> {
    if session.loading || session.is_authenticated() {
        return None;
    }
    Some(format!("/auth?next={current_path}"))
}
