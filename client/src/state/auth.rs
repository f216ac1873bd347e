//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while a sign-in or sign-up round trip is in flight.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
