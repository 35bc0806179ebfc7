//! Auth-session state mirrored from the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the panel shell to pick the login prompt or the user banner, and
//! by the list loader to decide when a fetch is due. Credentials never live
//! here; tokens are requested from the provider on demand.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Banner label when the session is valid but the profile could not be read.
pub const UNKNOWN_USER_LABEL: &str = "signed-in user";

/// Authentication state tracking the session, current user, and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<User>,
    /// The provider is still resolving the session.
    pub loading: bool,
}

impl AuthState {
    /// Session lookup in progress.
    #[must_use]
    pub fn pending() -> Self {
        Self { authenticated: false, user: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(user: Option<User>) -> Self {
        Self { authenticated: true, user, loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Session resolved and valid; the design list may be requested.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.authenticated && !self.loading
    }

    /// Display name from the provider profile, if one was loaded.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    /// The "Logged as" banner (and its Logout button) follows the session,
    /// not the profile.
    #[must_use]
    pub fn shows_banner(&self) -> bool {
        self.is_ready()
    }

    #[must_use]
    pub fn banner_name(&self) -> &str {
        self.display_name().unwrap_or(UNKNOWN_USER_LABEL)
    }
}
