//! Session refresh against the identity provider.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::auth::AuthProvider;
use crate::state::auth::AuthState;

/// Query the provider and build the resulting auth state. Provider failures
/// resolve to signed-out so the login prompt stays reachable.
pub async fn refresh_session<P: AuthProvider + ?Sized>(provider: &P) -> AuthState {
    match provider.is_authenticated().await {
        Ok(true) => match provider.user().await {
            Ok(user) => AuthState::signed_in(user),
            Err(e) => {
                leptos::logging::warn!("user profile lookup failed: {e}");
                AuthState::signed_in(None)
            }
        },
        Ok(false) => AuthState::signed_out(),
        Err(e) => {
            leptos::logging::warn!("session lookup failed: {e}");
            AuthState::signed_out()
        }
    }
}

/// Run the login popup, then refresh.
///
/// # Errors
///
/// Returns the provider's error if the popup fails or is dismissed.
pub async fn login<P: AuthProvider + ?Sized>(provider: &P) -> Result<AuthState, crate::error::PanelError> {
    provider.login_with_popup().await?;
    Ok(refresh_session(provider).await)
}

/// End the session. The panel is signed out locally even if the provider
/// call fails.
pub async fn logout<P: AuthProvider + ?Sized>(provider: &P) -> AuthState {
    if let Err(e) = provider.logout().await {
        leptos::logging::warn!("logout failed: {e}");
    }
    AuthState::signed_out()
}
