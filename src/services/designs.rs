//! List, open, copy, and delete flows.

#[cfg(test)]
#[path = "designs_test.rs"]
mod designs_test;

use crate::error::PanelError;
use crate::host::DesignHost;
use crate::net::api::DesignsApi;
use crate::net::auth::{AuthProvider, TokenOptions};
use crate::net::types::{Design, DesignId};
use crate::state::designs::DeleteOutcome;
use crate::util::timeout::{deadline, race};

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete it?";
pub const TOKEN_TIMEOUT_MESSAGE: &str = "token request timed out";

/// Ask the provider for a bearer token, giving up once `deadline` fires.
///
/// # Errors
///
/// `PanelError::Auth` when the provider fails or does not answer in time.
pub async fn request_token<A, D>(auth: &A, options: &TokenOptions, deadline: D) -> Result<String, PanelError>
where
    A: AuthProvider + ?Sized,
    D: Future<Output = ()>,
{
    race(auth.access_token(options), deadline)
        .await
        .unwrap_or_else(|| Err(PanelError::Auth(TOKEN_TIMEOUT_MESSAGE.to_owned())))
}

/// Fetch the signed-in user's designs. Token retrieval and the request are
/// each bounded by `timeout_ms`.
///
/// # Errors
///
/// `PanelError::Auth` if no bearer token could be obtained, otherwise
/// whatever the backend call reports.
pub async fn load_designs<A, C>(
    auth: &A,
    api: &C,
    options: &TokenOptions,
    timeout_ms: u32,
) -> Result<Vec<Design>, PanelError>
where
    A: AuthProvider + ?Sized,
    C: DesignsApi + ?Sized,
{
    let token = request_token(auth, options, deadline(timeout_ms)).await?;
    api.list_designs(&token).await
}

/// Ask the host to open `id`.
pub fn open_design<H: DesignHost + ?Sized>(host: &H, id: &DesignId) {
    host.load_by_id(id);
}

/// Duplicate the host's open document. This is not necessarily the design
/// whose card was clicked.
pub fn copy_design<H: DesignHost + ?Sized>(host: &H) {
    host.duplicate();
}

/// Confirm, then delete `design` on the backend.
///
/// The token is the one the host already holds, falling back to a silent
/// provider token. Nothing is sent when `confirm` returns `false`.
///
/// # Errors
///
/// `PanelError::Auth` when no token is available, `PanelError::Delete` when
/// the backend call fails.
pub async fn delete_design<H, A, C, F>(
    host: &H,
    auth: &A,
    api: &C,
    options: &TokenOptions,
    timeout_ms: u32,
    design: &Design,
    confirm: F,
) -> Result<DeleteOutcome, PanelError>
where
    H: DesignHost + ?Sized,
    A: AuthProvider + ?Sized,
    C: DesignsApi + ?Sized,
    F: FnOnce(&str) -> bool,
{
    if !confirm(DELETE_CONFIRM_PROMPT) {
        return Ok(DeleteOutcome::Declined);
    }
    let token = match host.current_auth_token() {
        Some(token) => token,
        None => request_token(auth, options, deadline(timeout_ms)).await?,
    };
    api.delete_design(&design.design_id, &token).await?;
    Ok(DeleteOutcome::Deleted)
}
