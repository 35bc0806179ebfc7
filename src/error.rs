//! Panel error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every network-facing operation returns `Result<_, PanelError>`. Errors
//! never escape the panel: they resolve to a visible terminal state (retry
//! or re-login control, or a dismissible notice) instead of a hung spinner.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    /// Session lookup or bearer-token retrieval failed.
    #[error("authentication failed: {0}")]
    Auth(String),
    /// The design list could not be loaded.
    #[error("could not load designs: {0}")]
    Fetch(String),
    /// The backend rejected or never answered a delete.
    #[error("could not delete design: {0}")]
    Delete(String),
}

impl PanelError {
    /// Short message shown in the panel body.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Auth(_) => "Your session has expired. Please log in again.",
            Self::Fetch(_) => "Could not load your designs.",
            Self::Delete(_) => "The design could not be deleted. Please try again.",
        }
    }

    /// Whether recovery needs a fresh login rather than a retry.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}
