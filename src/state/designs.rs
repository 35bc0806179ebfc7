//! Design-list state and the panel's explicit view phases.
//!
//! DESIGN
//! ======
//! The list has one owner (the panel) and changes in three ways only: a
//! wholesale replace when a load completes, a single removal when a delete
//! succeeds, and a clear on logout. Each load takes a ticket; completions
//! carrying an older ticket are dropped, so overlapping loads resolve to the
//! most recently issued one.
//!
//! What the panel shows is derived by [`panel_view`] as one of a closed set
//! of phases rather than read from loose boolean flags.

#[cfg(test)]
#[path = "designs_test.rs"]
mod designs_test;

use super::auth::AuthState;
use crate::error::PanelError;
use crate::net::types::{Design, DesignId};

/// How a delete flow ended without error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// The backend confirmed the delete.
    Deleted,
}

/// Progress of the most recent list load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load issued since the last clear.
    #[default]
    Idle,
    Loading {
        ticket: u64,
    },
    Loaded,
    Failed(PanelError),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DesignsState {
    pub items: Vec<Design>,
    pub phase: LoadPhase,
    /// Last delete failure, shown until dismissed.
    pub delete_error: Option<PanelError>,
    last_ticket: u64,
}

impl DesignsState {
    /// Mark a load as started and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.last_ticket += 1;
        self.phase = LoadPhase::Loading { ticket: self.last_ticket };
        self.last_ticket
    }

    /// Apply a load result. Returns `false` if `ticket` is stale and the
    /// result was dropped.
    pub fn finish_load(&mut self, ticket: u64, result: Result<Vec<Design>, PanelError>) -> bool {
        if self.phase != (LoadPhase::Loading { ticket }) {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = LoadPhase::Loaded;
            }
            Err(err) => {
                self.phase = LoadPhase::Failed(err);
            }
        }
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    /// Remove the design with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &DesignId) -> bool {
        let before = self.items.len();
        self.items.retain(|d| &d.design_id != id);
        self.items.len() != before
    }

    /// Apply the outcome of a delete flow. The item leaves the list only once
    /// the backend has confirmed.
    pub fn finish_delete(&mut self, id: &DesignId, outcome: &Result<DeleteOutcome, PanelError>) {
        match outcome {
            Ok(DeleteOutcome::Deleted) => {
                self.remove(id);
                self.delete_error = None;
            }
            Ok(DeleteOutcome::Declined) => {}
            Err(err) => self.delete_error = Some(err.clone()),
        }
    }

    pub fn dismiss_delete_error(&mut self) {
        self.delete_error = None;
    }

    /// Drop everything on logout. Tickets keep counting so loads issued
    /// before the clear can never land afterwards.
    pub fn clear(&mut self) {
        self.items.clear();
        self.phase = LoadPhase::Idle;
        self.delete_error = None;
    }
}

/// Body of the panel below the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelView {
    Unauthenticated,
    Loading,
    Ready,
    Empty,
    Error(PanelError),
}

/// Derive the single view the panel should render.
#[must_use]
pub fn panel_view(auth: &AuthState, designs: &DesignsState) -> PanelView {
    if auth.loading {
        return PanelView::Loading;
    }
    if !auth.authenticated {
        return PanelView::Unauthenticated;
    }
    match &designs.phase {
        // Authenticated but the load effect has not fired yet.
        LoadPhase::Idle | LoadPhase::Loading { .. } => PanelView::Loading,
        LoadPhase::Failed(err) => PanelView::Error(err.clone()),
        LoadPhase::Loaded if designs.items.is_empty() => PanelView::Empty,
        LoadPhase::Loaded => PanelView::Ready,
    }
}
