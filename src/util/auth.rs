//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The design list is requested when the session becomes usable, not on
//! every auth signal change. `LoadTrigger` turns the stream of auth states
//! into rising edges.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Edge detector over auth state: fires once per transition into a ready
/// session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadTrigger {
    was_ready: bool,
}

impl LoadTrigger {
    /// Record `state` and report whether a load should start now.
    pub fn observe(&mut self, state: &AuthState) -> bool {
        let ready = state.is_ready();
        let fire = ready && !self.was_ready;
        self.was_ready = ready;
        fire
    }
}

/// Whether a completed login popup must start a load itself. Logging in
/// again from a session that was already ready ("Login again" after a token
/// failure) produces no rising edge for [`LoadTrigger`].
#[must_use]
pub fn reload_after_login(before: &AuthState, after: &AuthState) -> bool {
    before.is_ready() && after.is_ready()
}

/// Run `load` whenever the session becomes ready.
pub fn install_design_loader(auth: RwSignal<AuthState>, load: Callback<()>) {
    Effect::new(move |prev: Option<LoadTrigger>| {
        let mut trigger = prev.unwrap_or_default();
        if auth.with(|state| trigger.observe(state)) {
            load.run(());
        }
        trigger
    });
}
