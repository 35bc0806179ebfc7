//! Panel services: async flows over the external collaborators.
//!
//! DESIGN
//! ======
//! Each flow takes its collaborators as trait objects and returns a
//! `Result`, leaving signal updates to the component that spawned it. That
//! keeps the flows runnable with in-memory fakes.

pub mod designs;
pub mod session;

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};

use crate::config::PanelConfig;
use crate::host::DesignHost;
use crate::net::api::DesignsApi;
use crate::net::auth::AuthProvider;

/// Collaborators injected into the panel at mount time.
#[derive(Clone)]
pub struct PanelServices {
    pub config: PanelConfig,
    pub auth: Rc<dyn AuthProvider>,
    pub api: Rc<dyn DesignsApi>,
    pub host: Rc<dyn DesignHost>,
}

/// Arena handle to [`PanelServices`], `Copy` so it can move into callbacks.
pub type ServicesHandle = StoredValue<PanelServices, LocalStorage>;

#[cfg(test)]
pub(crate) mod fakes;
