//! Root component wiring injected services into the panel.

use leptos::prelude::*;

use crate::components::my_designs_panel::MyDesignsPanel;
use crate::services::{PanelServices, ServicesHandle};
use crate::state::auth::AuthState;

/// Root component.
///
/// Provides the shared auth state as context and resolves the provider
/// session once on mount.
#[component]
pub fn App(services: PanelServices) -> impl IntoView {
    let services: ServicesHandle = StoredValue::new_local(services);
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "csr")]
    {
        let services = services.get_value();
        leptos::task::spawn_local(async move {
            let state = crate::services::session::refresh_session(&*services.auth).await;
            auth.set(state);
        });
    }

    view! { <MyDesignsPanel services=services/> }
}
