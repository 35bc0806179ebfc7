//! # my-designs
//!
//! Leptos + WASM "My Designs" section for a browser design editor's side
//! panel. Lists the signed-in user's saved designs in two columns and lets
//! them open, copy, or delete one.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel sits between three external collaborators: the identity
//! provider (`net::auth`), the designs backend (`net::api`), and the editor
//! host object that owns the open document (`host`). Browser glue is gated
//! behind the `csr` feature; everything else runs on the host toolchain so
//! it can be unit tested.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod host;
pub mod net;
pub mod services;
pub mod state;
pub mod util;

/// Mount the panel into `container`.
///
/// `project` is the editor's document-management object and `auth0` an
/// initialized `@auth0/auth0-spa-js` client.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountMyDesigns)]
pub fn mount_my_designs(container: web_sys::HtmlElement, project: host::JsProject, auth0: net::auth::Auth0Client) {
    use std::rc::Rc;

    use leptos::prelude::*;

    let config = config::PanelConfig::from_env();
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config.log_level);

    let services = services::PanelServices {
        auth: Rc::new(net::auth::Auth0Provider::new(auth0)),
        api: Rc::new(net::api::HttpDesignsApi::new(config.clone())),
        host: Rc::new(host::JsProjectHost::new(project)),
        config,
    };

    leptos::mount::mount_to(container, move || view! { <app::App services=services/> }).forget();
}

/// Mount the section's tab button into `container`. `on_select` receives the
/// section name when the tab is clicked.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = mountMyDesignsTab)]
pub fn mount_my_designs_tab(container: web_sys::HtmlElement, on_select: js_sys::Function) {
    use leptos::prelude::*;

    use crate::components::section_tab::SectionTab;

    leptos::mount::mount_to(container, move || {
        let active = RwSignal::new(false);
        let on_select = StoredValue::new_local(on_select);
        let select = Callback::new(move |name: &'static str| {
            active.set(true);
            on_select.with_value(|f| {
                if let Err(e) = f.call1(&wasm_bindgen::JsValue::NULL, &wasm_bindgen::JsValue::from_str(name)) {
                    leptos::logging::warn!("section select callback for {name} threw: {e:?}");
                }
            });
        });
        view! { <SectionTab active=active on_select=select/> }
    })
    .forget();
}
