//! "My Designs" panel shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the design list for its lifetime. Loads the list when the session
//! becomes ready, routes card actions to the host and backend, and renders
//! exactly one body view: login prompt, loading, empty, grid, or error.
//!
//! Async completions are discarded once the panel is torn down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::design_grid::DesignGrid;
use crate::error::PanelError;
use crate::host::HostHandle;
use crate::net::types::Design;
use crate::services::ServicesHandle;
use crate::state::auth::AuthState;
use crate::state::designs::{DesignsState, PanelView, panel_view};
use crate::util::auth::install_design_loader;

pub const LOGIN_PROMPT: &str = "If you want to save your work into cloud storage you need to login.";

/// The "My Designs" section body. Expects `RwSignal<AuthState>` in context.
#[component]
pub fn MyDesignsPanel(services: ServicesHandle) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let designs = RwSignal::new(DesignsState::default());
    let host: HostHandle = StoredValue::new_local(services.with_value(|s| s.host.clone()));

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let load = Callback::new({
        let alive = alive.clone();
        move |()| {
            let ticket = designs.try_update(DesignsState::begin_load).unwrap_or_default();
            leptos::logging::log!("loading designs (request {ticket})");

            #[cfg(feature = "csr")]
            {
                let services = services.get_value();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let options = services.config.token_options();
                    let result = crate::services::designs::load_designs(
                        &*services.auth,
                        &*services.api,
                        &options,
                        services.config.request_timeout_ms,
                    )
                    .await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match &result {
                        Ok(list) => leptos::logging::log!("loaded {} designs", list.len()),
                        Err(e) => leptos::logging::warn!("design list load failed: {e}"),
                    }
                    designs.update(|s| {
                        if !s.finish_load(ticket, result) {
                            leptos::logging::log!("dropped stale design list (request {ticket})");
                        }
                    });
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &alive;
            }
        }
    });

    install_design_loader(auth, load);

    let on_delete = Callback::new({
        let alive = alive.clone();
        move |design: Design| {
            #[cfg(feature = "csr")]
            {
                let services = services.get_value();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let options = services.config.token_options();
                    let outcome = crate::services::designs::delete_design(
                        &*services.host,
                        &*services.auth,
                        &*services.api,
                        &options,
                        services.config.request_timeout_ms,
                        &design,
                        crate::util::dialog::confirm,
                    )
                    .await;
                    if !alive.load(Ordering::Relaxed) {
                        return;
                    }
                    match &outcome {
                        Ok(o) => leptos::logging::log!("delete {}: {o:?}", design.design_id),
                        Err(e) => leptos::logging::warn!("delete {} failed: {e}", design.design_id),
                    }
                    designs.update(|s| s.finish_delete(&design.design_id, &outcome));
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (design, &alive);
            }
        }
    });

    let on_login = Callback::new({
        let alive = alive.clone();
        move |()| {
            #[cfg(feature = "csr")]
            {
                let services = services.get_value();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    match crate::services::session::login(&*services.auth).await {
                        Ok(state) => {
                            let reload = auth
                                .with_untracked(|before| crate::util::auth::reload_after_login(before, &state));
                            auth.set(state);
                            if reload && alive.load(Ordering::Relaxed) {
                                load.run(());
                            }
                        }
                        Err(e) => leptos::logging::warn!("login failed: {e}"),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &alive;
            }
        }
    });

    let on_logout = Callback::new(move |()| {
        designs.update(DesignsState::clear);
        #[cfg(feature = "csr")]
        {
            let services = services.get_value();
            leptos::task::spawn_local(async move {
                let state = crate::services::session::logout(&*services.auth).await;
                auth.set(state);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            auth.set(AuthState::signed_out());
        }
    });

    let view_state = Memo::new(move |_| auth.with(|a| designs.with(|d| panel_view(a, d))));
    let user_name = move || auth.with(|a| a.banner_name().to_owned());

    view! {
        <div class="my-designs">
            <Show when=move || auth.with(AuthState::shows_banner)>
                <div class="my-designs__banner">
                    <span class="my-designs__user">"Logged as " {user_name}</span>
                    <button class="btn my-designs__logout" on:click=move |_| on_logout.run(())>
                        "Logout"
                    </button>
                </div>
            </Show>

            {move || match view_state.get() {
                PanelView::Unauthenticated => {
                    view! {
                        <div class="my-designs__login">
                            <p>{LOGIN_PROMPT}</p>
                            <button class="btn btn--primary btn--fill" on:click=move |_| on_login.run(())>
                                "Ok, login"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                PanelView::Loading => view! { <p class="my-designs__loading">"Loading..."</p> }.into_any(),
                PanelView::Empty => view! { <p class="my-designs__empty">"No designs yet"</p> }.into_any(),
                PanelView::Ready => {
                    view! { <DesignGrid designs=designs host=host on_delete=on_delete/> }.into_any()
                }
                PanelView::Error(err) => {
                    view! { <PanelErrorState error=err on_retry=load on_login=on_login/> }.into_any()
                }
            }}

            <Show when=move || designs.with(|s| s.delete_error.is_some())>
                <div class="my-designs__notice" role="alert">
                    <span>
                        {move || designs.with(|s| s.delete_error.as_ref().map(PanelError::user_message).unwrap_or_default())}
                    </span>
                    <button
                        class="btn my-designs__notice-dismiss"
                        on:click=move |_| designs.update(DesignsState::dismiss_delete_error)
                        aria-label="Dismiss"
                    >
                        "\u{2715}"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Terminal failure view with the matching recovery control.
#[component]
fn PanelErrorState(error: PanelError, on_retry: Callback<()>, on_login: Callback<()>) -> impl IntoView {
    let needs_login = error.needs_login();
    let detail = error.to_string();

    view! {
        <div class="my-designs__error" role="alert">
            <p class="my-designs__error-message">{error.user_message()}</p>
            <p class="my-designs__error-detail">{detail}</p>
            {if needs_login {
                view! {
                    <button class="btn btn--primary" on:click=move |_| on_login.run(())>
                        "Login again"
                    </button>
                }
                    .into_any()
            } else {
                view! {
                    <button class="btn btn--primary" on:click=move |_| on_retry.run(())>
                        "Retry"
                    </button>
                }
                    .into_any()
            }}
        </div>
    }
}
