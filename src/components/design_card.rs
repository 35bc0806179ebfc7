//! Card for one saved design with its Open / Copy / Delete menu.
//!
//! DESIGN
//! ======
//! The card body opens the design. Menu clicks stop propagation so choosing
//! Copy or Delete never also opens the design underneath.

use leptos::prelude::*;

use crate::host::HostHandle;
use crate::net::types::Design;
use crate::services::designs::{copy_design, open_design};

/// A clickable design card with a contextual action menu.
#[component]
pub fn DesignCard(design: Design, host: HostHandle, on_delete: Callback<Design>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let open = Callback::new({
        let id = design.design_id.clone();
        move |()| host.with_value(|h| open_design(h.as_ref(), &id))
    });
    let copy = Callback::new(move |()| host.with_value(|h| copy_design(h.as_ref())));
    let delete = Callback::new({
        let design = design.clone();
        move |()| on_delete.run(design.clone())
    });

    let name = design.name.clone();
    let alt = name.clone();
    let title = name.clone();

    view! {
        <div class="design-card" on:click=move |_| open.run(())>
            <img class="design-card__preview" src=design.preview alt=alt/>
            <div class="design-card__name" title=title>{name}</div>
            <div class="design-card__menu" on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <button
                    class="btn design-card__more"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                    title="More"
                    aria-label="Design actions"
                >
                    "\u{22EF}"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="design-card__popover" role="menu">
                        <button
                            class="design-card__item"
                            role="menuitem"
                            on:click=move |_| {
                                menu_open.set(false);
                                open.run(());
                            }
                        >
                            "Open"
                        </button>
                        <button
                            class="design-card__item"
                            role="menuitem"
                            on:click=move |_| {
                                menu_open.set(false);
                                copy.run(());
                            }
                        >
                            "Copy"
                        </button>
                        <button
                            class="design-card__item design-card__item--danger"
                            role="menuitem"
                            on:click=move |_| {
                                menu_open.set(false);
                                delete.run(());
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
