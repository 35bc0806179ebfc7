//! Two-column grid of design cards.

use leptos::prelude::*;

use crate::components::design_card::DesignCard;
use crate::host::HostHandle;
use crate::net::types::Design;
use crate::state::designs::DesignsState;
use crate::util::columns::split_columns;

/// Renders the current list split by index parity into two columns.
#[component]
pub fn DesignGrid(designs: RwSignal<DesignsState>, host: HostHandle, on_delete: Callback<Design>) -> impl IntoView {
    let columns = Memo::new(move |_| designs.with(|s| split_columns(&s.items)));

    let render = move |items: Vec<Design>| {
        items
            .into_iter()
            .map(|design| view! { <DesignCard design=design host=host on_delete=on_delete/> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="design-grid">
            <div class="design-grid__column">{move || render(columns.get().left)}</div>
            <div class="design-grid__column">{move || render(columns.get().right)}</div>
        </div>
    }
}
