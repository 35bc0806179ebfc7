//! Side-panel tab registering the section with the host editor.

#[cfg(test)]
#[path = "section_tab_test.rs"]
mod section_tab_test;

use leptos::prelude::*;

/// Identity of a side-panel section as the host editor lists it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub name: &'static str,
    pub label: &'static str,
}

pub const MY_DESIGNS_SECTION: SectionDescriptor = SectionDescriptor { name: "my-designs", label: "My Designs" };

/// Folder-icon tab button for the "My Designs" section.
#[component]
pub fn SectionTab(#[prop(into)] active: Signal<bool>, on_select: Callback<&'static str>) -> impl IntoView {
    view! {
        <button
            class="section-tab"
            class:section-tab--active=move || active.get()
            data-section=MY_DESIGNS_SECTION.name
            on:click=move |_| on_select.run(MY_DESIGNS_SECTION.name)
        >
            <svg class="section-tab__icon" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M2 5a2 2 0 0 1 2-2h4l2 2h6a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2z"></path>
            </svg>
            <span class="section-tab__label">{MY_DESIGNS_SECTION.label}</span>
        </button>
    }
}
