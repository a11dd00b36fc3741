//! Spinner Component

use leptos::prelude::*;

/// Loading indicator
#[component]
pub fn Spinner(#[prop(optional, into)] class: String) -> impl IntoView {
    view! { <span class=format!("spinner {}", class) role="status" aria-label="Cargando"></span> }
}
