//! Favorite Toggle Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Star button marking a counter as favorite.
/// Disabled for non-favorites once the list is full.
#[component]
pub fn FavoriteToggle(counter_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let is_favorite = move || ctx.is_favorite(counter_id);

    view! {
        <button
            class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
            title=move || if is_favorite() { "Quitar de favoritos" } else { "Añadir a favoritos" }
            disabled=move || !is_favorite() && ctx.favorites_full()
            on:click=move |_| ctx.toggle_favorite(counter_id)
        >
            {move || if is_favorite() { "★" } else { "☆" }}
        </button>
    }
}
