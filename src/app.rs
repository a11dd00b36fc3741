//! Counters App
//!
//! Two-column layout: counter list and favorites sidebar.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::components::{CounterList, FavoritesPanel};
use crate::config::Config;
use crate::context::AppContext;
use crate::favorites::FavoritesStore;
use crate::refresh::RefreshCoordinator;
use crate::storage::LocalStorage;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let favorites = FavoritesStore::load(LocalStorage);
    log::info!(
        "Starting with API {} and {} favorites",
        config.api_base_url,
        favorites.ids().len()
    );

    // Provide context to all children
    provide_context(AppContext::new(
        HttpApi::new(&config),
        RefreshCoordinator::new(),
        favorites,
    ));

    view! {
        <div class="app-layout">
            <main class="main-column">
                <CounterList />
            </main>
            <FavoritesPanel />
        </div>
    }
}
