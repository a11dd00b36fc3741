//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::favorites::{FavoritesStore, ToggleOutcome};
use crate::refresh::RefreshCoordinator;
use crate::storage::LocalStorage;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<HttpApi>,
    refresh: StoredValue<RefreshCoordinator>,
    /// Favorites, mirrored to localStorage on every write
    favorites: RwSignal<FavoritesStore<LocalStorage>>,
}

impl AppContext {
    pub fn new(api: HttpApi, refresh: RefreshCoordinator, favorites: FavoritesStore<LocalStorage>) -> Self {
        Self {
            api: StoredValue::new(api),
            refresh: StoredValue::new(refresh),
            favorites: RwSignal::new(favorites),
        }
    }

    pub fn api(&self) -> HttpApi {
        self.api.get_value()
    }

    pub fn refresh(&self) -> RefreshCoordinator {
        self.refresh.get_value()
    }

    /// Favorite ids (tracked)
    pub fn favorite_ids(&self) -> Vec<u32> {
        self.favorites.with(|f| f.ids().to_vec())
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.favorites.with(|f| f.contains(id))
    }

    pub fn favorites_full(&self) -> bool {
        self.favorites.with(|f| f.is_full())
    }

    pub fn toggle_favorite(&self, id: u32) {
        self.favorites.update(|f| match f.toggle(id) {
            Ok(ToggleOutcome::Full) => log::info!("Favorites full, not adding counter {}", id),
            Ok(outcome) => log::debug!("Favorite {} {:?}", id, outcome),
            Err(err) => log::warn!("Favorite {} not persisted: {}", id, err),
        });
    }

    pub fn reorder_favorites(&self, source: u32, target: u32) {
        self.favorites.update(|f| {
            if let Err(err) = f.reorder(source, target) {
                log::warn!("Favorites order not persisted: {}", err);
            }
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Current refresh version as a signal; re-runs effects that read it
/// whenever a mutation bumps the coordinator.
pub fn use_refresh_version() -> ReadSignal<u64> {
    let refresh = use_app_context().refresh();
    let (version, set_version) = signal(0u64);
    let subscription = refresh.watch(move |v| set_version.set(v));
    on_cleanup(move || refresh.unsubscribe(subscription));
    version
}
