//! Data Loaders
//!
//! Fetch routines behind the counter list and the favorites panel, plus
//! request sequencing so a superseded response never overwrites newer state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures::future::join_all;

use crate::api::CounterApi;
use crate::favorites::MAX_FAVORITES;
use crate::models::{Counter, Reason};

/// State of a view backed by one fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// Human-readable error message
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Stamp of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Hands out increasing tickets; only the latest one is current.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Make every outstanding ticket stale (view torn down)
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// One entry of the favorites panel. Used whole as the list key so any
/// change in the fetched counter re-renders its card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FavoriteSlot {
    pub id: u32,
    pub counter: Result<Counter, String>,
}

pub async fn load_counters<A: CounterApi + ?Sized>(api: &A) -> LoadState<Vec<Counter>> {
    match api.list_counters().await {
        Ok(counters) => {
            log::debug!("Loaded {} counters", counters.len());
            LoadState::Loaded(counters)
        }
        Err(err) => {
            log::error!("Error loading counters: {}", err);
            LoadState::Failed(err.to_string())
        }
    }
}

pub async fn load_reasons<A: CounterApi + ?Sized>(api: &A, counter_id: u32) -> LoadState<Vec<Reason>> {
    match api.list_reasons(counter_id).await {
        Ok(reasons) => LoadState::Loaded(reasons),
        Err(err) => {
            log::error!("Error fetching reasons for counter {}: {}", counter_id, err);
            LoadState::Failed(err.to_string())
        }
    }
}

/// Fetch the first four favorites concurrently. Slots keep the order of
/// `ids` and fail independently. No request is made for an empty list.
pub async fn fetch_favorites<A: CounterApi + ?Sized>(api: &A, ids: &[u32]) -> Vec<FavoriteSlot> {
    let requests = ids.iter().take(MAX_FAVORITES).map(|&id| async move {
        let counter = api.get_counter(id).await.map_err(|err| {
            log::warn!("Error fetching favorite {}: {}", id, err);
            err.to_string()
        });
        FavoriteSlot { id, counter }
    });
    join_all(requests).await
}
