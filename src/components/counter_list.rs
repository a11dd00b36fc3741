//! Counter List Component
//!
//! Main column: create button plus every counter with its count.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{CounterCard, CreateCounterSheet, Spinner};
use crate::context::{use_app_context, use_refresh_version};
use crate::loader::{self, LoadState, RequestSequencer};
use crate::models::Counter;

#[component]
pub fn CounterList() -> impl IntoView {
    let ctx = use_app_context();
    let version = use_refresh_version();
    let (state, set_state) = signal(LoadState::<Vec<Counter>>::Loading);

    let sequencer = RequestSequencer::default();
    {
        let sequencer = sequencer.clone();
        on_cleanup(move || sequencer.invalidate());
    }

    // Load counters on mount and after every mutation
    Effect::new(move |_| {
        let version = version.get();
        let ticket = sequencer.begin();
        let sequencer = sequencer.clone();
        log::debug!("Loading counters, version={}", version);
        set_state.set(LoadState::Loading);
        spawn_local(async move {
            let loaded = loader::load_counters(&ctx.api()).await;
            if sequencer.is_current(ticket) {
                set_state.set(loaded);
            } else {
                log::debug!("Discarding stale counter list (version {})", version);
            }
        });
    });

    view! {
        <div class="counter-list">
            <div class="toolbar">
                <CreateCounterSheet />
            </div>

            <hr class="separator" />

            {move || match state.get() {
                LoadState::Loading => view! {
                    <div class="centered"><Spinner /></div>
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <p class="error-text">{message}</p>
                }.into_any(),
                LoadState::Loaded(counters) if counters.is_empty() => view! {
                    <p class="empty-text">"Aún no hay contadores."</p>
                }.into_any(),
                LoadState::Loaded(counters) => view! {
                    <div class="counters">
                        <For
                            each=move || counters.clone()
                            key=|counter| counter.clone()
                            children=move |counter| view! { <CounterCard counter=counter /> }
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
