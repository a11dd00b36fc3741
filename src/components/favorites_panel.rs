//! Favorites Panel Component
//!
//! Sidebar with up to four favorite counters, reorderable by dragging.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, entry_class, make_on_mousedown, make_on_mouseenter,
    make_on_mouseleave, DndSignals,
};

use crate::context::{use_app_context, use_refresh_version};
use crate::loader::{self, FavoriteSlot, RequestSequencer};

#[component]
fn FavoriteEntry(entry: FavoriteSlot, dnd: DndSignals) -> impl IntoView {
    let id = entry.id;
    let class = move || format!("favorite-card {}", entry_class(&dnd, id));

    let body = match entry.counter {
        Ok(counter) => view! {
            <span class="counter-name">{counter.name}</span>
            <p>{counter.description}</p>
            <span class="muted">"Por: " {counter.created_by}</span>
            <div class="favorite-count">{counter.count}</div>
        }.into_any(),
        Err(message) => view! {
            <span class="muted">{format!("No se pudo cargar el contador #{}", id)}</span>
            <p class="error-text">{message}</p>
        }.into_any(),
    };

    view! {
        <div
            class=class
            on:mousedown=make_on_mousedown(dnd, id)
            on:mouseenter=make_on_mouseenter(dnd, id)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            {body}
        </div>
    }
}

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let version = use_refresh_version();
    let favorite_ids = Memo::new(move |_| ctx.favorite_ids());

    let (slots, set_slots) = signal(Vec::<FavoriteSlot>::new());
    let (loading, set_loading) = signal(true);

    let sequencer = RequestSequencer::default();
    {
        let sequencer = sequencer.clone();
        on_cleanup(move || sequencer.invalidate());
    }

    // Re-fetch when the list changes or any count may have changed
    Effect::new(move |_| {
        let ids = favorite_ids.get();
        version.track();
        let ticket = sequencer.begin();

        if ids.is_empty() {
            set_slots.set(Vec::new());
            set_loading.set(false);
            return;
        }

        let sequencer = sequencer.clone();
        set_loading.set(true);
        spawn_local(async move {
            let fetched = loader::fetch_favorites(&ctx.api(), &ids).await;
            if sequencer.is_current(ticket) {
                set_slots.set(fetched);
                set_loading.set(false);
            }
        });
    });

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |source, target| ctx.reorder_favorites(source, target));

    view! {
        <aside class="favorites-panel">
            <h2>"Contadores favoritos"</h2>

            {move || if loading.get() {
                view! { <p class="panel-note">"Cargando..."</p> }.into_any()
            } else if slots.with(|s| s.is_empty()) {
                view! { <p class="panel-note muted">"Aún no tienes favoritos."</p> }.into_any()
            } else {
                view! {
                    <div class="favorites-list">
                        <For
                            each=move || slots.get()
                            key=|slot| slot.clone()
                            children=move |slot| view! { <FavoriteEntry entry=slot dnd=dnd /> }
                        />
                    </div>
                }.into_any()
            }}
        </aside>
    }
}
