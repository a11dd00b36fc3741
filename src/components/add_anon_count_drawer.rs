//! Anonymous Increment Drawer
//!
//! Bottom drawer confirming an increment without name or reason.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Modal, Spinner};
use crate::context::use_app_context;
use crate::forms::BusyGuard;
use crate::models::Counter;
use crate::mutations;

#[component]
pub fn AddAnonCountDrawer(counter: Counter) -> impl IntoView {
    let ctx = use_app_context();
    let counter_id = counter.id;

    let (open, set_open) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let close = move || {
        if busy.get_untracked() { return; }
        set_open.set(false);
        set_error.set(None);
    };

    let on_confirm = move |_: web_sys::MouseEvent| {
        if busy.get_untracked() { return; }
        spawn_local(async move {
            let _busy = BusyGuard::engage(move |b| set_busy.set(b));
            match mutations::add_anonymous_count(&ctx.api(), counter_id, &ctx.refresh()).await {
                Ok(()) => {
                    set_error.set(None);
                    set_open.set(false);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let Counter { name, description, count, .. } = counter;

    view! {
        <button class="btn secondary" on:click=move |_| set_open.set(true)>
            "Añadir anónimamente ⇡"
        </button>

        <Modal open=open on_close=Callback::new(move |_| close()) variant="drawer">
            <header class="modal-header">
                <h2>{name.clone()}</h2>
                <p class="muted">{description.clone()}</p>
            </header>
            <div class="drawer-count">
                <div class="big-count">{count}</div>
                <div class="caption">"Contadas"</div>
            </div>

            {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

            <footer class="modal-footer">
                <button class="btn primary" disabled=move || busy.get() on:click=on_confirm>
                    {move || if busy.get() {
                        view! { <Spinner class="small" /> "Añadiendo..." }.into_any()
                    } else {
                        view! { "Añadir ↑" }.into_any()
                    }}
                </button>
                <button class="btn outline" disabled=move || busy.get() on:click=move |_| close()>
                    "Cancelar"
                </button>
            </footer>
        </Modal>
    }
}
