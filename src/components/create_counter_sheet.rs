//! Create Counter Sheet
//!
//! Side sheet with the form for creating a new counter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Modal, Spinner};
use crate::context::use_app_context;
use crate::forms::{BusyGuard, CreateCounterForm};
use crate::mutations;

#[component]
pub fn CreateCounterSheet() -> impl IntoView {
    let ctx = use_app_context();

    let (open, set_open) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let form = RwSignal::new(CreateCounterForm::default());

    let close = move || {
        if busy.get_untracked() { return; }
        set_open.set(false);
        set_error.set(None);
        form.update(|f| f.reset());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || !form.with_untracked(|f| f.can_submit()) { return; }
        let mut draft = form.get_untracked();

        spawn_local(async move {
            let _busy = BusyGuard::engage(move |b| set_busy.set(b));
            match mutations::create_counter(&ctx.api(), &mut draft, &ctx.refresh()).await {
                Ok(_) => {
                    form.set(draft);
                    set_error.set(None);
                    set_open.set(false);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <button class="btn outline grow" on:click=move |_| set_open.set(true)>
            "Crear contador"
        </button>

        <Modal open=open on_close=Callback::new(move |_| close()) variant="sheet">
            <form class="modal-form" on:submit=on_submit>
                <header class="modal-header">
                    <h2>"Crear contador"</h2>
                    <p class="muted">"Añade tu propio contador y permite que los demás vean que andas contando ;)"</p>
                </header>

                <label for="name">"Nombre del contador " <span class="required">"*"</span></label>
                <input
                    id="name"
                    type="text"
                    placeholder="Ej: Días sin café"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    disabled=move || busy.get()
                />

                <label for="description">"Descripción"</label>
                <input
                    id="description"
                    type="text"
                    placeholder="Ej: Contando los días sin tomar café..."
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    disabled=move || busy.get()
                />

                <label for="createdBy">"Creado por " <span class="required">"*"</span></label>
                <input
                    id="createdBy"
                    type="text"
                    placeholder="Deja tu huella"
                    prop:value=move || form.with(|f| f.created_by.clone())
                    on:input=move |ev| form.update(|f| f.created_by = event_target_value(&ev))
                    disabled=move || busy.get()
                />

                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

                <footer class="modal-footer">
                    <button
                        type="submit"
                        class="btn primary"
                        disabled=move || busy.get() || !form.with(|f| f.can_submit())
                    >
                        {move || if busy.get() {
                            view! { <Spinner class="small" /> "Creando..." }.into_any()
                        } else {
                            view! { "Crear contador →" }.into_any()
                        }}
                    </button>
                    <button type="button" class="btn outline" disabled=move || busy.get() on:click=move |_| close()>
                        "Cancelar"
                    </button>
                </footer>
            </form>
        </Modal>
    }
}
