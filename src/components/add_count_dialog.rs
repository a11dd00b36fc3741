//! Add Count Dialog
//!
//! Increment a counter under a named reason, or create the reason first.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{Modal, Spinner};
use crate::context::{use_app_context, use_refresh_version};
use crate::forms::{AddCountForm, BusyGuard};
use crate::loader::{self, LoadState, RequestSequencer};
use crate::models::{Counter, Reason};
use crate::mutations;

#[component]
pub fn AddCountDialog(counter: Counter) -> impl IntoView {
    let ctx = use_app_context();
    let version = use_refresh_version();
    let counter_id = counter.id;

    let (open, set_open) = signal(false);
    let (busy, set_busy) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (reasons, set_reasons) = signal(LoadState::<Vec<Reason>>::Loading);
    let form = RwSignal::new(AddCountForm::default());

    let sequencer = RequestSequencer::default();
    {
        let sequencer = sequencer.clone();
        on_cleanup(move || sequencer.invalidate());
    }

    // Load reasons while open; reload after any mutation
    Effect::new(move |_| {
        version.track();
        if !open.get() { return; }
        let ticket = sequencer.begin();
        let sequencer = sequencer.clone();
        set_reasons.set(LoadState::Loading);
        spawn_local(async move {
            let loaded = loader::load_reasons(&ctx.api(), counter_id).await;
            if !sequencer.is_current(ticket) {
                log::debug!("Discarding stale reasons for counter {}", counter_id);
                return;
            }
            if let LoadState::Loaded(list) = &loaded {
                form.update(|f| f.sync_selection(list));
            }
            set_reasons.set(loaded);
        });
    });

    let reason_list = Memo::new(move |_| match reasons.get() {
        LoadState::Loaded(list) => list,
        _ => Vec::new(),
    });
    let loading = move || reasons.with(|r| r.is_loading());
    let shows_new_reason = move || form.with(|f| f.shows_new_reason(&reason_list.get()));
    let can_submit = move || {
        !busy.get() && !loading() && form.with(|f| f.can_submit(counter_id, &reason_list.get()))
    };

    let close = move || {
        if busy.get_untracked() { return; }
        set_open.set(false);
        set_error.set(None);
        form.update(|f| f.reset());
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() { return; }
        let list = reason_list.get_untracked();
        let mut draft = form.get_untracked();
        if !draft.can_submit(counter_id, &list) { return; }

        spawn_local(async move {
            let _busy = BusyGuard::engage(move |b| set_busy.set(b));
            match mutations::add_count(&ctx.api(), &mut draft, counter_id, &list, &ctx.refresh()).await {
                Ok(_) => {
                    form.set(draft);
                    set_error.set(None);
                    set_open.set(false);
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let created_by_id = format!("createdBy-{}", counter_id);
    let new_reason_id = format!("newReason-{}", counter_id);
    let Counter { name, description, .. } = counter;

    view! {
        <button class="btn outline" on:click=move |_| set_open.set(true)>
            "Añadir ↑"
        </button>

        <Modal open=open on_close=Callback::new(move |_| close()) variant="dialog">
            <form class="modal-form" on:submit=on_submit>
                <header class="modal-header">
                    <h2>{name.clone()}</h2>
                    <p class="muted">{description.clone()}</p>
                </header>

                {
                    let created_by_id = created_by_id.clone();
                    let new_reason_id = new_reason_id.clone();
                    move || if loading() {
                        view! { <div class="centered"><Spinner class="large" /></div> }.into_any()
                    } else {
                        let new_reason_id = new_reason_id.clone();
                        view! {
                            <label for=created_by_id.clone()>"Enviado por: " <span class="required">"*"</span></label>
                            <input
                                id=created_by_id.clone()
                                type="text"
                                placeholder="Escribe tu nombre ;)"
                                prop:value=move || form.with(|f| f.created_by.clone())
                                on:input=move |ev| form.update(|f| f.created_by = event_target_value(&ev))
                                disabled=move || busy.get()
                            />

                            {move || reasons.with(|r| match r {
                                LoadState::Failed(message) => Some(view! { <p class="error-text">{message.clone()}</p> }),
                                _ => None,
                            })}

                            <Show when=shows_new_reason>
                                <label for=new_reason_id.clone()>"Nueva razón: " <span class="required">"*"</span></label>
                                <input
                                    id=new_reason_id.clone()
                                    type="text"
                                    placeholder="Describe la razón..."
                                    prop:value=move || form.with(|f| f.new_reason_name.clone())
                                    on:input=move |ev| form.update(|f| f.new_reason_name = event_target_value(&ev))
                                    disabled=move || busy.get()
                                />
                            </Show>

                            <Show when=move || !shows_new_reason()>
                                <div class="reason-header">
                                    <span>"Selecciona una razón: " <span class="required">"*"</span></span>
                                    <button
                                        type="button"
                                        class="btn ghost small"
                                        on:click=move |_| form.update(|f| f.new_reason_mode = true)
                                    >
                                        "+ Nueva razón"
                                    </button>
                                </div>
                                <div class="reason-list">
                                    <For
                                        each=move || reason_list.get()
                                        key=|reason| reason.clone()
                                        children=move |reason| {
                                            let id = reason.id;
                                            let input_id = format!("reason-{}", id);
                                            view! {
                                                <label class="reason-option" for=input_id.clone()>
                                                    <input
                                                        type="radio"
                                                        id=input_id.clone()
                                                        name=format!("reason-of-{}", counter_id)
                                                        prop:checked=move || form.with(|f| f.selected_reason == Some(id))
                                                        on:change=move |_| form.update(|f| f.selected_reason = Some(id))
                                                        disabled=move || busy.get()
                                                    />
                                                    <span class="reason-name">{reason.name}</span>
                                                    <span class="pill">{reason.count}</span>
                                                </label>
                                            }
                                        }
                                    />
                                </div>
                            </Show>
                        }.into_any()
                    }
                }

                {move || error.get().map(|message| view! { <p class="error-text">{message}</p> })}

                <footer class="modal-footer">
                    <button type="button" class="btn outline" disabled=move || busy.get() on:click=move |_| close()>
                        "Cancelar"
                    </button>
                    <button type="submit" class="btn primary" disabled=move || !can_submit()>
                        {move || match (busy.get(), shows_new_reason()) {
                            (true, true) => view! { <Spinner class="small" /> "Creando..." }.into_any(),
                            (true, false) => view! { <Spinner class="small" /> "Procesando..." }.into_any(),
                            (false, true) => view! { "Crear razón ↑" }.into_any(),
                            (false, false) => view! { "Añadir ↑" }.into_any(),
                        }}
                    </button>
                </footer>
            </form>
        </Modal>
    }
}
