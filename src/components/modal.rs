//! Modal Component
//!
//! Backdrop + panel used by the sheet, dialog and drawer variants.
//! Clicking the backdrop requests close; the panel swallows clicks.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    on_close: Callback<()>,
    /// "sheet", "dialog" or "drawer"
    #[prop(into)] variant: String,
    children: ChildrenFn,
) -> impl IntoView {
    let panel_class = format!("modal-panel {}", variant);

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class=panel_class.clone()
                    role="dialog"
                    on:click=|ev| ev.stop_propagation()
                >
                    {children()}
                </div>
            </div>
        </Show>
    }
}
