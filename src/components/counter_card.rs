//! Counter Card Component

use leptos::prelude::*;

use super::{AddAnonCountDrawer, AddCountDialog, FavoriteToggle};
use crate::models::Counter;

#[component]
pub fn CounterCard(counter: Counter) -> impl IntoView {
    view! {
        <div class="counter-card">
            <div class="counter-card-body">
                <div class="counter-card-text">
                    <span class="counter-name">{counter.name.clone()}</span>
                    <span>{counter.description.clone()}</span>
                    <span class="muted">"Por: " {counter.created_by.clone()}</span>
                </div>
                <span class="counter-count">{counter.count}</span>
                <FavoriteToggle counter_id=counter.id />
            </div>

            <hr class="separator" />

            <div class="counter-card-actions">
                <AddAnonCountDrawer counter=counter.clone() />
                <span class="separator-vertical"></span>
                <AddCountDialog counter=counter />
            </div>
        </div>
    }
}
