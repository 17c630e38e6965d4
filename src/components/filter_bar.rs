//! Filter Bar Component
//!
//! Selector buttons for the three list query paths.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::state::Filter;

/// Filter selector buttons
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || ctx.state.with(|state| state.filter == filter);
                view! {
                    <button
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.select_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
