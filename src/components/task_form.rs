//! Task Form Component
//!
//! Input row for adding new tasks.

use leptos::prelude::*;

use crate::context::AppContext;

/// Form for creating new tasks
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_draft();
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Add a new task..."
                prop:value=move || ctx.state.with(|state| state.draft.clone())
                on:input=move |ev| ctx.edit_draft(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
