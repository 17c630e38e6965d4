//! Task List Component
//!
//! Renders the fetched list; one row per task with toggle and delete actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

/// List of task rows
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="task-list">
            <For
                each=move || ctx.state.with(|state| state.tasks.clone())
                key=|task| (task.id, task.done)
                children=move |task| view! { <TaskRow task=task /> }
            />
        </div>
    }
}

/// A single task row
#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id;
    let done = task.done;
    let text = task.text.clone();
    let toggle_text = task.text.clone();

    view! {
        <div class=move || if done { "task-row done" } else { "task-row" }>
            <input
                type="checkbox"
                checked=done
                on:change=move |_| ctx.toggle_task(id, toggle_text.clone(), done)
            />
            <span class="task-text">{text}</span>
            <button class="delete-btn" on:click=move |_| ctx.delete_task(id)>"×"</button>
        </div>
    }
}
