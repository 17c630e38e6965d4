//! Todo List Frontend App
//!
//! Main application component: input row, filter bar, task list.

use leptos::prelude::*;

use crate::api::{HttpTaskService, BASE_URL};
use crate::components::{FilterBar, TaskForm, TaskList};
use crate::context::AppContext;
use crate::state::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(ViewState::default());

    let ctx = AppContext::new((state, set_state), HttpTaskService::new(BASE_URL));
    provide_context(ctx);

    // Load the full list once on mount
    Effect::new(move |_| {
        ctx.load_initial();
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Todo List"</h1>

                <TaskForm />

                <FilterBar />

                <TaskList />

                <p class="task-count">
                    {move || format!("{} tasks", state.with(|s| s.tasks.len()))}
                </p>
            </main>
        </div>
    }
}
