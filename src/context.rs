//! Application Context
//!
//! Shared state provided via Leptos Context API. The intent methods are the
//! only place that spawns synchronizer calls; components stay presentational.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTaskService;
use crate::state::{reduce, Event, Filter, ViewState};
use crate::sync::{self, AddOutcome};

/// App-wide state and the task service, provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current view state - read
    pub state: ReadSignal<ViewState>,
    /// Current view state - write
    set_state: WriteSignal<ViewState>,
    service: HttpTaskService,
}

impl AppContext {
    pub fn new(
        state: (ReadSignal<ViewState>, WriteSignal<ViewState>),
        service: HttpTaskService,
    ) -> Self {
        Self {
            state: state.0,
            set_state: state.1,
            service,
        }
    }

    fn dispatch(&self, event: Event) {
        self.set_state.update(|state| *state = reduce(state, event));
    }

    /// Bump the generation and return the ticket the next load must carry.
    fn begin_refresh(&self) -> u64 {
        self.dispatch(Event::RefreshStarted);
        self.state.with_untracked(ViewState::generation)
    }

    /// Mount-time load of the unfiltered list.
    pub fn load_initial(&self) {
        let ctx = *self;
        let ticket = ctx.begin_refresh();
        spawn_local(async move {
            if let Some(tasks) = sync::synchronize(&ctx.service, Filter::All).await {
                ctx.dispatch(Event::TasksLoaded { ticket, tasks });
            }
        });
    }

    /// Mirror the input field into the draft.
    pub fn edit_draft(&self, text: String) {
        self.dispatch(Event::DraftEdited(text));
    }

    /// Switch the active filter and reload the list from its path.
    pub fn select_filter(&self, filter: Filter) {
        let ctx = *self;
        ctx.dispatch(Event::FilterSelected(filter));
        let ticket = ctx.state.with_untracked(ViewState::generation);
        spawn_local(async move {
            if let Some(tasks) = sync::synchronize(&ctx.service, filter).await {
                ctx.dispatch(Event::TasksLoaded { ticket, tasks });
            }
        });
    }

    /// Submit the draft as a new task. Empty drafts are dropped without a
    /// request; otherwise the draft is cleared once the attempt settles,
    /// success or failure.
    pub fn submit_draft(&self) {
        let draft = self.state.with_untracked(|state| state.draft.clone());
        if sync::normalized_title(&draft).is_none() {
            return;
        }
        let ctx = *self;
        let ticket = ctx.begin_refresh();
        spawn_local(async move {
            match sync::add_task(&ctx.service, &draft).await {
                AddOutcome::Skipped => {}
                AddOutcome::Attempted => ctx.dispatch(Event::DraftSubmitted),
                AddOutcome::Refreshed(tasks) => {
                    ctx.dispatch(Event::TasksLoaded { ticket, tasks });
                    ctx.dispatch(Event::DraftSubmitted);
                }
            }
        });
    }

    /// Flip a task's completion flag, then reload the active filter's list.
    pub fn toggle_task(&self, id: u64, text: String, done: bool) {
        let ctx = *self;
        let filter = ctx.state.with_untracked(|state| state.filter);
        let ticket = ctx.begin_refresh();
        spawn_local(async move {
            if let Some(tasks) = sync::toggle_task(&ctx.service, id, &text, done, filter).await {
                ctx.dispatch(Event::TasksLoaded { ticket, tasks });
            }
        });
    }

    /// Delete a task, then reload the active filter's list.
    pub fn delete_task(&self, id: u64) {
        let ctx = *self;
        let filter = ctx.state.with_untracked(|state| state.filter);
        let ticket = ctx.begin_refresh();
        spawn_local(async move {
            if let Some(tasks) = sync::delete_task(&ctx.service, id, filter).await {
                ctx.dispatch(Event::TasksLoaded { ticket, tasks });
            }
        });
    }
}
