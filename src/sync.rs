//! Task Synchronizer
//!
//! Translates UI intents into HTTP calls. There is no client-side cache or
//! merge: every successful mutation is followed by a fresh list query, so
//! the held list is always a projection of the last server response. On any
//! failure the operation logs and yields nothing, leaving the caller's
//! state untouched.

use crate::api::{ApiError, TaskService};
use crate::models::Task;
use crate::state::Filter;

/// Outcome of an add intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Draft was empty after trimming; nothing was sent.
    Skipped,
    /// The POST went out but no refreshed list is available (either the
    /// POST or the follow-up query failed).
    Attempted,
    /// The POST succeeded and the follow-up list query returned this.
    Refreshed(Vec<Task>),
}

/// Trim the draft; `None` means the add must be dropped without a request.
pub fn normalized_title(draft: &str) -> Option<String> {
    let trimmed = draft.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Run the list query for `filter`. Failures are logged and yield `None`.
pub async fn synchronize<S: TaskService>(service: &S, filter: Filter) -> Option<Vec<Task>> {
    match service.list(filter).await {
        Ok(tasks) => {
            log_loaded(tasks.len());
            Some(tasks)
        }
        Err(err) => {
            report_failure("list", &err);
            None
        }
    }
}

/// POST the trimmed draft, then refresh from the unfiltered list.
pub async fn add_task<S: TaskService>(service: &S, draft: &str) -> AddOutcome {
    let Some(title) = normalized_title(draft) else {
        return AddOutcome::Skipped;
    };
    match service.create(&title).await {
        Ok(()) => match synchronize(service, Filter::All).await {
            Some(tasks) => AddOutcome::Refreshed(tasks),
            None => AddOutcome::Attempted,
        },
        Err(err) => {
            report_failure("add", &err);
            AddOutcome::Attempted
        }
    }
}

/// PUT the task with `done` flipped and the title resubmitted unchanged,
/// then refresh using the currently active filter.
pub async fn toggle_task<S: TaskService>(
    service: &S,
    id: u64,
    title: &str,
    done: bool,
    filter: Filter,
) -> Option<Vec<Task>> {
    match service.update(id, title, !done).await {
        Ok(()) => synchronize(service, filter).await,
        Err(err) => {
            report_failure("toggle", &err);
            None
        }
    }
}

/// DELETE by id, then refresh using the currently active filter.
pub async fn delete_task<S: TaskService>(
    service: &S,
    id: u64,
    filter: Filter,
) -> Option<Vec<Task>> {
    match service.delete(id).await {
        Ok(()) => synchronize(service, filter).await,
        Err(err) => {
            report_failure("delete", &err);
            None
        }
    }
}

fn log_loaded(count: usize) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("[sync] loaded {} tasks", count).into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = count;
}

fn report_failure(operation: &str, err: &ApiError) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&format!("[sync] {} failed: {}", operation, err).into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[sync] {} failed: {}", operation, err);
}
