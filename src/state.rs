//! View State and Reducer
//!
//! The whole page is a function of one immutable `ViewState`; every change
//! goes through `reduce`, which never performs I/O.

use crate::models::Task;

/// Which server query path the list is loaded from.
///
/// The filter never acts as a client-side predicate; it only selects the
/// path of the next list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Completed, Filter::Incomplete];

    pub fn path(self) -> &'static str {
        match self {
            Filter::All => "/tasks",
            Filter::Completed => "/tasks/completed",
            Filter::Incomplete => "/tasks/incomplete",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Incomplete => "Incomplete",
        }
    }
}

/// The three pieces of view state, plus the in-flight request guard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Draft input text.
    pub draft: String,
    /// Last successful projection of the server list.
    pub tasks: Vec<Task>,
    /// Active filter selector.
    pub filter: Filter,
    generation: u64,
}

impl ViewState {
    /// Current request generation. A load started now must carry this value
    /// as its ticket to be applied on completion.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Everything that can happen to the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user edited the draft input.
    DraftEdited(String),
    /// The user picked a filter; a list query for it is about to start.
    FilterSelected(Filter),
    /// A mutation or the mount-time load is about to refetch the list.
    RefreshStarted,
    /// A list query finished. Applied only while `ticket` is still current,
    /// so a stale in-flight response cannot overwrite a newer operation.
    TasksLoaded { ticket: u64, tasks: Vec<Task> },
    /// An add attempt settled; the draft is cleared whether or not the
    /// request succeeded.
    DraftSubmitted,
}

pub fn reduce(state: &ViewState, event: Event) -> ViewState {
    let mut next = state.clone();
    match event {
        Event::DraftEdited(text) => next.draft = text,
        Event::FilterSelected(filter) => {
            next.filter = filter;
            next.generation += 1;
        }
        Event::RefreshStarted => next.generation += 1,
        Event::TasksLoaded { ticket, tasks } => {
            if ticket == next.generation {
                next.tasks = tasks;
            }
        }
        Event::DraftSubmitted => next.draft.clear(),
    }
    next
}
