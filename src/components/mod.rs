//! UI Components
//!
//! Reusable Leptos components.

mod filter_bar;
mod task_form;
mod task_list;

pub use filter_bar::FilterBar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
