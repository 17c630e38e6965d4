//! Frontend Models
//!
//! Client task projection plus the wire shapes of the REST contract.

use serde::{Deserialize, Serialize};

/// Task as held by the client: a read-only projection of one list row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

// ========================
// List Response Shapes
// ========================

/// One element of `data.content` in the list response.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "taskId")]
    pub task_id: u64,
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Deserialize)]
pub struct TaskListData {
    pub content: Vec<TaskRecord>,
}

/// Envelope returned by all three list paths.
#[derive(Debug, Deserialize)]
pub struct TaskListResponse {
    pub data: TaskListData,
}

impl From<TaskRecord> for Task {
    fn from(row: TaskRecord) -> Self {
        Self {
            id: row.task_id,
            text: row.title,
            done: row.done,
        }
    }
}

impl TaskListResponse {
    /// Project the server rows into the client task shape.
    pub fn into_tasks(self) -> Vec<Task> {
        self.data.content.into_iter().map(Task::from).collect()
    }
}

// ========================
// Request Body Structs
// ========================

#[derive(Serialize)]
pub struct CreateTaskBody<'a> {
    pub title: &'a str,
}

#[derive(Serialize)]
pub struct UpdateTaskBody<'a> {
    pub title: &'a str,
    #[serde(rename = "isDone")]
    pub is_done: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_projects_into_tasks() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"data":{"content":[{"taskId":1,"title":"x","done":false}]}}"#;
        let response: TaskListResponse = serde_json::from_str(json)?;
        assert_eq!(
            response.into_tasks(),
            vec![Task {
                id: 1,
                text: "x".to_string(),
                done: false,
            }]
        );
        Ok(())
    }

    #[test]
    fn empty_content_projects_into_empty_list() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"data":{"content":[]}}"#;
        let response: TaskListResponse = serde_json::from_str(json)?;
        assert!(response.into_tasks().is_empty());
        Ok(())
    }

    #[test]
    fn create_body_carries_only_title() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&CreateTaskBody { title: "buy milk" })?;
        assert_eq!(json, r#"{"title":"buy milk"}"#);
        Ok(())
    }

    #[test]
    fn update_body_uses_is_done_key() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&UpdateTaskBody {
            title: "buy milk",
            is_done: true,
        })?;
        assert_eq!(json, r#"{"title":"buy milk","isDone":true}"#);
        Ok(())
    }
}
