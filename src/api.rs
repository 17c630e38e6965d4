//! Task Service
//!
//! HTTP bindings for the remote task endpoint. `TaskService` is the seam
//! between the synchronizer and the transport; `HttpTaskService` is the
//! fetch-backed implementation.

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::{CreateTaskBody, Task, TaskListResponse, UpdateTaskBody};
use crate::state::Filter;

/// The task endpoint is a fixed literal; there is no configuration surface.
pub const BASE_URL: &str = "http://localhost:8080";

/// Failure of one HTTP operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request could not be sent, or the response body never arrived
    /// or failed to decode.
    #[error("request failed: {0}")]
    Transport(String),
    /// A response arrived with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// The four operations the synchronizer needs from the backend.
#[allow(async_fn_in_trait)]
pub trait TaskService {
    async fn list(&self, filter: Filter) -> Result<Vec<Task>, ApiError>;
    async fn create(&self, title: &str) -> Result<(), ApiError>;
    async fn update(&self, id: u64, title: &str, done: bool) -> Result<(), ApiError>;
    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}

/// Fetch-backed task service.
#[derive(Debug, Clone, Copy)]
pub struct HttpTaskService {
    base: &'static str,
}

impl HttpTaskService {
    pub const fn new(base: &'static str) -> Self {
        Self { base }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn check(response: &gloo_net::http::Response) -> Result<(), ApiError> {
        if response.ok() {
            Ok(())
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}

impl TaskService for HttpTaskService {
    async fn list(&self, filter: Filter) -> Result<Vec<Task>, ApiError> {
        let response = Request::get(&self.url(filter.path())).send().await?;
        Self::check(&response)?;
        let body: TaskListResponse = response.json().await?;
        Ok(body.into_tasks())
    }

    async fn create(&self, title: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url("/tasks"))
            .json(&CreateTaskBody { title })?
            .send()
            .await?;
        Self::check(&response)
    }

    async fn update(&self, id: u64, title: &str, done: bool) -> Result<(), ApiError> {
        let response = Request::put(&self.url(&format!("/tasks/{id}")))
            .json(&UpdateTaskBody {
                title,
                is_done: done,
            })?
            .send()
            .await?;
        Self::check(&response)
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(&format!("/tasks/{id}")))
            .send()
            .await?;
        Self::check(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let service = HttpTaskService::new(BASE_URL);
        assert_eq!(service.url(Filter::All.path()), "http://localhost:8080/tasks");
        assert_eq!(
            service.url(Filter::Incomplete.path()),
            "http://localhost:8080/tasks/incomplete"
        );
        assert_eq!(service.url("/tasks/7"), "http://localhost:8080/tasks/7");
    }

    #[test]
    fn error_display_names_the_failure() {
        assert_eq!(
            ApiError::Transport("connection refused".to_string()).to_string(),
            "request failed: connection refused"
        );
        assert_eq!(
            ApiError::Status(500).to_string(),
            "server returned status 500"
        );
    }
}
