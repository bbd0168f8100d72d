use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::auth::models::Identity;
use crate::domain::task::errors::TaskTitleError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::TaskTitle;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TaskResponseData;
use crate::inbound::http::router::AppState;

/// Create a task owned by the authenticated caller. Any `created_by` in the body is
/// ignored.
pub async fn create_task(
    State(state): State<AppState>,
    identity: Identity,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<ApiSuccess<TaskResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .task_service
        .create_task(body.try_into_command()?, identity.username)
        .await
        .map_err(ApiError::from)
        .map(|ref task| ApiSuccess::new(StatusCode::CREATED, task.into()))
}

/// HTTP request body for creating a task (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    status: String,
}

impl CreateTaskRequest {
    fn try_into_command(self) -> Result<CreateTaskCommand, TaskTitleError> {
        Ok(CreateTaskCommand {
            title: TaskTitle::new(self.title)?,
            description: self.description,
            due_date: self.due_date,
            status: self.status,
        })
    }
}

impl From<TaskTitleError> for ApiError {
    fn from(err: TaskTitleError) -> Self {
        ApiError::BadRequest(format!("Invalid title: {}", err))
    }
}
