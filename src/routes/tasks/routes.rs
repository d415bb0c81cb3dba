use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};

use super::dto::{TaskCreated, TaskMessage, TaskPayload};
use super::model::Task;
use super::queries;
use crate::error::ApiError;
use crate::state::AppState;

// Extractor failures are taken as `Result` so they surface as 422 with the
// same body shape as every other validation error.
fn validated(payload: Result<Json<TaskPayload>, JsonRejection>) -> Result<TaskPayload, ApiError> {
    let Json(payload) = payload?;
    payload.validate().map_err(ApiError::Validation)?;
    Ok(payload)
}

/// POST /tasks
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskCreated>, ApiError> {
    let payload = validated(payload)?;

    let task_id = queries::insert_task(&state.db, &payload).await?;
    tracing::debug!(task_id, user_id = payload.user_id, "task created");

    Ok(Json(TaskCreated {
        message: "Task created",
        task_id,
    }))
}

/// GET /tasks
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = queries::list_tasks(&state.db).await?;
    tracing::debug!(count = tasks.len(), "tasks listed");
    Ok(Json(tasks))
}

/// PUT /tasks/{task_id}
///
/// Writes first and only then checks the affected-row count; zero rows is
/// the not-found signal.
pub async fn update(
    State(state): State<AppState>,
    task_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TaskPayload>, JsonRejection>,
) -> Result<Json<TaskMessage>, ApiError> {
    let Path(task_id) = task_id?;
    let payload = validated(payload)?;

    let affected = queries::update_task(&state.db, task_id, &payload).await?;
    if affected == 0 {
        tracing::warn!(task_id, "update targeted a missing task");
        return Err(ApiError::NotFound);
    }

    tracing::debug!(task_id, "task updated");
    Ok(Json(TaskMessage {
        message: "Task updated",
    }))
}

/// DELETE /tasks/{task_id}
pub async fn delete(
    State(state): State<AppState>,
    task_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TaskMessage>, ApiError> {
    let Path(task_id) = task_id?;

    let affected = queries::delete_task(&state.db, task_id).await?;
    if affected == 0 {
        tracing::warn!(task_id, "delete targeted a missing task");
        return Err(ApiError::NotFound);
    }

    tracing::debug!(task_id, "task deleted");
    Ok(Json(TaskMessage {
        message: "Task deleted",
    }))
}
