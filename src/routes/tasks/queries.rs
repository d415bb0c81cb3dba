use sqlx::{Result, SqlitePool};

use super::dto::TaskPayload;
use super::model::Task;

/// Returns the store-generated `task_id`.
pub async fn insert_task(pool: &SqlitePool, task: &TaskPayload) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO tasks (title, description, status, due_date, user_id)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.status)
    .bind(&task.due_date)
    .bind(task.user_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

// No ORDER BY: rows come back in whatever order the store yields.
pub async fn list_tasks(pool: &SqlitePool) -> Result<Vec<Task>> {
    sqlx::query_as::<_, Task>(
        r#"
        SELECT task_id, title, description, status, due_date, user_id
        FROM tasks
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Overwrites all mutable columns. Returns the affected-row count.
pub async fn update_task(pool: &SqlitePool, task_id: i64, task: &TaskPayload) -> Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE tasks
        SET title = ?, description = ?, status = ?, due_date = ?, user_id = ?
        WHERE task_id = ?
        "#,
    )
    .bind(&task.title)
    .bind(&task.description)
    .bind(&task.status)
    .bind(&task.due_date)
    .bind(task.user_id)
    .bind(task_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_task(pool: &SqlitePool, task_id: i64) -> Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM tasks
        WHERE task_id = ?
        "#,
    )
    .bind(task_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
