use std::time::Duration;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::bounded;
use super::StoreFailure;
use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::user::models::Username;

pub struct PostgresTaskRepository {
    pool: PgPool,
    timeout: Duration,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: String,
    due_date: Option<DateTime<Utc>>,
    status: String,
    created_by: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = TaskError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        let created_by = Username::new(row.created_by)
            .map_err(|e| TaskError::DatabaseError(format!("Stored creator is invalid: {}", e)))?;

        Ok(Task {
            id: TaskId(row.id),
            title: TaskTitle::new(row.title)?,
            description: row.description,
            due_date: row.due_date,
            status: row.status,
            created_by,
            created_at: row.created_at,
        })
    }
}

impl From<StoreFailure> for TaskError {
    fn from(failure: StoreFailure) -> Self {
        match failure {
            StoreFailure::Database(e) => TaskError::DatabaseError(e.to_string()),
            StoreFailure::Timeout(limit) => TaskError::StoreTimeout(limit.as_millis()),
        }
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        let insert = sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, due_date, status, created_by, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(task.id.0)
        .bind(task.title.as_str())
        .bind(&task.description)
        .bind(task.due_date)
        .bind(&task.status)
        .bind(task.created_by.as_str())
        .bind(task.created_at)
        .execute(&self.pool);

        bounded(self.timeout, insert).await?;

        Ok(task)
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        let select = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, due_date, status, created_by, created_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool);

        bounded(self.timeout, select)
            .await?
            .map(Task::try_from)
            .transpose()
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        let select = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, due_date, status, created_by, created_at
            FROM tasks
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool);

        bounded(self.timeout, select)
            .await?
            .into_iter()
            .map(Task::try_from)
            .collect()
    }

    async fn update(&self, id: &TaskId, changes: UpdateTaskCommand) -> Result<Task, TaskError> {
        // A NULL parameter keeps the stored column.
        let update = sqlx::query_as::<_, TaskRow>(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                due_date = COALESCE($5, due_date)
            WHERE id = $1
            RETURNING id, title, description, due_date, status, created_by, created_at
            "#,
        )
        .bind(id.0)
        .bind(changes.title.as_ref().map(TaskTitle::as_str))
        .bind(changes.description.as_deref())
        .bind(changes.status.as_deref())
        .bind(changes.due_date)
        .fetch_optional(&self.pool);

        match bounded(self.timeout, update).await? {
            Some(row) => Task::try_from(row),
            None => Err(TaskError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let delete = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool);

        let result = bounded(self.timeout, delete).await?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
