use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::user::models::Username;

/// Port for task usecases.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// List every task, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError>;

    /// Retrieve a task by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError>;

    /// Create a task owned by `created_by`.
    ///
    /// # Arguments
    /// * `command` - Validated task fields
    /// * `created_by` - Username of the authenticated caller
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn create_task(
        &self,
        command: CreateTaskCommand,
        created_by: Username,
    ) -> Result<Task, TaskError>;

    /// Apply a partial update to a task.
    ///
    /// # Returns
    /// Updated task entity
    ///
    /// # Errors
    /// * `NoFieldsProvided` - Command carries no field to update
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn update_task(&self, id: &TaskId, command: UpdateTaskCommand)
        -> Result<Task, TaskError>;

    /// Delete a task.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    /// * `DatabaseError` - Database operation failed
    /// * `StoreTimeout` - Database operation timed out
    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError>;
}

/// Persistence operations for task aggregate.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;

    async fn list_all(&self) -> Result<Vec<Task>, TaskError>;

    /// Atomically set the provided fields of an existing task and return the result.
    ///
    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn update(&self, id: &TaskId, changes: UpdateTaskCommand) -> Result<Task, TaskError>;

    /// # Errors
    /// * `NotFound` - Task does not exist
    async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
}
