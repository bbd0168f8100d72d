use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::UpdateTaskCommand;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;
use crate::user::models::Username;

/// Domain service implementation for task operations.
pub struct TaskService<TR>
where
    TR: TaskRepository,
{
    repository: Arc<TR>,
}

impl<TR> TaskService<TR>
where
    TR: TaskRepository,
{
    pub fn new(repository: Arc<TR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<TR> TaskServicePort for TaskService<TR>
where
    TR: TaskRepository,
{
    async fn list_tasks(&self) -> Result<Vec<Task>, TaskError> {
        self.repository.list_all().await
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, TaskError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskError::NotFound(id.to_string()))
    }

    async fn create_task(
        &self,
        command: CreateTaskCommand,
        created_by: Username,
    ) -> Result<Task, TaskError> {
        let task = Task {
            id: TaskId::new(),
            title: command.title,
            description: command.description,
            due_date: command.due_date,
            status: command.status,
            created_by,
            created_at: Utc::now(),
        };

        let created_task = self.repository.create(task).await?;
        tracing::info!(
            task_id = %created_task.id,
            created_by = %created_task.created_by,
            "Task created"
        );

        Ok(created_task)
    }

    async fn update_task(
        &self,
        id: &TaskId,
        command: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        if command.is_empty() {
            return Err(TaskError::NoFieldsProvided);
        }

        let updated_task = self.repository.update(id, command).await?;
        tracing::info!(task_id = %updated_task.id, "Task updated");

        Ok(updated_task)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), TaskError> {
        self.repository.delete(id).await?;
        tracing::info!(task_id = %id, "Task deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::task::models::TaskTitle;

    mock! {
        pub TestTaskRepository {}

        #[async_trait]
        impl TaskRepository for TestTaskRepository {
            async fn create(&self, task: Task) -> Result<Task, TaskError>;
            async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError>;
            async fn list_all(&self) -> Result<Vec<Task>, TaskError>;
            async fn update(&self, id: &TaskId, changes: UpdateTaskCommand) -> Result<Task, TaskError>;
            async fn delete(&self, id: &TaskId) -> Result<(), TaskError>;
        }
    }

    fn stored_task(id: TaskId) -> Task {
        Task {
            id,
            title: TaskTitle::new("Write report".to_string()).unwrap(),
            description: "Quarterly numbers".to_string(),
            due_date: None,
            status: "Pending".to_string(),
            created_by: Username::new("alice".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_task_records_creator() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_create()
            .withf(|task| task.created_by.as_str() == "alice" && task.title.as_str() == "X")
            .times(1)
            .returning(|task| Ok(task));

        let service = TaskService::new(Arc::new(repository));
        let command = CreateTaskCommand {
            title: TaskTitle::new("X".to_string()).unwrap(),
            description: String::new(),
            due_date: None,
            status: "Pending".to_string(),
        };

        let task = service
            .create_task(command, Username::new("alice".to_string()).unwrap())
            .await
            .unwrap();

        assert_eq!(task.created_by.as_str(), "alice");
        assert_eq!(task.status, "Pending");
    }

    #[tokio::test]
    async fn test_get_task_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = TaskService::new(Arc::new(repository));
        let result = service.get_task(&TaskId::new()).await;

        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_task_timeout_is_not_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_find_by_id()
            .returning(|_| Err(TaskError::StoreTimeout(5000)));

        let service = TaskService::new(Arc::new(repository));
        let result = service.get_task(&TaskId::new()).await;

        assert!(matches!(result.unwrap_err(), TaskError::StoreTimeout(_)));
    }

    #[tokio::test]
    async fn test_update_task_without_fields_skips_store() {
        let mut repository = MockTestTaskRepository::new();

        repository.expect_update().times(0);

        let service = TaskService::new(Arc::new(repository));
        let result = service
            .update_task(&TaskId::new(), UpdateTaskCommand::default())
            .await;

        assert!(matches!(result.unwrap_err(), TaskError::NoFieldsProvided));
    }

    #[tokio::test]
    async fn test_update_task_hands_only_provided_fields_to_store() {
        let mut repository = MockTestTaskRepository::new();
        let task_id = TaskId::new();

        repository.expect_find_by_id().times(0);
        repository
            .expect_update()
            .withf(move |id, changes| {
                *id == task_id
                    && changes.status.as_deref() == Some("Done")
                    && changes.title.is_none()
                    && changes.description.is_none()
            })
            .times(1)
            .returning(|id, changes| {
                let mut task = stored_task(*id);
                task.apply(changes);
                Ok(task)
            });

        let service = TaskService::new(Arc::new(repository));
        let updated = service
            .update_task(
                &task_id,
                UpdateTaskCommand {
                    status: Some("Done".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "Done");
        assert_eq!(updated.description, "Quarterly numbers");
    }

    #[tokio::test]
    async fn test_update_missing_task() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_update()
            .returning(|id, _| Err(TaskError::NotFound(id.to_string())));

        let service = TaskService::new(Arc::new(repository));
        let result = service
            .update_task(
                &TaskId::new(),
                UpdateTaskCommand {
                    status: Some("Done".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_task_propagates_not_found() {
        let mut repository = MockTestTaskRepository::new();

        repository
            .expect_delete()
            .returning(|id| Err(TaskError::NotFound(id.to_string())));

        let service = TaskService::new(Arc::new(repository));
        let result = service.delete_task(&TaskId::new()).await;

        assert!(matches!(result.unwrap_err(), TaskError::NotFound(_)));
    }
}
