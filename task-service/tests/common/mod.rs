#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header;
use axum::http::Method;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chrono::Duration;
use http_body_util::BodyExt;
use serde_json::json;
use serde_json::Value;
use task_service::domain::auth::ports::TokenService;
use task_service::domain::task::errors::TaskError;
use task_service::domain::task::models::Task;
use task_service::domain::task::models::TaskId;
use task_service::domain::task::models::UpdateTaskCommand;
use task_service::domain::task::ports::TaskRepository;
use task_service::domain::task::service::TaskService;
use task_service::domain::user::errors::UserError;
use task_service::domain::user::models::Role;
use task_service::domain::user::models::User;
use task_service::domain::user::models::Username;
use task_service::domain::user::ports::UserRepository;
use task_service::domain::user::service::UserService;
use task_service::inbound::http::router::create_router;
use task_service::outbound::security::Argon2CredentialHasher;
use task_service::outbound::security::JwtTokenService;
use tower::util::ServiceExt;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// User store kept in memory, keyed by username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(user.username.as_str()) {
            return Err(UserError::UsernameAlreadyExists(user.username.to_string()));
        }
        users.insert(user.username.to_string(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(username.as_str()).cloned())
    }
}

/// Task store kept in memory, in insertion order.
#[derive(Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|task| task.id == *id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn update(&self, id: &TaskId, changes: UpdateTaskCommand) -> Result<Task, TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|existing| existing.id == *id) {
            Some(existing) => {
                existing.apply(changes);
                Ok(existing.clone())
            }
            None => Err(TaskError::NotFound(id.to_string())),
        }
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|task| task.id != *id);
        if tasks.len() == before {
            return Err(TaskError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

/// Task store whose every call exceeds its time budget.
pub struct UnavailableTaskRepository;

#[async_trait]
impl TaskRepository for UnavailableTaskRepository {
    async fn create(&self, _task: Task) -> Result<Task, TaskError> {
        Err(TaskError::StoreTimeout(5000))
    }

    async fn find_by_id(&self, _id: &TaskId) -> Result<Option<Task>, TaskError> {
        Err(TaskError::StoreTimeout(5000))
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        Err(TaskError::StoreTimeout(5000))
    }

    async fn update(
        &self,
        _id: &TaskId,
        _changes: UpdateTaskCommand,
    ) -> Result<Task, TaskError> {
        Err(TaskError::StoreTimeout(5000))
    }

    async fn delete(&self, _id: &TaskId) -> Result<(), TaskError> {
        Err(TaskError::StoreTimeout(5000))
    }
}

/// In-memory task store that takes a while to answer every call.
#[derive(Default)]
pub struct SlowTaskRepository {
    inner: InMemoryTaskRepository,
}

impl SlowTaskRepository {
    const DELAY: std::time::Duration = std::time::Duration::from_millis(50);
}

#[async_trait]
impl TaskRepository for SlowTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        tokio::time::sleep(Self::DELAY).await;
        self.inner.create(task).await
    }

    async fn find_by_id(&self, id: &TaskId) -> Result<Option<Task>, TaskError> {
        tokio::time::sleep(Self::DELAY).await;
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> Result<Vec<Task>, TaskError> {
        tokio::time::sleep(Self::DELAY).await;
        self.inner.list_all().await
    }

    async fn update(&self, id: &TaskId, changes: UpdateTaskCommand) -> Result<Task, TaskError> {
        tokio::time::sleep(Self::DELAY).await;
        self.inner.update(id, changes).await
    }

    async fn delete(&self, id: &TaskId) -> Result<(), TaskError> {
        tokio::time::sleep(Self::DELAY).await;
        self.inner.delete(id).await
    }
}

/// Router wired to in-memory stores and real hashing and token services.
pub struct TestApp {
    router: Router,
    pub tokens: Arc<JwtTokenService>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_task_repository(InMemoryTaskRepository::default())
    }

    pub fn with_task_repository<TR: TaskRepository>(task_repository: TR) -> Self {
        let tokens = Arc::new(JwtTokenService::with_expiration_hours(JWT_SECRET, 24));

        let user_service = Arc::new(UserService::new(
            Arc::new(InMemoryUserRepository::default()),
            Arc::new(Argon2CredentialHasher::new()),
            Arc::clone(&tokens),
        ));
        let task_service = Arc::new(TaskService::new(Arc::new(task_repository)));

        let router = create_router(user_service, task_service, tokens.clone());

        Self { router, tokens }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, None, Some(body)).await
    }

    pub async fn get_authenticated(&self, path: &str, token: &str) -> TestResponse {
        self.request(Method::GET, path, Some(&bearer(token)), None)
            .await
    }

    pub async fn post_authenticated(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.request(Method::POST, path, Some(&bearer(token)), Some(body))
            .await
    }

    pub async fn put_authenticated(&self, path: &str, token: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, path, Some(&bearer(token)), Some(body))
            .await
    }

    pub async fn delete_authenticated(&self, path: &str, token: &str) -> TestResponse {
        self.request(Method::DELETE, path, Some(&bearer(token)), None)
            .await
    }

    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/users/register",
            json!({ "username": username, "password": password }),
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.post(
            "/users/login",
            json!({ "username": username, "password": password }),
        )
        .await
    }

    /// Register then log in, returning the issued token.
    pub async fn register_and_login(&self, username: &str, password: &str) -> String {
        let registered = self.register(username, password).await;
        assert_eq!(registered.status, StatusCode::CREATED);

        let logged_in = self.login(username, password).await;
        assert_eq!(logged_in.status, StatusCode::OK);

        logged_in.body["token"].as_str().unwrap().to_string()
    }

    /// Token for an arbitrary identity, bypassing registration.
    pub fn token_for(&self, username: &str, role: Role) -> String {
        self.tokens
            .issue(&Username::new(username.to_string()).unwrap(), role)
            .unwrap()
    }

    /// Correctly signed token whose validity window has already closed.
    pub fn expired_token(&self, username: &str) -> String {
        JwtTokenService::new(JWT_SECRET, Duration::hours(-1))
            .issue(&Username::new(username.to_string()).unwrap(), Role::User)
            .unwrap()
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
