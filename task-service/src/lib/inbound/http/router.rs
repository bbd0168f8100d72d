use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_task;
use super::handlers::delete_task;
use super::handlers::get_task;
use super::handlers::home;
use super::handlers::list_tasks;
use super::handlers::login;
use super::handlers::register;
use super::handlers::update_task;
use super::middleware::authenticate;
use super::middleware::require_role;
use super::middleware::AllowedRoles;
use crate::domain::auth::ports::TokenService;
use crate::domain::task::ports::TaskServicePort;
use crate::user::models::Role;
use crate::user::ports::UserServicePort;

/// Shared state for every HTTP handler.
///
/// Services are held behind their ports so the router runs unchanged over any store.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub task_service: Arc<dyn TaskServicePort>,
    pub token_service: Arc<dyn TokenService>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    task_service: Arc<dyn TaskServicePort>,
    token_service: Arc<dyn TokenService>,
) -> Router {
    let state = AppState {
        user_service,
        task_service,
        token_service,
    };

    let public_routes = Router::new()
        .route("/", get(home))
        .route("/users/register", post(register))
        .route("/users/login", post(login));

    // Layers wrap outward: authenticate runs first, then the role check.
    let protected_routes = Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:task_id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            AllowedRoles::new(vec![Role::User, Role::Admin]),
            require_role,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.token_service.clone(),
            authenticate,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
