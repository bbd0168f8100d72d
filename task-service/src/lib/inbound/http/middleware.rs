use std::sync::Arc;

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::models::Identity;
use crate::domain::auth::ports::TokenService;
use crate::inbound::http::handlers::ApiError;
use crate::user::models::Role;

/// Middleware that validates bearer tokens and attaches the caller's `Identity` to the
/// request extensions. Requests without a valid token never reach the handler.
pub async fn authenticate(
    State(tokens): State<Arc<dyn TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let identity = tokens.validate(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    tracing::debug!(username = %identity.username, role = %identity.role, "Request authenticated");
    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, Response> {
    let auth_header = req.headers().get(header::AUTHORIZATION).ok_or_else(|| {
        ApiError::Unauthorized("Authorization header required".to_string()).into_response()
    })?;

    let invalid_format = || {
        ApiError::Unauthorized("Authorization header format must be 'Bearer <token>'".to_string())
            .into_response()
    };

    let auth_str = auth_header.to_str().map_err(|_| invalid_format())?;

    auth::parse_bearer(auth_str).map_err(|_| invalid_format())
}

/// Roles permitted past a `require_role` layer.
#[derive(Debug, Clone)]
pub struct AllowedRoles(Arc<[Role]>);

impl AllowedRoles {
    pub fn new(roles: impl Into<Vec<Role>>) -> Self {
        let roles: Vec<Role> = roles.into();
        Self(roles.into())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }
}

/// Middleware that admits only identities whose role is in `allowed`.
///
/// Must run after `authenticate`; a missing identity is a pipeline misconfiguration.
pub async fn require_role(
    State(allowed): State<AllowedRoles>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = req.extensions().get::<Identity>().ok_or_else(|| {
        tracing::error!("Role check reached without an authenticated identity");
        ApiError::internal()
    })?;

    if !allowed.contains(identity.role) {
        tracing::warn!(
            username = %identity.username,
            role = %identity.role,
            "Role not permitted for route"
        );
        return Err(ApiError::Forbidden("Insufficient permissions".to_string()));
    }

    Ok(next.run(req).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            tracing::error!("Handler requires an identity but none was attached");
            ApiError::internal()
        })
    }
}
