use axum::http::StatusCode;

use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageResponseData;

/// Public welcome banner.
pub async fn home() -> ApiSuccess<MessageResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData::new("Welcome to the Task Manager API"),
    )
}
