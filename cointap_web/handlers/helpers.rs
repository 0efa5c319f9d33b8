use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use cointap_types::{ApplicationError, StoreError};

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

/// Error wrapper for API handlers, mapping `ApplicationError` onto HTTP
/// statuses: missing records are 404, malformed requests are 400, and
/// everything else is a 500 that leaves the service running.
pub struct ApiError(ApplicationError);

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        ApiError(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            ApplicationError::Store(StoreError::PlayerNotFound(id)) => {
                tracing::debug!(player_id = id, "player not found");
                not_found("Player not found")
            }
            ApplicationError::Store(StoreError::UpgradeNotFound(id)) => {
                tracing::debug!(upgrade_id = id, "upgrade not found");
                not_found("Upgrade not found")
            }
            ApplicationError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { error: message }),
            )
                .into_response(),
            err => {
                tracing::error!("Unhandled application error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// Helper: turn a JSON body rejection into a 400 with the deserialization
/// diagnostics.
pub fn validation_error(rejection: JsonRejection) -> ApiError {
    ApiError(ApplicationError::Validation(rejection.body_text()))
}
