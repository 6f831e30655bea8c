use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum NamestoreError {
    #[error("json body is expected")]
    JsonBodyExpected,

    #[error("integer ID expected")]
    InvalidId,

    #[error("not found")]
    NotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for NamestoreError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            NamestoreError::JsonBodyExpected | NamestoreError::InvalidId => {
                StatusCode::BAD_REQUEST
            }
            NamestoreError::NotFound => StatusCode::NOT_FOUND,
            NamestoreError::Unauthorized => StatusCode::UNAUTHORIZED,
            NamestoreError::DatabaseError(_)
            | NamestoreError::Config(_)
            | NamestoreError::Hash(_)
            | NamestoreError::Task(_) => {
                error!(error = %self, "request failed");
                let body = ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                };
                return fault(body);
            }
            NamestoreError::Json(_) => {
                error!(error = %self, "request payload could not be used");
                let body = ApiErrorBody {
                    code: "BAD_PAYLOAD".to_string(),
                    message: "The request payload could not be processed.".to_string(),
                };
                return fault(body);
            }
        };
        // Client errors answer with the bare message as text/plain.
        (status, self.to_string()).into_response()
    }
}

fn fault(body: ApiErrorBody) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiErrorResponse { error: body }),
    )
        .into_response()
}

/// Standardized API error response body
#[derive(Serialize)]
struct ApiErrorBody {
    code: String,
    message: String,
}

#[derive(Serialize)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}
