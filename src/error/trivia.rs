use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;
use trivia_schema::ErrorEnvelope;

use crate::quiz::PaginationError;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    /// Missing or malformed request input.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The store actor could not be reached or did not reply.
    #[error("Actor error: {0}")]
    Actor(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TriviaError {
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::Validation(_) => StatusCode::BAD_REQUEST,
            TriviaError::NotFound(_) => StatusCode::NOT_FOUND,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::Database(_) | TriviaError::Actor(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Public message for the envelope. The underlying cause is only logged.
    fn public_message(&self) -> &'static str {
        match self {
            TriviaError::Validation(_) => "bad request",
            TriviaError::NotFound(_) => "resource not found",
            TriviaError::MethodNotAllowed => "Method not allowed",
            TriviaError::Database(_) | TriviaError::Actor(_) => "unprocessable",
            TriviaError::Internal(_) => "internal server error",
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.status().as_u16(), self.public_message())
    }
}

impl From<JsonRejection> for TriviaError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Includes bodies over the size limit; still the caller's fault.
            JsonRejection::BytesRejection(e) => {
                TriviaError::Validation(format!("Failed to read request body: {e}"))
            }
            other => TriviaError::Validation(other.body_text()),
        }
    }
}

impl From<QueryRejection> for TriviaError {
    fn from(rejection: QueryRejection) -> Self {
        TriviaError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for TriviaError {
    fn from(rejection: PathRejection) -> Self {
        TriviaError::Validation(rejection.body_text())
    }
}

impl From<PaginationError> for TriviaError {
    fn from(err: PaginationError) -> Self {
        TriviaError::Validation(err.to_string())
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Trivia request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Trivia request rejected");
        }

        (status, Json(self.envelope())).into_response()
    }
}
