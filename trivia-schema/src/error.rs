//! Error envelope shared by every failing route.

use serde::{Deserialize, Serialize};

/// Uniform error body.
///
/// Shape: `{ "success": false, "error": 404, "message": "resource not found" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    /// HTTP status code, repeated in the body for clients that only read JSON.
    pub error: u16,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}
