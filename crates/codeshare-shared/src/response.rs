//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const UNSUPPORTED_CATEGORY: &str = "Unsupported category";
pub const INVALID_BODY: &str = "Invalid request body";
pub const PAYLOAD_TOO_LARGE: &str = "Payload too large";
pub const CODE_NOT_FOUND: &str = "Code not found";
pub const ROUTE_NOT_FOUND: &str = "Not found";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// `{"error": "..."}` - a short, client-safe message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR)
    }
}
