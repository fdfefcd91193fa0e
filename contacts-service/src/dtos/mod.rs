pub mod contacts;

pub use contacts::{Contact, ContactPayload, CreatedResponse, MessageResponse};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body shared by every failing route.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Contact not found")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "No contact found with the provided ID")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "OK")]
    pub status: String,
    #[schema(example = "2024-01-15T10:30:00.000Z")]
    pub timestamp: String,
    /// Seconds since the process started.
    #[schema(example = 123.45)]
    pub uptime: f64,
    #[schema(example = "production")]
    pub environment: String,
}
