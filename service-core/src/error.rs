use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(anyhow::Error),

    #[error("Not found: {0}")]
    NotFound(anyhow::Error),

    #[error("Database error: {0}")]
    DatabaseError(anyhow::Error),

    #[error("Database not initialized. Call initialize first.")]
    NotInitialized,

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

/// JSON body for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn bad_request(message: impl std::fmt::Display) -> Self {
        AppError::BadRequest(anyhow::anyhow!(message.to_string()))
    }

    pub fn not_found(message: impl std::fmt::Display) -> Self {
        AppError::NotFound(anyhow::anyhow!(message.to_string()))
    }

    /// Attaches an operation message to a persistence failure.
    ///
    /// The message becomes the response `message`; the original cause is kept
    /// as the `error` detail. Other variants pass through unchanged.
    pub fn context(self, message: &'static str) -> Self {
        match self {
            AppError::DatabaseError(err) => AppError::DatabaseError(err.context(message)),
            AppError::NotInitialized => {
                AppError::DatabaseError(anyhow::Error::new(AppError::NotInitialized).context(message))
            }
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::NotInitialized
            | AppError::InternalError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            AppError::ValidationError(errors) => ErrorBody {
                message: "Validation failed".to_string(),
                error: Some(describe_validation(errors)),
            },
            AppError::BadRequest(err) => ErrorBody {
                message: err.to_string(),
                error: None,
            },
            AppError::NotFound(err) => ErrorBody {
                message: err.to_string(),
                error: None,
            },
            AppError::DatabaseError(err) => {
                let message = if err.chain().count() > 1 {
                    err.to_string()
                } else {
                    "Database error".to_string()
                };
                ErrorBody {
                    message,
                    error: Some(err.root_cause().to_string()),
                }
            }
            AppError::NotInitialized => ErrorBody {
                message: "Database error".to_string(),
                error: Some(self.to_string()),
            },
            AppError::InternalError(_) => ErrorBody {
                message: "Internal Server Error".to_string(),
                error: None,
            },
            AppError::ConfigError(err) => ErrorBody {
                message: "Configuration error".to_string(),
                error: Some(err.to_string()),
            },
        }
    }
}

/// Flattens field errors into `field: message` pairs, sorted by field name.
fn describe_validation(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
