use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mongodb::bson::oid::ObjectId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::dtos::{ContactPayload, ErrorResponse};

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Checks a create or update payload.
///
/// `firstName`, `lastName` and `email` must be present and non-blank, and
/// `email` must look like `local@domain.tld`. All failures are collected.
pub fn validate_contact(payload: &ContactPayload) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    require(&mut errors, "firstName", payload.first_name.as_deref(), "First name is required");
    require(&mut errors, "lastName", payload.last_name.as_deref(), "Last name is required");

    match payload.email.as_deref() {
        None => errors.add("email", field_error("required", "Email is required")),
        Some(email) if email.trim().is_empty() => {
            errors.add("email", field_error("required", "Email is required"))
        }
        Some(email) if !is_valid_email(email) => {
            errors.add("email", field_error("email", "Invalid email format"))
        }
        Some(_) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn require(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&str>,
    message: &'static str,
) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.add(field, field_error("required", message));
    }
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

impl Validate for ContactPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate_contact(self)
    }
}

/// Parses a path id. Anything but a 24-character hex ObjectId is a 400.
pub fn parse_contact_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::bad_request("Invalid Contact ID format"))
}

pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            let err_resp = ErrorResponse {
                message: "Invalid JSON body".to_string(),
                error: Some(e.body_text()),
            };
            (StatusCode::BAD_REQUEST, Json(err_resp)).into_response()
        })?;

        value
            .validate()
            .map_err(|e| AppError::ValidationError(e).into_response())?;

        Ok(ValidatedJson(value))
    }
}
