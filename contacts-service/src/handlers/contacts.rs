use crate::dtos::{self, ContactPayload, CreatedResponse, ErrorResponse, MessageResponse};
use crate::utils::{parse_contact_id, ValidatedJson};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use metrics::counter;
use service_core::error::AppError;

/// Get all contacts
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "All contacts", body = [dtos::Contact]),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn list_contacts(
    State(state): State<AppState>,
) -> Result<Json<Vec<dtos::Contact>>, AppError> {
    let contacts = state
        .store
        .list()
        .await
        .map_err(|e| e.context("Error fetching all contacts"))?;

    Ok(Json(contacts.into_iter().map(dtos::Contact::from).collect()))
}

/// Get a single contact by ID
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(
        ("id" = String, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact found", body = dtos::Contact),
        (status = 400, description = "Invalid Contact ID format", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<dtos::Contact>, AppError> {
    let id = parse_contact_id(&id)?;

    let contact = state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| e.context("Error fetching single contact"))?
        .ok_or_else(|| AppError::not_found("Contact not found"))?;

    Ok(Json(dtos::Contact::from(contact)))
}

/// Create a new contact
#[utoipa::path(
    post,
    path = "/contacts",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Contact created successfully", body = CreatedResponse),
        (status = 400, description = "Missing required field or invalid email", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ContactPayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = state
        .store
        .insert(payload.into_fields())
        .await
        .map_err(|e| e.context("Error creating contact"))?;

    counter!("contacts_created_total").increment(1);
    tracing::info!(contact_id = %id, "Contact created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Contact created successfully".to_string(),
            contact_id: id.to_hex(),
        }),
    ))
}

/// Replace all fields of an existing contact
#[utoipa::path(
    put,
    path = "/contacts/{id}",
    params(
        ("id" = String, Path, description = "Contact ID")
    ),
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Contact updated successfully", body = MessageResponse),
        (status = 400, description = "Invalid ID, missing required field or invalid email", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<ContactPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_contact_id(&id)?;

    let outcome = state
        .store
        .replace(id, payload.into_fields())
        .await
        .map_err(|e| e.context("Error updating contact"))?;

    if outcome.matched == 0 {
        return Err(AppError::not_found("Contact not found"));
    }
    if outcome.modified == 0 {
        tracing::debug!(contact_id = %id, "Update matched but changed nothing");
    }

    Ok(Json(MessageResponse {
        message: "Contact updated successfully".to_string(),
    }))
}

/// Delete a contact
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    params(
        ("id" = String, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact deleted successfully", body = MessageResponse),
        (status = 400, description = "Invalid Contact ID format", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Contacts"
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_contact_id(&id)?;

    let deleted = state
        .store
        .delete(id)
        .await
        .map_err(|e| e.context("Error deleting contact"))?;

    if !deleted {
        return Err(AppError::not_found("Contact not found"));
    }

    counter!("contacts_deleted_total").increment(1);
    tracing::info!(contact_id = %id, "Contact deleted");

    Ok(Json(MessageResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}
