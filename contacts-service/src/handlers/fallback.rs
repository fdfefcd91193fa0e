use crate::dtos::ErrorResponse;
use axum::{
    http::{StatusCode, Uri},
    Json,
};

pub async fn route_not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "Route not found".to_string(),
            error: Some(format!("The requested route {} does not exist", uri)),
        }),
    )
}
