pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use once_cell::sync::Lazy;
use std::sync::Arc;
use std::time::Instant;
use utoipa::openapi::server::ServerBuilder;
use utoipa::OpenApi;

use crate::config::ContactsConfig;
use crate::services::ContactStore;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact API",
        description = "A RESTful API for managing contact information. Provides full CRUD operations for contacts stored in MongoDB.",
        contact(name = "API Support", email = "support@contactapi.com")
    ),
    paths(
        handlers::health::root,
        handlers::health::health_check,
        handlers::contacts::list_contacts,
        handlers::contacts::get_contact,
        handlers::contacts::create_contact,
        handlers::contacts::update_contact,
        handlers::contacts::delete_contact,
    ),
    components(
        schemas(
            dtos::Contact,
            dtos::ContactPayload,
            dtos::CreatedResponse,
            dtos::MessageResponse,
            dtos::ErrorResponse,
            dtos::HealthResponse,
        )
    ),
    tags(
        (name = "Contacts", description = "Operations related to contacts"),
        (name = "Health Check", description = "Service liveness"),
    )
)]
pub struct ApiDoc;

/// OpenAPI document advertising `public_url` as its server.
pub fn api_doc(public_url: &str) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.servers = Some(vec![ServerBuilder::new()
        .url(public_url)
        .description(Some("Main API Server"))
        .build()]);
    doc
}

/// Set on first access. Binaries force it before anything else so `/health`
/// uptime is measured from process start.
pub static PROCESS_START: Lazy<Instant> = Lazy::new(Instant::now);

#[derive(Clone)]
pub struct AppState {
    pub config: ContactsConfig,
    pub store: Arc<dyn ContactStore>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: ContactsConfig, store: Arc<dyn ContactStore>) -> Self {
        Self {
            config,
            store,
            started_at: *PROCESS_START,
        }
    }
}
