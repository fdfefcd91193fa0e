use crate::config::ContactsConfig;
use crate::dtos::ErrorResponse;
use crate::handlers;
use crate::services::ContactStore;
use crate::{api_doc, AppState};
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    http::{header, HeaderName, Method, StatusCode},
    middleware::{from_fn, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use service_core::config::Environment;
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    tracing::{make_request_span, request_id_middleware},
};
use std::any::Any;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa_swagger_ui::SwaggerUi;

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    let environment = state.config.environment;
    let docs = SwaggerUi::new("/api-docs").url("/openapi.json", api_doc(&state.config.public_url));

    let contact_routes = Router::new()
        .route(
            "/contacts",
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/contacts/:id",
            get(handlers::get_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact)
                .fallback(handlers::route_not_found),
        );

    Router::new()
        .route("/", get(handlers::root).fallback(handlers::route_not_found))
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::route_not_found),
        )
        .route(
            "/metrics",
            get(handlers::metrics).fallback(handlers::route_not_found),
        )
        .merge(contact_routes)
        .merge(docs)
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span::<Body>))
        .layer(from_fn(request_id_middleware))
        .layer(CatchPanicLayer::custom(move |panic| {
            panic_response(panic, environment)
        }))
        .layer(from_fn(answer_options))
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ])
}

/// Any `OPTIONS` that `CorsLayer` did not treat as a preflight gets a bare 200.
async fn answer_options(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS {
        return (StatusCode::OK, "OK").into_response();
    }
    next.run(req).await
}

/// Last-resort 500 for a handler panic. Detail only leaves the process in
/// development.
fn panic_response(panic: Box<dyn Any + Send + 'static>, environment: Environment) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "Unhandled error while serving request");

    let error = if environment.is_development() {
        detail
    } else {
        "Something went wrong".to_string()
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: "Internal Server Error".to_string(),
            error: Some(error),
        }),
    )
        .into_response()
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(
        config: ContactsConfig,
        store: Arc<dyn ContactStore>,
    ) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let router = build_router(AppState::new(config, store));

        Ok(Self {
            port,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    pub async fn run_with_graceful_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(signal)
            .await
    }
}

