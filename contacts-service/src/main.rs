use contacts_service::config::ContactsConfig;
use contacts_service::services::{init_metrics, ConnectionManager, ContactStore, MongoContactStore};
use contacts_service::startup::Application;
use contacts_service::PROCESS_START;
use once_cell::sync::Lazy;
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::observability::{init_tracing, shutdown_tracing};
use std::sync::Arc;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    Lazy::force(&PROCESS_START);

    // Load configuration - fail fast if invalid
    let config = ContactsConfig::from_env()?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )?;

    if let Err(e) = init_metrics() {
        tracing::warn!(error = %e, "Metrics disabled");
    }

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        "Starting contacts service"
    );

    let connection = Arc::new(ConnectionManager::new());
    match &config.mongodb.uri {
        Some(uri) => {
            if let Err(e) = connection
                .initialize(uri.expose_secret(), &config.mongodb.database)
                .await
            {
                tracing::error!(error = %e, "Database connection error");
                tracing::warn!("The API will start but database operations will fail");
            }
        }
        None => {
            tracing::warn!("MONGODB_URI is not set; the API will start but database operations will fail");
        }
    }

    let store: Arc<dyn ContactStore> = Arc::new(MongoContactStore::new(connection.clone()));
    let app = Application::build(config.clone(), store).await?;

    tracing::info!(port = app.port(), "Server is listening");
    tracing::info!("API documentation available at: {}/api-docs", config.public_url);
    tracing::info!("Health check available at: {}/health", config.public_url);

    app.run_with_graceful_shutdown(shutdown_signal()).await?;

    connection.close().await;
    tracing::info!("Service shutdown complete");
    shutdown_tracing();
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
