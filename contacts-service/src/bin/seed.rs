//! Clears the contacts collection and inserts the sample contacts.

use contacts_service::config::ContactsConfig;
use contacts_service::services::{seed_contacts, ConnectionManager, MongoContactStore};
use secrecy::ExposeSecret;
use service_core::error::AppError;
use service_core::observability::init_tracing;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ContactsConfig::from_env()?;
    init_tracing("contacts-seed", &config.log_level, None)?;

    let uri = config.mongodb.uri.as_ref().ok_or_else(|| {
        AppError::ConfigError(anyhow::anyhow!("MONGODB_URI must be set to seed the database"))
    })?;

    let connection = Arc::new(ConnectionManager::new());
    tracing::info!("Connecting to database for seeding");
    connection
        .initialize(uri.expose_secret(), &config.mongodb.database)
        .await?;

    let store = MongoContactStore::new(connection.clone());
    let result = seed_contacts(&store).await;

    connection.close().await;

    match result {
        Ok(inserted) => {
            tracing::info!(inserted, "Seeding complete");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Error during contact seeding");
            Err(e)
        }
    }
}
