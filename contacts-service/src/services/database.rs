use crate::models::Contact;
use mongodb::{bson::doc, Client as MongoClient, Collection, Database};
use service_core::error::AppError;
use tokio::sync::OnceCell;

pub const CONTACTS_COLLECTION: &str = "contacts";

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    /// Builds a client and pings the server so a bad URI fails here,
    /// not on the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        let mongo = Self { client, db };
        mongo.health_check().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(mongo)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn contacts(&self) -> Collection<Contact> {
        self.db.collection(CONTACTS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

/// Owns the database handle for the life of the process.
///
/// Created empty by the entry point and shared with the repository. The first
/// successful `initialize` wins; later calls return the cached handle.
#[derive(Default)]
pub struct ConnectionManager {
    handle: OnceCell<MongoDb>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn initialize(&self, uri: &str, database: &str) -> Result<&MongoDb, AppError> {
        if let Some(db) = self.handle.get() {
            tracing::info!("Already connected to the database");
            return Ok(db);
        }
        self.handle
            .get_or_try_init(|| MongoDb::connect(uri, database))
            .await
    }

    pub fn handle(&self) -> Result<&MongoDb, AppError> {
        self.handle.get().ok_or(AppError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.initialized()
    }

    /// Shuts the client down. Operations through any clone of it fail afterwards.
    pub async fn close(&self) {
        if let Some(db) = self.handle.get() {
            tracing::info!("Closing database connection");
            db.client().clone().shutdown().await;
            tracing::info!("Database connection closed");
        }
    }
}
