pub mod database;
pub mod metrics;
pub mod repository;
pub mod seed;

pub use database::{ConnectionManager, MongoDb};
pub use self::metrics::{get_metrics, init_metrics};
pub use repository::{ContactStore, MockContactStore, MongoContactStore, ReplaceOutcome};
pub use seed::{sample_contacts, seed_contacts};
