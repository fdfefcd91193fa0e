pub mod contacts;
pub mod fallback;
pub mod health;
pub mod metrics;

pub use contacts::{create_contact, delete_contact, get_contact, list_contacts, update_contact};
pub use fallback::route_not_found;
pub use health::{health_check, root};
pub use self::metrics::metrics;
