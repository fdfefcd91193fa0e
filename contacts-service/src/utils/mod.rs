pub mod validation;

pub use validation::{is_valid_email, parse_contact_id, validate_contact, ValidatedJson};
