pub mod contact;

pub use contact::{Contact, ContactFields};
