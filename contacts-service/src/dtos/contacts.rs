use crate::models::{self, ContactFields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /contacts` and `PUT /contacts/{id}`.
///
/// Every field is optional at the JSON level so that a missing required field
/// is reported as a validation error rather than a parse error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[schema(example = "John", min_length = 1, max_length = 50)]
    pub first_name: Option<String>,

    #[schema(example = "Doe", min_length = 1, max_length = 50)]
    pub last_name: Option<String>,

    #[schema(example = "john.doe@example.com", format = "email")]
    pub email: Option<String>,

    #[schema(example = "Blue", max_length = 30)]
    pub favorite_color: Option<String>,

    #[schema(example = "1990-01-15", format = "date")]
    pub birthday: Option<String>,
}

impl ContactPayload {
    /// Converts a validated payload into the stored field set.
    /// Absent optional fields become empty strings.
    pub fn into_fields(self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            favorite_color: self.favorite_color.unwrap_or_default(),
            birthday: self.birthday.unwrap_or_default(),
        }
    }
}

/// A stored contact as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    #[schema(example = "60564fcb5450ae0015b90570")]
    pub id: String,
    #[schema(example = "John")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    #[schema(example = "Blue")]
    pub favorite_color: String,
    #[schema(example = "1990-01-15")]
    pub birthday: String,
}

impl From<models::Contact> for Contact {
    fn from(contact: models::Contact) -> Self {
        Self {
            id: contact.id.to_hex(),
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            favorite_color: contact.favorite_color,
            birthday: contact.birthday,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    #[schema(example = "Contact created successfully")]
    pub message: String,
    #[schema(example = "60564fcb5450ae0015b90570")]
    pub contact_id: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Contact updated successfully")]
    pub message: String,
}
