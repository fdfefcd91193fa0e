use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The user-editable fields of a contact, exactly as stored.
///
/// Create and update both write all five fields; there is no partial form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub favorite_color: String,
    #[serde(default)]
    pub birthday: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub favorite_color: String,
    #[serde(default)]
    pub birthday: String,
}

impl Contact {
    pub fn new(id: ObjectId, fields: ContactFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            favorite_color: fields.favorite_color,
            birthday: fields.birthday,
        }
    }

    pub fn fields(&self) -> ContactFields {
        ContactFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            favorite_color: self.favorite_color.clone(),
            birthday: self.birthday.clone(),
        }
    }
}
