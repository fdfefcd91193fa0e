use crate::models::{Contact, ContactFields};
use crate::services::database::{ConnectionManager, CONTACTS_COLLECTION};
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_document};
use mongodb::Collection;
use service_core::error::AppError;
use std::sync::{Arc, Mutex};

/// Result of a full replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub matched: u64,
    pub modified: u64,
}

/// Persistence for the contacts collection. Each method is one database call.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>, AppError>;
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Contact>, AppError>;
    async fn insert(&self, fields: ContactFields) -> Result<ObjectId, AppError>;
    /// Overwrites all five fields of the contact with `id`.
    async fn replace(&self, id: ObjectId, fields: ContactFields)
        -> Result<ReplaceOutcome, AppError>;
    /// Returns whether a contact was removed.
    async fn delete(&self, id: ObjectId) -> Result<bool, AppError>;
    async fn delete_all(&self) -> Result<u64, AppError>;
    async fn insert_many(&self, contacts: Vec<ContactFields>) -> Result<usize, AppError>;
}

#[derive(Clone)]
pub struct MongoContactStore {
    connection: Arc<ConnectionManager>,
}

impl MongoContactStore {
    pub fn new(connection: Arc<ConnectionManager>) -> Self {
        Self { connection }
    }

    fn contacts(&self) -> Result<Collection<Contact>, AppError> {
        Ok(self.connection.handle()?.contacts())
    }

    /// Same collection typed for writes that let the driver assign `_id`.
    fn contact_fields(&self) -> Result<Collection<ContactFields>, AppError> {
        Ok(self
            .connection
            .handle()?
            .database()
            .collection(CONTACTS_COLLECTION))
    }
}

#[async_trait]
impl ContactStore for MongoContactStore {
    async fn list(&self) -> Result<Vec<Contact>, AppError> {
        let cursor = self.contacts()?.find(None, None).await?;
        let contacts: Vec<Contact> = cursor.try_collect().await?;
        Ok(contacts)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Contact>, AppError> {
        let contact = self
            .contacts()?
            .find_one(doc! { "_id": id }, None)
            .await?;
        Ok(contact)
    }

    async fn insert(&self, fields: ContactFields) -> Result<ObjectId, AppError> {
        let result = self.contact_fields()?.insert_one(fields, None).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn replace(
        &self,
        id: ObjectId,
        fields: ContactFields,
    ) -> Result<ReplaceOutcome, AppError> {
        let update = to_document(&fields).map_err(|e| {
            AppError::InternalError(anyhow::anyhow!("Failed to serialize contact: {}", e))
        })?;
        let result = self
            .contact_fields()?
            .update_one(doc! { "_id": id }, doc! { "$set": update }, None)
            .await?;
        Ok(ReplaceOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self
            .contacts()?
            .delete_one(doc! { "_id": id }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = self.contacts()?.delete_many(doc! {}, None).await?;
        Ok(result.deleted_count)
    }

    async fn insert_many(&self, contacts: Vec<ContactFields>) -> Result<usize, AppError> {
        if contacts.is_empty() {
            return Ok(0);
        }
        let result = self.contact_fields()?.insert_many(contacts, None).await?;
        Ok(result.inserted_ids.len())
    }
}

/// In-memory store with the same matching semantics as MongoDB.
/// Keeps insertion order, like a collection scan without a sort.
pub struct MockContactStore {
    pub contacts: Mutex<Vec<Contact>>,
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockContactStore {
    pub fn new() -> Self {
        Self {
            contacts: Mutex::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Contact>>, AppError> {
        self.contacts
            .lock()
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Mock store mutex poisoned: {}", e)))
    }
}

#[async_trait]
impl ContactStore for MockContactStore {
    async fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.lock()?.clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Contact>, AppError> {
        Ok(self.lock()?.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, fields: ContactFields) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        self.lock()?.push(Contact::new(id, fields));
        Ok(id)
    }

    async fn replace(
        &self,
        id: ObjectId,
        fields: ContactFields,
    ) -> Result<ReplaceOutcome, AppError> {
        let mut contacts = self.lock()?;
        let Some(existing) = contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(ReplaceOutcome {
                matched: 0,
                modified: 0,
            });
        };
        let modified = if existing.fields() == fields {
            0
        } else {
            *existing = Contact::new(id, fields);
            1
        };
        Ok(ReplaceOutcome {
            matched: 1,
            modified,
        })
    }

    async fn delete(&self, id: ObjectId) -> Result<bool, AppError> {
        let mut contacts = self.lock()?;
        let before = contacts.len();
        contacts.retain(|c| c.id != id);
        Ok(contacts.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut contacts = self.lock()?;
        let removed = contacts.len() as u64;
        contacts.clear();
        Ok(removed)
    }

    async fn insert_many(&self, new_contacts: Vec<ContactFields>) -> Result<usize, AppError> {
        let mut contacts = self.lock()?;
        let count = new_contacts.len();
        contacts.extend(
            new_contacts
                .into_iter()
                .map(|fields| Contact::new(ObjectId::new(), fields)),
        );
        Ok(count)
    }
}
