use contacts_service::models::ContactFields;
use contacts_service::services::{
    sample_contacts, seed_contacts, ConnectionManager, ContactStore, MongoContactStore,
};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

/// Connects to `MONGODB_URI` using a throwaway database.
async fn connect() -> (Arc<ConnectionManager>, MongoContactStore) {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let database = format!("contacts_test_{}", ObjectId::new().to_hex());

    let connection = Arc::new(ConnectionManager::new());
    connection
        .initialize(&uri, &database)
        .await
        .expect("Failed to connect to MongoDB");
    let store = MongoContactStore::new(connection.clone());
    (connection, store)
}

async fn teardown(connection: Arc<ConnectionManager>) {
    if let Ok(db) = connection.handle() {
        db.database().drop(None).await.ok();
    }
    connection.close().await;
}

fn john() -> ContactFields {
    ContactFields {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john@x.com".to_string(),
        favorite_color: String::new(),
        birthday: String::new(),
    }
}

#[tokio::test]
#[ignore = "Requires MongoDB at MONGODB_URI"]
async fn contact_lifecycle_against_mongodb() {
    let (connection, store) = connect().await;

    let id = store.insert(john()).await.unwrap();
    let fetched = store.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(fetched.id, id);
    assert_eq!(fetched.fields(), john());

    let mut changed = john();
    changed.favorite_color = "Blue".to_string();
    let outcome = store.replace(id, changed.clone()).await.unwrap();
    assert_eq!((outcome.matched, outcome.modified), (1, 1));

    let outcome = store.replace(id, changed.clone()).await.unwrap();
    assert_eq!((outcome.matched, outcome.modified), (1, 0));

    let outcome = store.replace(ObjectId::new(), changed).await.unwrap();
    assert_eq!(outcome.matched, 0);

    assert!(store.delete(id).await.unwrap());
    assert!(!store.delete(id).await.unwrap());
    assert!(store.find_by_id(id).await.unwrap().is_none());

    teardown(connection).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at MONGODB_URI"]
async fn seeding_resets_collection_against_mongodb() {
    let (connection, store) = connect().await;

    store.insert(john()).await.unwrap();
    assert_eq!(seed_contacts(&store).await.unwrap(), 5);
    assert_eq!(seed_contacts(&store).await.unwrap(), 5);

    let stored: Vec<ContactFields> = store
        .list()
        .await
        .unwrap()
        .iter()
        .map(|c| c.fields())
        .collect();
    assert_eq!(stored, sample_contacts());

    teardown(connection).await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at MONGODB_URI"]
async fn initialize_twice_reuses_the_connection() {
    let (connection, _store) = connect().await;
    let uri = std::env::var("MONGODB_URI").unwrap();

    let first = connection.handle().unwrap().database().name().to_string();
    let again = connection.initialize(&uri, "some_other_db").await.unwrap();
    assert_eq!(again.database().name(), first);

    teardown(connection).await;
}
