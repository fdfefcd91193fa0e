use crate::models::ContactFields;
use crate::services::repository::ContactStore;
use service_core::error::AppError;

fn sample(first: &str, last: &str, color: &str, birthday: &str) -> ContactFields {
    ContactFields {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        favorite_color: color.to_string(),
        birthday: birthday.to_string(),
    }
}

pub fn sample_contacts() -> Vec<ContactFields> {
    vec![
        sample("John", "Doe", "Blue", "1990-01-15"),
        sample("Jane", "Smith", "Green", "1985-05-22"),
        sample("Alice", "Johnson", "Red", "1992-09-10"),
        sample("Bob", "Wilson", "Yellow", "1988-07-03"),
        sample("Sarah", "Davis", "Purple", "1993-12-28"),
    ]
}

/// Wipes the collection and inserts the sample contacts.
/// Returns the number inserted.
pub async fn seed_contacts(store: &dyn ContactStore) -> Result<usize, AppError> {
    tracing::info!("Clearing existing contacts");
    let removed = store.delete_all().await?;
    tracing::info!(removed, "Existing contacts cleared");

    tracing::info!("Inserting sample contacts");
    let inserted = store.insert_many(sample_contacts()).await?;
    tracing::info!(inserted, "Contacts were successfully inserted");

    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::repository::MockContactStore;
    use crate::utils::is_valid_email;

    #[test]
    fn samples_are_valid_contacts() {
        let samples = sample_contacts();
        assert_eq!(samples.len(), 5);
        for contact in &samples {
            assert!(!contact.first_name.is_empty());
            assert!(!contact.last_name.is_empty());
            assert!(is_valid_email(&contact.email), "{}", contact.email);
        }
        assert_eq!(samples[0].email, "john.doe@example.com");
    }

    #[tokio::test]
    async fn seeding_replaces_existing_contacts() {
        let store = MockContactStore::new();
        store
            .insert(sample("Old", "Entry", "", ""))
            .await
            .unwrap();

        assert_eq!(seed_contacts(&store).await.unwrap(), 5);
        assert_eq!(store.len(), 5);

        // A second run clears the first run's records instead of appending.
        assert_eq!(seed_contacts(&store).await.unwrap(), 5);
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.first_name)
            .collect();
        assert_eq!(names, ["John", "Jane", "Alice", "Bob", "Sarah"]);
    }
}
