//! Live API tests against a running server.
//!
//! Start the server, then run with: cargo test --test live_api -- --ignored

use equipment_tracker::{
    client::EquipmentClient,
    models::{CreateEquipment, UpdateEquipment},
};

const BASE_URL: &str = "http://localhost:5000/api";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_list_equipment() {
    let client = EquipmentClient::new(BASE_URL);

    let equipment = client.get_all().await.expect("Failed to list equipment");
    assert!(!equipment.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_create_update_and_delete_equipment() {
    let client = EquipmentClient::new(BASE_URL);

    // Create
    let created = client
        .create(&CreateEquipment {
            name: Some("Test Vessel".to_string()),
            equipment_type: Some("Vessel".to_string()),
            status: Some("Active".to_string()),
            last_cleaned: Some("2025-01-01".to_string()),
        })
        .await
        .expect("Failed to create equipment");
    assert_eq!(created.name.as_deref(), Some("Test Vessel"));

    // Update
    let updated = client
        .update(
            created.id,
            &UpdateEquipment {
                name: Some("Test Vessel".to_string()),
                status: Some("Inactive".to_string()),
                ..UpdateEquipment::default()
            },
        )
        .await
        .expect("Failed to update equipment");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.status.as_deref(), Some("Inactive"));

    // Delete
    client
        .remove(created.id)
        .await
        .expect("Failed to delete equipment");

    let err = client.get_by_id(created.id).await.unwrap_err();
    assert!(matches!(
        err,
        equipment_tracker::client::ClientError::Api { .. }
    ));
}

#[tokio::test]
#[ignore]
async fn test_create_with_missing_fields_fails() {
    let client = EquipmentClient::new(BASE_URL);

    let err = client
        .create(&CreateEquipment {
            name: Some("Incomplete".to_string()),
            equipment_type: None,
            status: None,
            last_cleaned: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        equipment_tracker::client::ClientError::Api { .. }
    ));
}
