mod common;

use intern_registry_core::domains::core::{ACTIVE_STATUS_NAME, DELETED_STATUS_NAME};
use intern_registry_core::domains::region::types::NewRegion;
use intern_registry_core::errors::{DomainError, ServiceError};

#[tokio::test]
async fn seeded_statuses_resolve() {
    let (_pool, services) = common::registry().await;

    let active = services.statuses.resolve_default_active().await.unwrap();
    let deleted = services.statuses.resolve_deleted().await.unwrap();
    assert_ne!(active, deleted);

    let by_name = services
        .statuses
        .resolve_by_name(ACTIVE_STATUS_NAME)
        .await
        .unwrap()
        .expect("active seed present");
    assert_eq!(by_name.id, active);

    let names: Vec<String> = services
        .statuses
        .list_statuses()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert!(names.contains(&ACTIVE_STATUS_NAME.to_string()));
    assert!(names.contains(&DELETED_STATUS_NAME.to_string()));
}

#[tokio::test]
async fn missing_deleted_seed_is_a_configuration_error() {
    let (pool, services) = common::registry().await;
    sqlx::query("DELETE FROM statuses WHERE name = ?")
        .bind(DELETED_STATUS_NAME)
        .execute(&pool)
        .await
        .unwrap();

    let err = services.statuses.resolve_deleted().await.unwrap_err();
    assert!(matches!(err, DomainError::Configuration(_)));

    // The active seed is unaffected.
    assert!(services.statuses.resolve_default_active().await.is_ok());
}

#[tokio::test]
async fn missing_active_seed_fails_creation() {
    let (pool, services) = common::registry().await;
    sqlx::query("DELETE FROM statuses WHERE name = ?")
        .bind(ACTIVE_STATUS_NAME)
        .execute(&pool)
        .await
        .unwrap();

    let err = services
        .regions
        .create_region(NewRegion {
            name_region: "Norte".to_string(),
            status_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Configuration(_))));
}

#[tokio::test]
async fn extra_status_is_inert() {
    let (_pool, services) = common::registry().await;
    let archived = services.statuses.register_status("Archivado").await.unwrap();

    // A row carrying a status other than the deleted seed is still live.
    let region = services
        .regions
        .create_region(NewRegion {
            name_region: "Sur".to_string(),
            status_id: Some(archived.id),
        })
        .await
        .unwrap();
    assert_eq!(region.status_id, Some(archived.id));

    let listed = services.regions.list_regions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, region.id);
}

#[tokio::test]
async fn blank_status_name_is_rejected() {
    let (_pool, services) = common::registry().await;
    let err = services.statuses.register_status("   ").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}
