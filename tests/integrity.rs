mod common;

use intern_registry_core::domains::coordinator::types::NewCoordinator;
use intern_registry_core::domains::coordinator::{Coordinator, SqliteCoordinatorRepository};
use intern_registry_core::domains::core::LifecycleRepository;
use intern_registry_core::domains::document::types::NewDocument;
use intern_registry_core::domains::intern::types::NewIntern;
use intern_registry_core::domains::photo::types::NewPhoto;
use intern_registry_core::domains::region::types::NewRegion;
use intern_registry_core::domains::social_facilitator::types::NewSocialFacilitator;
use intern_registry_core::domains::subproject::types::{NewSubproject, UpdateSubproject};
use intern_registry_core::errors::{DomainError, ServiceError};
use uuid::Uuid;

fn coordinator_for(id_user: Uuid, id_region: Uuid) -> NewCoordinator {
    NewCoordinator {
        id_user,
        id_region,
        status_id: None,
    }
}

#[tokio::test]
async fn second_live_coordinator_for_a_user_conflicts() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "coord@example.com").await;
    let region = common::create_region(&services, "Norte").await;

    services
        .coordinators
        .create_coordinator(coordinator_for(user.id, region.id))
        .await
        .unwrap();

    let err = services
        .coordinators
        .create_coordinator(coordinator_for(user.id, region.id))
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::Conflict(msg)) => {
            assert_eq!(msg, format!("User with ID {} is already a coordinator", user.id));
        }
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn soft_deleted_coordinator_frees_the_user() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "again@example.com").await;
    let region = common::create_region(&services, "Sur").await;

    let first = services
        .coordinators
        .create_coordinator(coordinator_for(user.id, region.id))
        .await
        .unwrap();
    services.coordinators.delete_coordinator(first.id).await.unwrap();

    let second = services
        .coordinators
        .create_coordinator(coordinator_for(user.id, region.id))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let live = services.coordinators.find_coordinators_by_user_id(user.id).await.unwrap();
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, second.id);
}

#[tokio::test]
async fn existence_is_checked_before_uniqueness() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "order@example.com").await;
    let region = common::create_region(&services, "Centro").await;
    services
        .coordinators
        .create_coordinator(coordinator_for(user.id, region.id))
        .await
        .unwrap();

    // Duplicate user and a missing region: the missing region is reported.
    let missing_region = Uuid::new_v4();
    let err = services
        .coordinators
        .create_coordinator(coordinator_for(user.id, missing_region))
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::EntityNotFound(label, id)) => {
            assert_eq!(label, "Region");
            assert_eq!(id, missing_region);
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_user_is_reported_first() {
    let (_pool, services) = common::registry().await;
    let missing_user = Uuid::new_v4();

    let err = services
        .coordinators
        .create_coordinator(coordinator_for(missing_user, Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::EntityNotFound(ref label, id)) if label == "User" && id == missing_user
    ));
}

#[tokio::test]
async fn subproject_with_missing_region_is_rejected() {
    let (_pool, services) = common::registry().await;
    let missing = Uuid::new_v4();

    // Facilitator and coordinator are missing too; the region check runs first.
    let err = services
        .subprojects
        .create_subproject(NewSubproject {
            name_subproject: "Huertos".to_string(),
            id_region: Some(missing),
            id_social_facilitator: Some(Uuid::new_v4()),
            id_coordinator: Some(Uuid::new_v4()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::EntityNotFound(label, id)) => {
            assert_eq!(label, "Region");
            assert_eq!(id, missing);
        }
        other => panic!("expected not found, got {:?}", other),
    }
    assert!(services.subprojects.list_subprojects().await.unwrap().is_empty());
}

#[tokio::test]
async fn coordinator_leads_one_live_subproject() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "lead@example.com").await;
    let region = common::create_region(&services, "Valle").await;
    let coordinator = services
        .coordinators
        .create_coordinator(coordinator_for(user.id, region.id))
        .await
        .unwrap();

    let first = services
        .subprojects
        .create_subproject(NewSubproject {
            name_subproject: "Huertos".to_string(),
            id_region: Some(region.id),
            id_coordinator: Some(coordinator.id),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = services
        .subprojects
        .create_subproject(NewSubproject {
            name_subproject: "Talleres".to_string(),
            id_coordinator: Some(coordinator.id),
            ..Default::default()
        })
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::Conflict(msg)) => assert_eq!(
            msg,
            format!("Coordinator with ID {} is already assigned to another subproject", coordinator.id)
        ),
        other => panic!("expected conflict, got {:?}", other),
    }

    // Clearing references is allowed.
    let cleared = services
        .subprojects
        .update_subproject(
            first.id,
            UpdateSubproject {
                id_region: Some(None),
                id_coordinator: Some(None),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.id_region, None);
    assert_eq!(cleared.id_coordinator, None);
    assert_eq!(cleared.name_subproject, "Huertos");
}

#[tokio::test]
async fn facilitator_is_found_through_its_subproject() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "facil@example.com").await;
    let region = common::create_region(&services, "Sierra").await;
    let facilitator = services
        .social_facilitators
        .create_social_facilitator(NewSocialFacilitator {
            id_user: user.id,
            id_region: region.id,
            status_id: None,
        })
        .await
        .unwrap();

    let subproject = services
        .subprojects
        .create_subproject(NewSubproject {
            name_subproject: "Lectura".to_string(),
            id_social_facilitator: Some(facilitator.id),
            ..Default::default()
        })
        .await
        .unwrap();

    let found = services
        .social_facilitators
        .find_by_subproject_id(subproject.id)
        .await
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, facilitator.id);
}

#[tokio::test]
async fn duplicate_live_region_name_conflicts() {
    let (_pool, services) = common::registry().await;
    common::create_region(&services, "Norte").await;

    let err = services
        .regions
        .create_region(NewRegion {
            name_region: "Norte".to_string(),
            status_id: None,
        })
        .await
        .unwrap_err();
    match err {
        ServiceError::Domain(DomainError::Conflict(msg)) => {
            assert_eq!(msg, "Region with name Norte already exists")
        }
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn store_rejects_a_second_live_coordinator_written_directly() {
    let (pool, services) = common::registry().await;
    let user = common::create_user(&services, "race@example.com").await;
    let region = common::create_region(&services, "Llano").await;
    let active = services.statuses.resolve_default_active().await.unwrap();

    let repo = SqliteCoordinatorRepository::new(pool);
    let row = |id: Uuid| Coordinator {
        id,
        id_user: user.id,
        id_region: region.id,
        status_id: Some(active),
    };

    repo.save(&row(Uuid::new_v4())).await.unwrap();
    let err = repo.save(&row(Uuid::new_v4())).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)), "got {:?}", err);
}

#[tokio::test]
async fn second_live_intern_for_a_user_conflicts() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "twice@example.com").await;
    let intern = |chid: &str| NewIntern {
        chid: chid.to_string(),
        id_user: user.id,
        ..Default::default()
    };

    services.interns.create_intern(intern("CH-1")).await.unwrap();
    let err = services.interns.create_intern(intern("CH-2")).await.unwrap_err();
    match err {
        ServiceError::Domain(DomainError::Conflict(msg)) => {
            assert_eq!(msg, format!("User with ID {} is already an intern", user.id))
        }
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn document_creation_runs_no_reference_checks() {
    let (_pool, services) = common::registry().await;

    let document = services
        .documents
        .create_document(NewDocument {
            title: "Carta de aceptacion".to_string(),
            description: None,
            id_intern: None,
            id_archive: None,
            school_year_id: None,
            status_id: None,
        })
        .await
        .unwrap();
    assert!(document.status_id.is_some());
    assert_eq!(services.documents.list_documents().await.unwrap().len(), 1);
}

#[tokio::test]
async fn photo_checks_creator_then_archive() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "photog@example.com").await;
    let missing_archive = Uuid::new_v4();

    let err = services
        .photos
        .create_photo(NewPhoto {
            title: "Feria".to_string(),
            description: None,
            id_archive: Some(missing_archive),
            created_by: user.id,
            school_year_id: None,
            status_id: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::EntityNotFound(ref label, id)) if label == "Archive" && id == missing_archive
    ));
}
