mod common;

use intern_registry_core::domains::core::DELETED_STATUS_NAME;
use intern_registry_core::domains::intern::types::{NewIntern, UpdateIntern};
use intern_registry_core::domains::region::types::UpdateRegion;
use intern_registry_core::domains::subproject::types::NewSubproject;
use intern_registry_core::errors::{DomainError, ServiceError};
use uuid::Uuid;

fn new_intern(id_user: Uuid, chid: &str) -> NewIntern {
    NewIntern {
        chid: chid.to_string(),
        id_user,
        address: Some("Calle 1".to_string()),
        grade: Some("3".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_assigns_the_active_status() {
    let (_pool, services) = common::registry().await;
    let active = services.statuses.resolve_default_active().await.unwrap();

    let region = common::create_region(&services, "Centro").await;
    assert_eq!(region.status_id, Some(active));

    let user = common::create_user(&services, "ana@example.com").await;
    assert_eq!(user.status_id, Some(active));
    assert_eq!(user.role.as_deref(), Some("intern"));
}

#[tokio::test]
async fn soft_deleted_rows_leave_listings_but_stay_reachable_by_id() {
    let (_pool, services) = common::registry().await;
    let kept = common::create_region(&services, "Norte").await;
    let dropped = common::create_region(&services, "Sur").await;

    services.regions.delete_region(dropped.id).await.unwrap();

    let listed: Vec<Uuid> = services
        .regions
        .list_regions()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(listed, vec![kept.id]);

    let deleted = services.statuses.resolve_deleted().await.unwrap();
    let fetched = services.regions.get_region(dropped.id).await.unwrap();
    assert_eq!(fetched.status_id, Some(deleted));

    assert!(services.regions.find_regions_by_name("Sur").await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_only_the_supplied_fields() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "intern@example.com").await;
    let intern = services
        .interns
        .create_intern(new_intern(user.id, "CH-001"))
        .await
        .unwrap();
    assert!(intern.enrolled);

    let updated = services
        .interns
        .update_intern(
            intern.id,
            UpdateIntern {
                enrolled: Some(false),
                career_name: Some("Agronomia".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated.enrolled);
    assert_eq!(updated.career_name.as_deref(), Some("Agronomia"));
    assert_eq!(updated.address.as_deref(), Some("Calle 1"));
    assert_eq!(updated.grade.as_deref(), Some("3"));
    assert_eq!(updated.chid, "CH-001");
    assert_eq!(updated.status_id, intern.status_id);
}

#[tokio::test]
async fn soft_delete_is_idempotent() {
    let (_pool, services) = common::registry().await;
    let region = common::create_region(&services, "Este").await;

    services.regions.delete_region(region.id).await.unwrap();
    services.regions.delete_region(region.id).await.unwrap();

    let deleted = services.statuses.resolve_deleted().await.unwrap();
    let fetched = services.regions.get_region(region.id).await.unwrap();
    assert_eq!(fetched.status_id, Some(deleted));
}

#[tokio::test]
async fn soft_delete_of_unknown_id_is_not_found() {
    let (_pool, services) = common::registry().await;
    let missing = Uuid::new_v4();

    let err = services.regions.delete_region(missing).await.unwrap_err();
    match err {
        ServiceError::Domain(DomainError::EntityNotFound(label, id)) => {
            assert_eq!(label, "Region");
            assert_eq!(id, missing);
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[tokio::test]
async fn soft_delete_without_deleted_seed_fails_and_keeps_the_row_live() {
    let (pool, services) = common::registry().await;
    let region = common::create_region(&services, "Oeste").await;

    sqlx::query("DELETE FROM statuses WHERE name = ?")
        .bind(DELETED_STATUS_NAME)
        .execute(&pool)
        .await
        .unwrap();

    let err = services.regions.delete_region(region.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Configuration(_))));

    let listed = services.regions.list_regions().await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn deleted_rows_accept_updates_and_stay_deleted() {
    let (_pool, services) = common::registry().await;
    let region = common::create_region(&services, "Costa").await;
    services.regions.delete_region(region.id).await.unwrap();

    let updated = services
        .regions
        .update_region(
            region.id,
            UpdateRegion {
                name_region: Some("Costa Norte".to_string()),
            },
        )
        .await
        .unwrap();

    let deleted = services.statuses.resolve_deleted().await.unwrap();
    assert_eq!(updated.name_region, "Costa Norte");
    assert_eq!(updated.status_id, Some(deleted));
    assert!(services.regions.list_regions().await.unwrap().is_empty());
}

#[tokio::test]
async fn hard_delete_removes_the_row() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "gone@example.com").await;
    let intern = services
        .interns
        .create_intern(new_intern(user.id, "CH-002"))
        .await
        .unwrap();

    services.interns.hard_delete_intern(intern.id).await.unwrap();

    let err = services.interns.get_intern(intern.id).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::EntityNotFound(_, id)) if id == intern.id
    ));

    let again = services.interns.hard_delete_intern(intern.id).await.unwrap_err();
    assert!(matches!(again, ServiceError::Domain(DomainError::EntityNotFound(_, _))));
}

#[tokio::test]
async fn school_year_listing_is_live_only() {
    let (_pool, services) = common::registry().await;
    let year = services
        .school_years
        .create_school_year(intern_registry_core::domains::school_year::types::NewSchoolYear {
            name: "2024-2025".to_string(),
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            is_active: true,
        })
        .await
        .unwrap();

    let first = common::create_user(&services, "one@example.com").await;
    let second = common::create_user(&services, "two@example.com").await;

    let mut kept = new_intern(first.id, "CH-010");
    kept.school_year_id = Some(year.id);
    let kept = services.interns.create_intern(kept).await.unwrap();

    let mut dropped = new_intern(second.id, "CH-011");
    dropped.school_year_id = Some(year.id);
    let dropped = services.interns.create_intern(dropped).await.unwrap();
    services.interns.delete_intern(dropped.id).await.unwrap();

    let listed = services.interns.list_by_school_year(year.id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, kept.id);
}

#[tokio::test]
async fn update_cannot_move_end_date_before_stored_start_date() {
    let (_pool, services) = common::registry().await;
    let user = common::create_user(&services, "dates@example.com").await;

    let mut draft = new_intern(user.id, "CH-020");
    draft.start_date = chrono::NaiveDate::from_ymd_opt(2024, 9, 1);
    draft.end_date = chrono::NaiveDate::from_ymd_opt(2025, 6, 30);
    let intern = services.interns.create_intern(draft).await.unwrap();

    let err = services
        .interns
        .update_intern(
            intern.id,
            UpdateIntern {
                end_date: chrono::NaiveDate::from_ymd_opt(2024, 8, 1),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));

    let stored = services.interns.get_intern(intern.id).await.unwrap();
    assert_eq!(stored.end_date, chrono::NaiveDate::from_ymd_opt(2025, 6, 30));

    let moved = services
        .interns
        .update_intern(
            intern.id,
            UpdateIntern {
                start_date: chrono::NaiveDate::from_ymd_opt(2024, 7, 1),
                end_date: chrono::NaiveDate::from_ymd_opt(2024, 8, 1),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.end_date, chrono::NaiveDate::from_ymd_opt(2024, 8, 1));
}

#[tokio::test]
async fn name_search_is_live_and_literal() {
    let (_pool, services) = common::registry().await;
    let mut created = Vec::new();
    for name in ["Huertos Norte", "huertos sur", "Talleres", "Huertos_100%"] {
        let subproject = services
            .subprojects
            .create_subproject(NewSubproject {
                name_subproject: name.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        created.push(subproject);
    }
    services.subprojects.delete_subproject(created[1].id).await.unwrap();

    let names = |found: Vec<intern_registry_core::domains::subproject::Subproject>| {
        found.into_iter().map(|s| s.name_subproject).collect::<Vec<_>>()
    };

    let found = services.subprojects.find_by_name_contains("HUERTOS").await.unwrap();
    assert_eq!(names(found), vec!["Huertos Norte", "Huertos_100%"]);

    let found = services.subprojects.find_by_name_contains("_100%").await.unwrap();
    assert_eq!(names(found), vec!["Huertos_100%"]);

    let found = services.subprojects.find_by_name_contains("%").await.unwrap();
    assert_eq!(names(found), vec!["Huertos_100%"]);

    assert!(services.subprojects.find_by_name_contains("Viveros").await.unwrap().is_empty());
}
