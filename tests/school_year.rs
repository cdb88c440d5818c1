mod common;

use chrono::NaiveDate;
use intern_registry_core::domains::school_year::types::{NewSchoolYear, UpdateSchoolYear};
use intern_registry_core::errors::{DomainError, ServiceError};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year(name: &str, start: NaiveDate, end: NaiveDate, is_active: bool) -> NewSchoolYear {
    NewSchoolYear {
        name: name.to_string(),
        start_date: start,
        end_date: end,
        is_active,
    }
}

#[tokio::test]
async fn create_and_fetch() {
    let (_pool, services) = common::registry().await;
    let created = services
        .school_years
        .create_school_year(year("2024-2025", date(2024, 8, 1), date(2025, 6, 30), false))
        .await
        .unwrap();

    let fetched = services.school_years.get_school_year(created.id).await.unwrap();
    assert_eq!(fetched.name, "2024-2025");
    assert_eq!(fetched.start_date, date(2024, 8, 1));
    assert_eq!(fetched.end_date, date(2025, 6, 30));
    assert!(!fetched.is_active);
}

#[tokio::test]
async fn duplicate_name_conflicts() {
    let (_pool, services) = common::registry().await;
    let new = year("2023-2024", date(2023, 8, 1), date(2024, 6, 30), false);
    services.school_years.create_school_year(new.clone()).await.unwrap();

    let err = services.school_years.create_school_year(new).await.unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Conflict(_))));
}

#[tokio::test]
async fn end_before_start_is_invalid() {
    let (_pool, services) = common::registry().await;
    let err = services
        .school_years
        .create_school_year(year("bad", date(2025, 6, 30), date(2024, 8, 1), false))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::Validation(_))));
}

#[tokio::test]
async fn active_year_prefers_latest_start() {
    let (_pool, services) = common::registry().await;
    assert!(services.school_years.get_active_school_year().await.unwrap().is_none());

    services
        .school_years
        .create_school_year(year("2023-2024", date(2023, 8, 1), date(2024, 6, 30), true))
        .await
        .unwrap();
    let latest = services
        .school_years
        .create_school_year(year("2024-2025", date(2024, 8, 1), date(2025, 6, 30), true))
        .await
        .unwrap();

    let active = services.school_years.get_active_school_year().await.unwrap().unwrap();
    assert_eq!(active.id, latest.id);
}

#[tokio::test]
async fn update_toggles_active_flag() {
    let (_pool, services) = common::registry().await;
    let created = services
        .school_years
        .create_school_year(year("2025-2026", date(2025, 8, 1), date(2026, 6, 30), false))
        .await
        .unwrap();

    let updated = services
        .school_years
        .update_school_year(
            created.id,
            UpdateSchoolYear {
                is_active: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_active);
    assert_eq!(updated.name, "2025-2026");
}
