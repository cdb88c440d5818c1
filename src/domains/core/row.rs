//! Helpers for turning stored TEXT columns back into typed values.

use crate::errors::{DomainError, DomainResult};
use crate::types::DATE_FORMAT;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

pub fn parse_uuid(value: &str, field: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| DomainError::InvalidUuid(format!("{}: {}", field, value)))
}

pub fn parse_optional_uuid(value: Option<&str>, field: &str) -> DomainResult<Option<Uuid>> {
    value.map(|v| parse_uuid(v, field)).transpose()
}

pub fn parse_datetime(value: &str, field: &str) -> DomainResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DomainError::Internal(format!("Invalid date format for {}: {}", field, value)))
}

pub fn parse_date(value: &str, field: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| DomainError::Internal(format!("Invalid date format for {}: {}", field, value)))
}

pub fn parse_optional_date(value: Option<&str>, field: &str) -> DomainResult<Option<NaiveDate>> {
    value.map(|v| parse_date(v, field)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(parse_uuid("nope", "id"), Err(DomainError::InvalidUuid(_))));
        assert!(parse_date("2024/01/01", "start_date").is_err());
        assert!(parse_datetime("yesterday", "created_at").is_err());
    }

    #[test]
    fn optional_values_pass_through_none() {
        assert_eq!(parse_optional_uuid(None, "id_region").unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2024-08-26"), "start_date").unwrap(),
            NaiveDate::from_ymd_opt(2024, 8, 26)
        );
    }
}
