use crate::domains::core::row::{parse_date, parse_datetime, parse_uuid};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An annual cycle other records can be tagged with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolYear {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchoolYear {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub is_active: bool,
}

impl NewSchoolYear {
    pub fn into_school_year(self) -> SchoolYear {
        SchoolYear {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_active: self.is_active,
            created_at: Utc::now(),
        }
    }
}

impl Validate for NewSchoolYear {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("name", Some(self.name.clone()))
            .not_blank()
            .max_length(50)
            .validate()?;

        ValidationBuilder::new("end_date", Some(self.end_date))
            .not_before(self.start_date)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSchoolYear {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

impl UpdateSchoolYear {
    pub fn apply_to(self, school_year: &mut SchoolYear) {
        if let Some(name) = self.name {
            school_year.name = name.trim().to_string();
        }
        if let Some(start_date) = self.start_date {
            school_year.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            school_year.end_date = end_date;
        }
        if let Some(is_active) = self.is_active {
            school_year.is_active = is_active;
        }
    }
}

impl Validate for UpdateSchoolYear {
    fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            ValidationBuilder::new("name", Some(name.clone()))
                .not_blank()
                .max_length(50)
                .validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SchoolYearRow {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: i64,
    pub created_at: String,
}

impl SchoolYearRow {
    pub fn into_entity(self) -> DomainResult<SchoolYear> {
        Ok(SchoolYear {
            id: parse_uuid(&self.id, "id")?,
            name: self.name,
            start_date: parse_date(&self.start_date, "start_date")?,
            end_date: parse_date(&self.end_date, "end_date")?,
            is_active: self.is_active != 0,
            created_at: parse_datetime(&self.created_at, "created_at")?,
        })
    }
}
