use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SchoolYearTagged, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for Event {
    const LABEL: &'static str = "Event";
    const TABLE: &'static str = "events";
    type Row = EventRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: EventRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("created_at", self.created_at.into()),
            ("created_by", self.created_by.into()),
            ("school_year_id", self.school_year_id.into()),
        ]
    }
}

impl SchoolYearTagged for Event {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewEvent {
    pub fn into_event(self) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            created_at: Utc::now(),
            created_by: self.created_by,
            school_year_id: self.school_year_id,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewEvent {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .not_blank()
            .max_length(255)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Patch<Event> for UpdateEvent {
    fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if self.description.is_some() {
            event.description = self.description;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub school_year_id: Option<String>,
    pub status_id: Option<String>,
}

impl EventRow {
    pub fn into_entity(self) -> DomainResult<Event> {
        Ok(Event {
            id: parse_uuid(&self.id, "id")?,
            title: self.title,
            description: self.description,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            created_by: parse_uuid(&self.created_by, "created_by")?,
            school_year_id: parse_optional_uuid(self.school_year_id.as_deref(), "school_year_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
