use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A reusable form or template file. Formats are not tied to a school year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Format {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub id_archive: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub status_id: Option<Uuid>,
}

impl Entity for Format {
    const LABEL: &'static str = "Format";
    const TABLE: &'static str = "formats";
    type Row = FormatRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: FormatRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("id_archive", self.id_archive.into()),
            ("created_at", self.created_at.into()),
            ("created_by", self.created_by.into()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFormat {
    pub title: String,
    pub description: Option<String>,
    pub id_archive: Option<Uuid>,
    pub created_by: Uuid,
    pub status_id: Option<Uuid>,
}

impl NewFormat {
    pub fn into_format(self) -> Format {
        Format {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            id_archive: self.id_archive,
            created_at: Utc::now(),
            created_by: self.created_by,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewFormat {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .not_blank()
            .max_length(255)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFormat {
    pub title: Option<String>,
    pub description: Option<String>,
    pub id_archive: Option<Uuid>,
}

impl Patch<Format> for UpdateFormat {
    fn apply_to(self, format: &mut Format) {
        if let Some(title) = self.title {
            format.title = title;
        }
        if self.description.is_some() {
            format.description = self.description;
        }
        if self.id_archive.is_some() {
            format.id_archive = self.id_archive;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct FormatRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub id_archive: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub status_id: Option<String>,
}

impl FormatRow {
    pub fn into_entity(self) -> DomainResult<Format> {
        Ok(Format {
            id: parse_uuid(&self.id, "id")?,
            title: self.title,
            description: self.description,
            id_archive: parse_optional_uuid(self.id_archive.as_deref(), "id_archive")?,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            created_by: parse_uuid(&self.created_by, "created_by")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
