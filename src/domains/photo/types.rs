use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SchoolYearTagged, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub id_archive: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for Photo {
    const LABEL: &'static str = "Photo";
    const TABLE: &'static str = "photos";
    type Row = PhotoRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: PhotoRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("id_archive", self.id_archive.into()),
            ("created_at", self.created_at.into()),
            ("created_by", self.created_by.into()),
            ("school_year_id", self.school_year_id.into()),
        ]
    }
}

impl SchoolYearTagged for Photo {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPhoto {
    pub title: String,
    pub description: Option<String>,
    pub id_archive: Option<Uuid>,
    pub created_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewPhoto {
    pub fn into_photo(self) -> Photo {
        Photo {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            id_archive: self.id_archive,
            created_at: Utc::now(),
            created_by: self.created_by,
            school_year_id: self.school_year_id,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewPhoto {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .not_blank()
            .max_length(255)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePhoto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub id_archive: Option<Uuid>,
}

impl Patch<Photo> for UpdatePhoto {
    fn apply_to(self, photo: &mut Photo) {
        if let Some(title) = self.title {
            photo.title = title;
        }
        if self.description.is_some() {
            photo.description = self.description;
        }
        if self.id_archive.is_some() {
            photo.id_archive = self.id_archive;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PhotoRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub id_archive: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub school_year_id: Option<String>,
    pub status_id: Option<String>,
}

impl PhotoRow {
    pub fn into_entity(self) -> DomainResult<Photo> {
        Ok(Photo {
            id: parse_uuid(&self.id, "id")?,
            title: self.title,
            description: self.description,
            id_archive: parse_optional_uuid(self.id_archive.as_deref(), "id_archive")?,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            created_by: parse_uuid(&self.created_by, "created_by")?,
            school_year_id: parse_optional_uuid(self.school_year_id.as_deref(), "school_year_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
