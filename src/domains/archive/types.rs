use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SchoolYearTagged, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Metadata for an uploaded file. The bytes live behind `storage_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archive {
    pub id: Uuid,
    pub file_name: String,
    pub file_type: Option<String>,
    pub mime_type: Option<String>,
    pub storage_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for Archive {
    const LABEL: &'static str = "Archive";
    const TABLE: &'static str = "archives";
    type Row = ArchiveRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: ArchiveRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("file_name", self.file_name.clone().into()),
            ("file_type", self.file_type.clone().into()),
            ("mime_type", self.mime_type.clone().into()),
            ("storage_url", self.storage_url.clone().into()),
            ("uploaded_at", self.uploaded_at.into()),
            ("uploaded_by", self.uploaded_by.into()),
            ("school_year_id", self.school_year_id.into()),
        ]
    }
}

impl SchoolYearTagged for Archive {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArchive {
    pub file_name: String,
    pub file_type: Option<String>,
    pub mime_type: Option<String>,
    pub storage_url: String,
    pub uploaded_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewArchive {
    pub fn into_archive(self) -> Archive {
        Archive {
            id: Uuid::new_v4(),
            file_name: self.file_name.trim().to_string(),
            file_type: self.file_type,
            mime_type: self.mime_type,
            storage_url: self.storage_url.trim().to_string(),
            uploaded_at: Utc::now(),
            uploaded_by: self.uploaded_by,
            school_year_id: self.school_year_id,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewArchive {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("file_name", Some(self.file_name.clone()))
            .not_blank()
            .max_length(255)
            .validate()?;

        ValidationBuilder::new("storage_url", Some(self.storage_url.clone()))
            .not_blank()
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateArchive {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub mime_type: Option<String>,
    pub storage_url: Option<String>,
}

impl Patch<Archive> for UpdateArchive {
    fn apply_to(self, archive: &mut Archive) {
        if let Some(file_name) = self.file_name {
            archive.file_name = file_name;
        }
        if self.file_type.is_some() {
            archive.file_type = self.file_type;
        }
        if self.mime_type.is_some() {
            archive.mime_type = self.mime_type;
        }
        if let Some(storage_url) = self.storage_url {
            archive.storage_url = storage_url;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct ArchiveRow {
    pub id: String,
    pub file_name: String,
    pub file_type: Option<String>,
    pub mime_type: Option<String>,
    pub storage_url: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
    pub school_year_id: Option<String>,
    pub status_id: Option<String>,
}

impl ArchiveRow {
    pub fn into_entity(self) -> DomainResult<Archive> {
        Ok(Archive {
            id: parse_uuid(&self.id, "id")?,
            file_name: self.file_name,
            file_type: self.file_type,
            mime_type: self.mime_type,
            storage_url: self.storage_url,
            uploaded_at: parse_datetime(&self.uploaded_at, "uploaded_at")?,
            uploaded_by: parse_uuid(&self.uploaded_by, "uploaded_by")?,
            school_year_id: parse_optional_uuid(self.school_year_id.as_deref(), "school_year_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
