use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SchoolYearTagged, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A document filed for an intern, optionally backed by an archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub id_intern: Option<Uuid>,
    pub id_archive: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for Document {
    const LABEL: &'static str = "Document";
    const TABLE: &'static str = "documents";
    type Row = DocumentRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: DocumentRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("id_intern", self.id_intern.into()),
            ("id_archive", self.id_archive.into()),
            ("created_at", self.created_at.into()),
            ("school_year_id", self.school_year_id.into()),
        ]
    }
}

impl SchoolYearTagged for Document {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub description: Option<String>,
    pub id_intern: Option<Uuid>,
    pub id_archive: Option<Uuid>,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewDocument {
    pub fn into_document(self) -> Document {
        Document {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            id_intern: self.id_intern,
            id_archive: self.id_archive,
            created_at: Utc::now(),
            school_year_id: self.school_year_id,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewDocument {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .not_blank()
            .max_length(255)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Patch<Document> for UpdateDocument {
    fn apply_to(self, document: &mut Document) {
        if let Some(title) = self.title {
            document.title = title;
        }
        if self.description.is_some() {
            document.description = self.description;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DocumentRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub id_intern: Option<String>,
    pub id_archive: Option<String>,
    pub created_at: String,
    pub school_year_id: Option<String>,
    pub status_id: Option<String>,
}

impl DocumentRow {
    pub fn into_entity(self) -> DomainResult<Document> {
        Ok(Document {
            id: parse_uuid(&self.id, "id")?,
            title: self.title,
            description: self.description,
            id_intern: parse_optional_uuid(self.id_intern.as_deref(), "id_intern")?,
            id_archive: parse_optional_uuid(self.id_archive.as_deref(), "id_archive")?,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            school_year_id: parse_optional_uuid(self.school_year_id.as_deref(), "school_year_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
