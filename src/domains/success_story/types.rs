use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SchoolYearTagged, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessStory {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub id_photo: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl Entity for SuccessStory {
    const LABEL: &'static str = "SuccessStory";
    const TABLE: &'static str = "success_stories";
    type Row = SuccessStoryRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: SuccessStoryRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("id_photo", self.id_photo.into()),
            ("created_at", self.created_at.into()),
            ("created_by", self.created_by.into()),
            ("school_year_id", self.school_year_id.into()),
        ]
    }
}

impl SchoolYearTagged for SuccessStory {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSuccessStory {
    pub title: String,
    pub description: Option<String>,
    pub id_photo: Option<Uuid>,
    pub created_by: Uuid,
    pub school_year_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewSuccessStory {
    pub fn into_success_story(self) -> SuccessStory {
        SuccessStory {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            id_photo: self.id_photo,
            created_at: Utc::now(),
            created_by: self.created_by,
            school_year_id: self.school_year_id,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewSuccessStory {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .not_blank()
            .max_length(255)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSuccessStory {
    pub title: Option<String>,
    pub description: Option<String>,
    pub id_photo: Option<Uuid>,
}

impl Patch<SuccessStory> for UpdateSuccessStory {
    fn apply_to(self, story: &mut SuccessStory) {
        if let Some(title) = self.title {
            story.title = title;
        }
        if self.description.is_some() {
            story.description = self.description;
        }
        if self.id_photo.is_some() {
            story.id_photo = self.id_photo;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct SuccessStoryRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub id_photo: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub school_year_id: Option<String>,
    pub status_id: Option<String>,
}

impl SuccessStoryRow {
    pub fn into_entity(self) -> DomainResult<SuccessStory> {
        Ok(SuccessStory {
            id: parse_uuid(&self.id, "id")?,
            title: self.title,
            description: self.description,
            id_photo: parse_optional_uuid(self.id_photo.as_deref(), "id_photo")?,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            created_by: parse_uuid(&self.created_by, "created_by")?,
            school_year_id: parse_optional_uuid(self.school_year_id.as_deref(), "school_year_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
