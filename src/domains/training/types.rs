use crate::domains::core::row::{parse_datetime, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Training material aimed at a given audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Training {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub id_archive: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
    pub status_id: Option<Uuid>,
}

impl Entity for Training {
    const LABEL: &'static str = "Training";
    const TABLE: &'static str = "trainings";
    type Row = TrainingRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: TrainingRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("title", self.title.clone().into()),
            ("description", self.description.clone().into()),
            ("target_audience", self.target_audience.clone().into()),
            ("id_archive", self.id_archive.into()),
            ("created_at", self.created_at.into()),
            ("created_by", self.created_by.into()),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTraining {
    pub title: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub id_archive: Option<Uuid>,
    pub created_by: Uuid,
    pub status_id: Option<Uuid>,
}

impl NewTraining {
    pub fn into_training(self) -> Training {
        Training {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            description: self.description,
            target_audience: self.target_audience,
            id_archive: self.id_archive,
            created_at: Utc::now(),
            created_by: self.created_by,
            status_id: self.status_id,
        }
    }
}

impl Validate for NewTraining {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("title", Some(self.title.clone()))
            .not_blank()
            .max_length(255)
            .validate()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTraining {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub id_archive: Option<Uuid>,
}

impl Patch<Training> for UpdateTraining {
    fn apply_to(self, training: &mut Training) {
        if let Some(title) = self.title {
            training.title = title;
        }
        if self.description.is_some() {
            training.description = self.description;
        }
        if self.target_audience.is_some() {
            training.target_audience = self.target_audience;
        }
        if self.id_archive.is_some() {
            training.id_archive = self.id_archive;
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct TrainingRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub target_audience: Option<String>,
    pub id_archive: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub status_id: Option<String>,
}

impl TrainingRow {
    pub fn into_entity(self) -> DomainResult<Training> {
        Ok(Training {
            id: parse_uuid(&self.id, "id")?,
            title: self.title,
            description: self.description,
            target_audience: self.target_audience,
            id_archive: parse_optional_uuid(self.id_archive.as_deref(), "id_archive")?,
            created_at: parse_datetime(&self.created_at, "created_at")?,
            created_by: parse_uuid(&self.created_by, "created_by")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
        })
    }
}
