use crate::domains::core::row::{parse_datetime, parse_uuid};
use crate::domains::core::store::map_write_error;
use crate::errors::{DbError, DomainError, DomainResult};
use crate::validation::ValidationBuilder;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::error;
use serde::{Deserialize, Serialize};
use sqlx::{query, query_as, FromRow, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

/// Seed name given to every new record unless the caller picks another status.
pub const ACTIVE_STATUS_NAME: &str = "Activo";

/// Seed name that marks a record as soft-deleted.
pub const DELETED_STATUS_NAME: &str = "Eliminado";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct StatusRow {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

impl StatusRow {
    pub fn into_entity(self) -> DomainResult<Status> {
        Ok(Status {
            id: parse_uuid(&self.id, "id")?,
            name: self.name,
            created_at: parse_datetime(&self.created_at, "created_at")?,
        })
    }
}

#[async_trait]
pub trait StatusRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Status>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Status>>;
    async fn find_all(&self) -> DomainResult<Vec<Status>>;
    async fn save(&self, status: &Status) -> DomainResult<Status>;
}

pub struct SqliteStatusRepository {
    pool: SqlitePool,
}

impl SqliteStatusRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusRepository for SqliteStatusRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Status>> {
        let row = query_as::<_, StatusRow>("SELECT * FROM statuses WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        row.map(StatusRow::into_entity).transpose()
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<Status>> {
        let row = query_as::<_, StatusRow>("SELECT * FROM statuses WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        row.map(StatusRow::into_entity).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Status>> {
        let rows = query_as::<_, StatusRow>("SELECT * FROM statuses ORDER BY created_at, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        rows.into_iter().map(StatusRow::into_entity).collect()
    }

    async fn save(&self, status: &Status) -> DomainResult<Status> {
        query("INSERT INTO statuses (id, name, created_at) VALUES (?, ?, ?)")
            .bind(status.id.to_string())
            .bind(&status.name)
            .bind(status.created_at.to_rfc3339())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error("Status", e))?;

        Ok(status.clone())
    }
}

/// Resolves status names to ids. Every call is a store round-trip.
#[derive(Clone)]
pub struct StatusRegistry {
    repo: Arc<dyn StatusRepository>,
}

impl StatusRegistry {
    pub fn new(repo: Arc<dyn StatusRepository>) -> Self {
        Self { repo }
    }

    /// Id of the "Activo" seed.
    pub async fn resolve_default_active(&self) -> DomainResult<Uuid> {
        self.resolve_seed(ACTIVE_STATUS_NAME).await
    }

    /// Id of the "Eliminado" seed.
    pub async fn resolve_deleted(&self) -> DomainResult<Uuid> {
        self.resolve_seed(DELETED_STATUS_NAME).await
    }

    pub async fn resolve_by_name(&self, name: &str) -> DomainResult<Option<Status>> {
        self.repo.find_by_name(name).await
    }

    pub async fn list_statuses(&self) -> DomainResult<Vec<Status>> {
        self.repo.find_all().await
    }

    /// Add a status. Names other than the two seeds carry no lifecycle meaning.
    pub async fn register_status(&self, name: &str) -> DomainResult<Status> {
        let name = name.trim().to_string();
        ValidationBuilder::new("name", Some(name.clone()))
            .required()
            .max_length(50)
            .validate()?;

        let status = Status {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        };
        self.repo.save(&status).await
    }

    async fn resolve_seed(&self, name: &str) -> DomainResult<Uuid> {
        match self.repo.find_by_name(name).await? {
            Some(status) => Ok(status.id),
            None => {
                error!("Status seed '{}' is missing from the store", name);
                Err(DomainError::Configuration(format!(
                    "Status '{}' is not seeded",
                    name
                )))
            }
        }
    }
}
