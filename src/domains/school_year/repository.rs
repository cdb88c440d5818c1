use crate::domains::core::store::map_write_error;
use crate::domains::school_year::types::{SchoolYear, SchoolYearRow};
use crate::errors::{DbError, DomainError, DomainResult};
use crate::types::DATE_FORMAT;
use async_trait::async_trait;
use sqlx::{query, query_as, SqlitePool};
use uuid::Uuid;

#[async_trait]
pub trait SchoolYearRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<SchoolYear>>;
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<SchoolYear>>;
    /// Every year flagged active. Normally at most one.
    async fn find_active(&self) -> DomainResult<Vec<SchoolYear>>;
    async fn find_all(&self) -> DomainResult<Vec<SchoolYear>>;
    async fn save(&self, school_year: &SchoolYear) -> DomainResult<SchoolYear>;
    async fn update(&self, school_year: &SchoolYear) -> DomainResult<SchoolYear>;
}

pub struct SqliteSchoolYearRepository {
    pool: SqlitePool,
}

impl SqliteSchoolYearRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, sql: &str, bind: Option<String>) -> DomainResult<Vec<SchoolYear>> {
        let mut statement = query_as::<_, SchoolYearRow>(sql);
        if let Some(value) = bind {
            statement = statement.bind(value);
        }
        let rows = statement
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        rows.into_iter().map(SchoolYearRow::into_entity).collect()
    }

    async fn reload(&self, id: Uuid) -> DomainResult<SchoolYear> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EntityNotFound("SchoolYear".to_string(), id))
    }
}

#[async_trait]
impl SchoolYearRepository for SqliteSchoolYearRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<SchoolYear>> {
        let mut rows = self
            .fetch("SELECT * FROM school_years WHERE id = ?", Some(id.to_string()))
            .await?;
        Ok(rows.pop())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<SchoolYear>> {
        let mut rows = self
            .fetch("SELECT * FROM school_years WHERE name = ?", Some(name.to_string()))
            .await?;
        Ok(rows.pop())
    }

    async fn find_active(&self) -> DomainResult<Vec<SchoolYear>> {
        self.fetch("SELECT * FROM school_years WHERE is_active = 1 ORDER BY start_date DESC", None)
            .await
    }

    async fn find_all(&self) -> DomainResult<Vec<SchoolYear>> {
        self.fetch("SELECT * FROM school_years ORDER BY start_date DESC", None)
            .await
    }

    async fn save(&self, school_year: &SchoolYear) -> DomainResult<SchoolYear> {
        query(
            "INSERT INTO school_years (id, name, start_date, end_date, is_active, created_at)
             VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(school_year.id.to_string())
        .bind(&school_year.name)
        .bind(school_year.start_date.format(DATE_FORMAT).to_string())
        .bind(school_year.end_date.format(DATE_FORMAT).to_string())
        .bind(school_year.is_active)
        .bind(school_year.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("SchoolYear", e))?;

        self.reload(school_year.id).await
    }

    async fn update(&self, school_year: &SchoolYear) -> DomainResult<SchoolYear> {
        let result = query(
            "UPDATE school_years SET name = ?, start_date = ?, end_date = ?, is_active = ? WHERE id = ?"
        )
        .bind(&school_year.name)
        .bind(school_year.start_date.format(DATE_FORMAT).to_string())
        .bind(school_year.end_date.format(DATE_FORMAT).to_string())
        .bind(school_year.is_active)
        .bind(school_year.id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error("SchoolYear", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound("SchoolYear".to_string(), school_year.id));
        }
        self.reload(school_year.id).await
    }
}
