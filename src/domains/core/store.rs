use crate::domains::core::repository::{
    Entity, FindById, LifecycleRepository, SchoolYearScoped, SchoolYearTagged,
};
use crate::domains::core::status::DELETED_STATUS_NAME;
use crate::errors::{DbError, DomainError, DomainResult};
use crate::types::DATE_FORMAT;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use sqlx::{query_as, QueryBuilder, Sqlite, SqlitePool};
use std::marker::PhantomData;
use uuid::Uuid;

/// A column value on its way into SQLite.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(Option<String>),
    Bool(Option<bool>),
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(Some(value))
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<Option<String>> for SqlValue {
    fn from(value: Option<String>) -> Self {
        SqlValue::Text(value)
    }
}

impl From<Uuid> for SqlValue {
    fn from(value: Uuid) -> Self {
        SqlValue::Text(Some(value.to_string()))
    }
}

impl From<Option<Uuid>> for SqlValue {
    fn from(value: Option<Uuid>) -> Self {
        SqlValue::Text(value.map(|id| id.to_string()))
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(Some(value))
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Text(Some(value.to_rfc3339()))
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(value: NaiveDate) -> Self {
        SqlValue::Text(Some(value.format(DATE_FORMAT).to_string()))
    }
}

impl From<Option<NaiveDate>> for SqlValue {
    fn from(value: Option<NaiveDate>) -> Self {
        SqlValue::Text(value.map(|d| d.format(DATE_FORMAT).to_string()))
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Sqlite>, value: SqlValue) {
    match value {
        SqlValue::Text(text) => builder.push_bind(text),
        SqlValue::Bool(flag) => builder.push_bind(flag),
    };
}

/// An extra predicate on a live query, written against the table alias `t`.
///
/// The bound value sits between `prefix` and `suffix`.
#[derive(Debug, Clone)]
pub struct Criterion {
    prefix: String,
    suffix: &'static str,
    value: SqlValue,
}

impl Criterion {
    /// `t.<column> = value`
    pub fn eq(column: &str, value: impl Into<SqlValue>) -> Self {
        Self {
            prefix: format!("t.{} = ", column),
            suffix: "",
            value: value.into(),
        }
    }

    pub fn custom(prefix: impl Into<String>, value: impl Into<SqlValue>, suffix: &'static str) -> Self {
        Self {
            prefix: prefix.into(),
            suffix,
            value: value.into(),
        }
    }
}

/// Map a failed write. Unique violations, including the live-uniqueness
/// triggers, become conflicts.
pub(crate) fn map_write_error(label: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() || db_err.message().contains("UNIQUE constraint failed") {
            warn!("{} write rejected by the store: {}", label, db_err.message());
            return DomainError::Conflict(format!("{} conflicts with an existing record", label));
        }
    }
    DomainError::Database(DbError::from(err))
}

/// SQLite repository shared by every entity kind.
pub struct SqliteStore<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for SqliteStore<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> SqliteStore<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn fetch_by_id(&self, id: Uuid) -> DomainResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", E::TABLE);
        let row = query_as::<_, E::Row>(&sql)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        row.map(E::from_row).transpose()
    }

    /// Rows whose status is anything but the deleted seed, optionally narrowed
    /// by one criterion. The status name is checked at query time.
    pub async fn fetch_live(&self, criterion: Option<Criterion>) -> DomainResult<Vec<E>> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!(
            "SELECT t.* FROM {} t WHERE EXISTS (SELECT 1 FROM statuses s WHERE s.id = t.status_id AND s.name <> ",
            E::TABLE
        ));
        builder.push_bind(DELETED_STATUS_NAME);
        builder.push(")");

        if let Some(criterion) = criterion {
            builder.push(" AND ");
            builder.push(criterion.prefix);
            push_value(&mut builder, criterion.value);
            builder.push(criterion.suffix);
        }
        builder.push(" ORDER BY t.rowid");

        let rows = builder
            .build_query_as::<E::Row>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        rows.into_iter().map(E::from_row).collect()
    }

    pub async fn insert(&self, entity: &E) -> DomainResult<E> {
        let columns = entity.columns();

        let mut builder = QueryBuilder::<Sqlite>::new(format!("INSERT INTO {} (id, status_id", E::TABLE));
        for (name, _) in &columns {
            builder.push(", ");
            builder.push(*name);
        }
        builder.push(") VALUES (");
        builder.push_bind(entity.id().to_string());
        builder.push(", ");
        builder.push_bind(entity.status_id().map(|id| id.to_string()));
        for (_, value) in columns {
            builder.push(", ");
            push_value(&mut builder, value);
        }
        builder.push(")");

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(E::LABEL, e))?;

        debug!("Inserted {} {}", E::LABEL, entity.id());
        self.reload(entity.id()).await
    }

    pub async fn update_row(&self, entity: &E) -> DomainResult<E> {
        let mut builder = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", E::TABLE));
        let mut first = true;
        for (name, value) in entity.columns() {
            if !first {
                builder.push(", ");
            }
            first = false;
            builder.push(name);
            builder.push(" = ");
            push_value(&mut builder, value);
        }
        builder.push(" WHERE id = ");
        builder.push_bind(entity.id().to_string());

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(E::LABEL, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound(E::LABEL.to_string(), entity.id()));
        }
        self.reload(entity.id()).await
    }

    pub async fn set_status(&self, id: Uuid, status_id: Uuid) -> DomainResult<()> {
        let sql = format!("UPDATE {} SET status_id = ? WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql)
            .bind(status_id.to_string())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(E::LABEL, e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound(E::LABEL.to_string(), id));
        }
        Ok(())
    }

    pub async fn remove(&self, id: Uuid) -> DomainResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", E::TABLE);
        let result = sqlx::query(&sql)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(DbError::from(e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::EntityNotFound(E::LABEL.to_string(), id));
        }
        Ok(())
    }

    // Store-assigned values win over what the caller sent.
    async fn reload(&self, id: Uuid) -> DomainResult<E> {
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EntityNotFound(E::LABEL.to_string(), id))
    }
}

#[async_trait]
impl<E: Entity> FindById<E> for SqliteStore<E> {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<E>> {
        self.fetch_by_id(id).await
    }
}

#[async_trait]
impl<E: Entity> LifecycleRepository<E> for SqliteStore<E> {
    async fn find_all(&self) -> DomainResult<Vec<E>> {
        self.fetch_live(None).await
    }

    async fn save(&self, entity: &E) -> DomainResult<E> {
        self.insert(entity).await
    }

    async fn update(&self, entity: &E) -> DomainResult<E> {
        self.update_row(entity).await
    }

    async fn soft_delete(&self, id: Uuid, deleted_status_id: Uuid) -> DomainResult<()> {
        self.set_status(id, deleted_status_id).await
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.remove(id).await
    }
}

#[async_trait]
impl<E: Entity + SchoolYearTagged> SchoolYearScoped<E> for SqliteStore<E> {
    async fn find_by_school_year_id(&self, school_year_id: Uuid) -> DomainResult<Vec<E>> {
        self.fetch_live(Some(Criterion::eq("school_year_id", school_year_id))).await
    }
}
