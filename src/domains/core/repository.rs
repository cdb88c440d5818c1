use crate::domains::core::store::SqlValue;
use crate::errors::DomainResult;
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;
use uuid::Uuid;

/// Describes how a lifecycle-bearing record maps onto its table.
///
/// `columns` lists every persisted column except `id` and `status_id`, which
/// the store writes itself so a field update can never move the status.
pub trait Entity: Clone + Send + Sync + Unpin + 'static {
    /// Name used in not-found messages ("Region with id ... not found").
    const LABEL: &'static str;
    const TABLE: &'static str;

    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    fn id(&self) -> Uuid;
    fn status_id(&self) -> Option<Uuid>;
    fn set_status_id(&mut self, status_id: Uuid);

    fn from_row(row: Self::Row) -> DomainResult<Self>;
    fn columns(&self) -> Vec<(&'static str, SqlValue)>;
}

/// Marker for entities whose table carries a `school_year_id` column.
pub trait SchoolYearTagged: Entity {}

/// Trait for finding entities by ID
#[async_trait]
pub trait FindById<T>: Send + Sync {
    /// Direct lookup. Returns the record whatever its status.
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<T>>;
}

/// The contract every entity repository honours.
#[async_trait]
pub trait LifecycleRepository<T>: FindById<T> {
    /// Every live record.
    async fn find_all(&self) -> DomainResult<Vec<T>>;

    /// Insert and return the stored row.
    async fn save(&self, entity: &T) -> DomainResult<T>;

    /// Write every field except the status and return the stored row.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Move the record to the deleted status.
    async fn soft_delete(&self, id: Uuid, deleted_status_id: Uuid) -> DomainResult<()>;

    /// Remove the row entirely.
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}

#[async_trait]
pub trait SchoolYearScoped<T>: Send + Sync {
    /// Live records tagged with the given school year.
    async fn find_by_school_year_id(&self, school_year_id: Uuid) -> DomainResult<Vec<T>>;
}

/// A partial update. Fields left as `None` keep their current value.
pub trait Patch<T> {
    fn apply_to(self, target: &mut T);
}
