use crate::domains::core::repository::{Entity, LifecycleRepository, Patch, SchoolYearScoped};
use crate::domains::core::status::StatusRegistry;
use crate::errors::{DomainError, DomainResult};
use log::{debug, info};
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

/// Create, read, update and soft-delete for one entity kind.
///
/// States are uninitialized, active and deleted. `create` is the only way in,
/// `soft_delete` is the only way to deleted, and nothing leads back out.
pub struct LifecycleService<E, R: ?Sized> {
    repo: Arc<R>,
    statuses: StatusRegistry,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R: ?Sized> Clone for LifecycleService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            statuses: self.statuses.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E, R> LifecycleService<E, R>
where
    E: Entity,
    R: LifecycleRepository<E> + ?Sized,
{
    pub fn new(repo: Arc<R>, statuses: StatusRegistry) -> Self {
        Self {
            repo,
            statuses,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn statuses(&self) -> &StatusRegistry {
        &self.statuses
    }

    /// Persist a new record. A record without a status gets the active seed.
    pub async fn create(&self, mut entity: E) -> DomainResult<E> {
        if entity.status_id().is_none() {
            let active = self.statuses.resolve_default_active().await?;
            entity.set_status_id(active);
        }

        let saved = self.repo.save(&entity).await?;
        debug!("Created {} {}", E::LABEL, saved.id());
        Ok(saved)
    }

    /// Direct lookup in any status.
    pub async fn get(&self, id: Uuid) -> DomainResult<E> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::EntityNotFound(E::LABEL.to_string(), id))
    }

    pub async fn list(&self) -> DomainResult<Vec<E>> {
        self.repo.find_all().await
    }

    /// Merge the present fields of `patch` into the stored record.
    ///
    /// Deleted records accept updates too. The status never changes here.
    pub async fn update<P: Patch<E>>(&self, id: Uuid, patch: P) -> DomainResult<E> {
        let mut entity = self.get(id).await?;
        patch.apply_to(&mut entity);

        let updated = self.repo.update(&entity).await?;
        debug!("Updated {} {}", E::LABEL, id);
        Ok(updated)
    }

    /// Move the record to the deleted seed.
    ///
    /// A record that is already deleted is left alone. A missing seed fails
    /// with `Configuration`.
    pub async fn soft_delete(&self, id: Uuid) -> DomainResult<()> {
        let entity = self.get(id).await?;
        let deleted = self.statuses.resolve_deleted().await?;

        if entity.status_id() == Some(deleted) {
            debug!("{} {} is already deleted", E::LABEL, id);
            return Ok(());
        }

        self.repo.soft_delete(id, deleted).await?;
        info!("Soft deleted {} {}", E::LABEL, id);
        Ok(())
    }

    /// Remove the row outright, bypassing the status.
    pub async fn hard_delete(&self, id: Uuid) -> DomainResult<()> {
        self.repo.delete(id).await?;
        info!("Hard deleted {} {}", E::LABEL, id);
        Ok(())
    }
}

impl<E, R> LifecycleService<E, R>
where
    E: Entity,
    R: LifecycleRepository<E> + SchoolYearScoped<E> + ?Sized,
{
    pub async fn list_by_school_year(&self, school_year_id: Uuid) -> DomainResult<Vec<E>> {
        self.repo.find_by_school_year_id(school_year_id).await
    }
}
