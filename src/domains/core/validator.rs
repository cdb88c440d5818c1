//! Referential integrity checks run by create use cases before anything is written.

use crate::domains::core::repository::{Entity, FindById};
use crate::errors::{DomainError, DomainResult};
use futures::future::BoxFuture;
use log::warn;
use std::future::Future;
use uuid::Uuid;

/// Fails with `EntityNotFound(T::LABEL, id)` unless the record exists in any status.
pub async fn assert_exists<T, R>(repo: &R, id: Uuid) -> DomainResult<()>
where
    T: Entity,
    R: FindById<T> + ?Sized,
{
    match repo.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => {
            warn!("Referenced {} {} does not exist", T::LABEL, id);
            Err(DomainError::EntityNotFound(T::LABEL.to_string(), id))
        }
    }
}

/// Fails with a conflict when `lookup` yields any live record.
pub async fn assert_unique<T, F>(lookup: F, message: String) -> DomainResult<()>
where
    F: Future<Output = DomainResult<Vec<T>>>,
{
    if lookup.await?.is_empty() {
        Ok(())
    } else {
        warn!("Uniqueness check failed: {}", message);
        Err(DomainError::Conflict(message))
    }
}

/// Ordered rule list for one create request.
///
/// Existence rules run first, then uniqueness rules, one at a time in the
/// order they were added. The first failure ends the run and the remaining
/// lookups are never polled.
#[derive(Default)]
pub struct IntegrityChecks<'a> {
    existence: Vec<BoxFuture<'a, DomainResult<()>>>,
    uniqueness: Vec<BoxFuture<'a, DomainResult<()>>>,
}

impl<'a> IntegrityChecks<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists<T, R>(mut self, repo: &'a R, id: Uuid) -> Self
    where
        T: Entity,
        R: FindById<T> + ?Sized + 'a,
    {
        self.existence.push(Box::pin(assert_exists::<T, R>(repo, id)));
        self
    }

    /// Like `exists`, skipped when the reference is absent.
    pub fn exists_if_present<T, R>(self, repo: &'a R, id: Option<Uuid>) -> Self
    where
        T: Entity,
        R: FindById<T> + ?Sized + 'a,
    {
        match id {
            Some(id) => self.exists::<T, R>(repo, id),
            None => self,
        }
    }

    pub fn unique<T, F>(mut self, lookup: F, message: impl Into<String>) -> Self
    where
        T: Send + 'a,
        F: Future<Output = DomainResult<Vec<T>>> + Send + 'a,
    {
        self.uniqueness.push(Box::pin(assert_unique(lookup, message.into())));
        self
    }

    pub async fn run(self) -> DomainResult<()> {
        for check in self.existence.into_iter().chain(self.uniqueness) {
            check.await?;
        }
        Ok(())
    }
}
