use crate::auth::PasswordService;
use crate::domains::core::{LifecycleService, StatusRegistry};
use crate::domains::user::repository::UserRepository;
use crate::domains::user::types::{NewUser, UpdateUser, User};
use crate::errors::{DomainError, ServiceResult};
use crate::validation::Validate;
use log::warn;
use std::sync::Arc;
use uuid::Uuid;

/// Service for user-related operations
pub struct UserService {
    lifecycle: LifecycleService<User, dyn UserRepository>,
    password_service: Arc<dyn PasswordService>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        statuses: StatusRegistry,
        password_service: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            lifecycle: LifecycleService::new(user_repo, statuses),
            password_service,
        }
    }

    /// Create a user. The email must not belong to any existing user.
    pub async fn create_user(&self, new_user: NewUser) -> ServiceResult<User> {
        new_user.validate()?;

        let email = new_user.email.trim().to_string();
        self.ensure_email_free(&email, None).await?;

        let password_hash = self.password_service.hash(&new_user.password)?;
        let user = self.lifecycle.create(new_user.into_user(password_hash)).await?;
        Ok(user)
    }

    pub async fn update_user(&self, id: Uuid, update: UpdateUser) -> ServiceResult<User> {
        update.validate()?;

        if let Some(email) = &update.email {
            self.ensure_email_free(email.trim(), Some(id)).await?;
        }

        let mut update = update;
        if let Some(password) = update.password.take() {
            update.password = Some(self.password_service.hash(&password)?);
        }

        let user = self.lifecycle.update(id, update).await?;
        Ok(user)
    }

    pub async fn delete_user(&self, id: Uuid) -> ServiceResult<()> {
        self.lifecycle.soft_delete(id).await?;
        Ok(())
    }

    /// Permanent delete. Fails while other records still reference the user.
    pub async fn hard_delete_user(&self, id: Uuid) -> ServiceResult<()> {
        self.lifecycle.hard_delete(id).await?;
        Ok(())
    }

    pub async fn get_user(&self, id: Uuid) -> ServiceResult<User> {
        Ok(self.lifecycle.get(id).await?)
    }

    pub async fn list_users(&self) -> ServiceResult<Vec<User>> {
        Ok(self.lifecycle.list().await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> ServiceResult<Option<User>> {
        Ok(self.lifecycle.repository().find_by_email(email.trim()).await?)
    }

    async fn ensure_email_free(&self, email: &str, exclude_id: Option<Uuid>) -> ServiceResult<()> {
        if let Some(existing) = self.lifecycle.repository().find_by_email(email).await? {
            if Some(existing.id) != exclude_id {
                warn!("Rejected duplicate email {}", email);
                return Err(DomainError::Conflict(format!("User with email {} already exists", email)).into());
            }
        }
        Ok(())
    }
}
