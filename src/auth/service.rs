use crate::auth::jwt::{TokenPayload, TokenService};
use crate::auth::password::PasswordService;
use crate::domains::core::StatusRegistry;
use crate::domains::user::types::UserResponse;
use crate::domains::user::UserRepository;
use crate::errors::{DomainResult, ServiceError, ServiceResult};
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Credentials DTO - used for login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("email", Some(self.email.trim().to_string()))
            .required()
            .email()
            .validate()?;

        ValidationBuilder::new("password", Some(self.password.clone()))
            .required()
            .validate()?;

        Ok(())
    }
}

/// Login result containing token and user info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

/// Checks credentials and issues tokens
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    statuses: StatusRegistry,
    password_service: Arc<dyn PasswordService>,
    token_service: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        statuses: StatusRegistry,
        password_service: Arc<dyn PasswordService>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_repo,
            statuses,
            password_service,
            token_service,
        }
    }

    /// Authenticate a user and issue a bearer token.
    ///
    /// An unknown email, a wrong password and a soft-deleted account all fail
    /// the same way so the caller cannot tell them apart.
    pub async fn login(&self, credentials: Credentials) -> ServiceResult<LoginResult> {
        credentials.validate()?;
        let email = credentials.email.trim();

        let user = match self.user_repo.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email {}", email);
                return Err(ServiceError::Authentication(INVALID_CREDENTIALS.to_string()));
            }
        };

        if !self.password_service.verify(&credentials.password, &user.password_hash)? {
            warn!("Wrong password for user {}", user.id);
            return Err(ServiceError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let deleted = self.statuses.resolve_deleted().await?;
        if user.status_id == Some(deleted) {
            warn!("Login attempt for deleted user {}", user.id);
            return Err(ServiceError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let payload = TokenPayload {
            user_id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
        };
        let (token, expires_at) = self.token_service.generate(&payload)?;

        debug!("User {} logged in", user.id);
        Ok(LoginResult {
            token,
            expires_at,
            user: user.into(),
        })
    }

    /// Check a bearer token issued by `login`.
    pub fn verify_token(&self, token: &str) -> ServiceResult<TokenPayload> {
        self.token_service.verify(token)
    }
}
