use crate::domains::core::row::{parse_datetime, parse_optional_date, parse_optional_uuid, parse_uuid};
use crate::domains::core::{Entity, Patch, SqlValue};
use crate::errors::DomainResult;
use crate::types::DEFAULT_USER_ROLE;
use crate::validation::{Validate, ValidationBuilder};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Core User entity - represents a person who can sign in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Option<String>,
    pub profile_photo_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for User {
    const LABEL: &'static str = "User";
    const TABLE: &'static str = "users";
    type Row = UserRow;

    fn id(&self) -> Uuid {
        self.id
    }

    fn status_id(&self) -> Option<Uuid> {
        self.status_id
    }

    fn set_status_id(&mut self, status_id: Uuid) {
        self.status_id = Some(status_id);
    }

    fn from_row(row: UserRow) -> DomainResult<Self> {
        row.into_entity()
    }

    fn columns(&self) -> Vec<(&'static str, SqlValue)> {
        vec![
            ("first_name", self.first_name.clone().into()),
            ("last_name", self.last_name.clone().into()),
            ("birth_date", self.birth_date.into()),
            ("sex", self.sex.clone().into()),
            ("phone", self.phone.clone().into()),
            ("email", self.email.clone().into()),
            ("password_hash", self.password_hash.clone().into()),
            ("role", self.role.clone().into()),
            ("profile_photo_id", self.profile_photo_id.into()),
            ("created_at", self.created_at.into()),
        ]
    }
}

/// NewUser DTO - used when creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String, // Plain text password (will be hashed)
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub profile_photo_id: Option<Uuid>,
    pub status_id: Option<Uuid>,
}

impl NewUser {
    /// Build the entity once the password has been hashed.
    pub fn into_user(self, password_hash: String) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            birth_date: self.birth_date,
            sex: self.sex,
            phone: self.phone,
            email: self.email.trim().to_string(),
            password_hash,
            role: Some(self.role.unwrap_or_else(|| DEFAULT_USER_ROLE.to_string())),
            profile_photo_id: self.profile_photo_id,
            status_id: self.status_id,
            created_at: Utc::now(),
        }
    }
}

impl Validate for NewUser {
    fn validate(&self) -> DomainResult<()> {
        ValidationBuilder::new("first_name", Some(self.first_name.clone()))
            .not_blank()
            .max_length(100)
            .validate()?;

        ValidationBuilder::new("last_name", Some(self.last_name.clone()))
            .not_blank()
            .max_length(100)
            .validate()?;

        ValidationBuilder::new("email", Some(self.email.trim().to_string()))
            .required()
            .email()
            .validate()?;

        ValidationBuilder::new("password", Some(self.password.clone()))
            .required()
            .min_length(8)
            .validate()?;

        if let Some(phone) = &self.phone {
            ValidationBuilder::new("phone", Some(phone.clone()))
                .phone()
                .validate()?;
        }

        Ok(())
    }
}

/// UpdateUser DTO - only the present fields change
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub profile_photo_id: Option<Uuid>,
}

impl Validate for UpdateUser {
    fn validate(&self) -> DomainResult<()> {
        if let Some(email) = &self.email {
            ValidationBuilder::new("email", Some(email.trim().to_string()))
                .email()
                .validate()?;
        }

        if let Some(password) = &self.password {
            ValidationBuilder::new("password", Some(password.clone()))
                .min_length(8)
                .validate()?;
        }

        if let Some(first_name) = &self.first_name {
            ValidationBuilder::new("first_name", Some(first_name.clone()))
                .not_blank()
                .max_length(100)
                .validate()?;
        }

        if let Some(last_name) = &self.last_name {
            ValidationBuilder::new("last_name", Some(last_name.clone()))
                .not_blank()
                .max_length(100)
                .validate()?;
        }

        Ok(())
    }
}

// The service swaps `password` for its hash before the patch is applied.
impl Patch<User> for UpdateUser {
    fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = Some(birth_date);
        }
        if let Some(sex) = self.sex {
            user.sex = Some(sex);
        }
        if let Some(phone) = self.phone {
            user.phone = Some(phone);
        }
        if let Some(email) = self.email {
            user.email = email.trim().to_string();
        }
        if let Some(password_hash) = self.password {
            user.password_hash = password_hash;
        }
        if let Some(role) = self.role {
            user.role = Some(role);
        }
        if let Some(profile_photo_id) = self.profile_photo_id {
            user.profile_photo_id = Some(profile_photo_id);
        }
    }
}

/// UserRow - SQLite row representation for mapping from database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<String>,
    pub sex: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub role: Option<String>,
    pub profile_photo_id: Option<String>,
    pub status_id: Option<String>,
    pub created_at: String,
}

impl UserRow {
    /// Convert database row to domain entity
    pub fn into_entity(self) -> DomainResult<User> {
        Ok(User {
            id: parse_uuid(&self.id, "id")?,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: parse_optional_date(self.birth_date.as_deref(), "birth_date")?,
            sex: self.sex,
            phone: self.phone,
            email: self.email,
            password_hash: self.password_hash,
            role: self.role,
            profile_photo_id: parse_optional_uuid(self.profile_photo_id.as_deref(), "profile_photo_id")?,
            status_id: parse_optional_uuid(self.status_id.as_deref(), "status_id")?,
            created_at: parse_datetime(&self.created_at, "created_at")?,
        })
    }
}

/// UserResponse DTO - what callers see (no password hash)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<String>,
    pub status_id: Option<Uuid>,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role,
            status_id: user.status_id,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
