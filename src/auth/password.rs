use crate::errors::{DomainError, ServiceError, ServiceResult};
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
// argon2 needs the rand_core 0.6 OsRng
use rand_core::OsRng as ArgonOsRng;

/// One-way password hashing used by the user and login paths.
pub trait PasswordService: Send + Sync {
    fn hash(&self, plaintext: &str) -> ServiceResult<String>;

    /// `Ok(false)` on a mismatch. Errors only for an unreadable digest.
    fn verify(&self, plaintext: &str, digest: &str) -> ServiceResult<bool>;
}

#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordService;

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, plaintext: &str) -> ServiceResult<String> {
        let mut rng = ArgonOsRng;
        let salt = SaltString::generate(&mut rng);

        let password_hash = Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| ServiceError::Domain(DomainError::Internal(format!("Failed to hash password: {}", e))))?
            .to_string();

        Ok(password_hash)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> ServiceResult<bool> {
        let parsed_hash = PasswordHash::new(digest)
            .map_err(|_| ServiceError::Domain(DomainError::Internal("Invalid password hash format".to_string())))?;

        Ok(Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let service = Argon2PasswordService::new();
        let digest = service.hash("correct horse").unwrap();

        assert_ne!(digest, "correct horse");
        assert!(service.verify("correct horse", &digest).unwrap());
        assert!(!service.verify("wrong horse", &digest).unwrap());
    }

    #[test]
    fn salts_differ_per_hash() {
        let service = Argon2PasswordService::new();
        assert_ne!(service.hash("same").unwrap(), service.hash("same").unwrap());
    }

    #[test]
    fn garbage_digest_is_an_error() {
        let service = Argon2PasswordService::new();
        assert!(service.verify("anything", "not-a-phc-string").is_err());
    }
}
