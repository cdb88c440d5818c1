use crate::errors::{DomainError, ServiceError, ServiceResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: Option<String>,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// What a verified token says about its bearer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub user_id: Uuid,
    pub email: String,
    pub role: Option<String>,
}

/// Issues and checks bearer credentials for the outer layer.
pub trait TokenService: Send + Sync {
    fn generate(&self, payload: &TokenPayload) -> ServiceResult<(String, DateTime<Utc>)>;
    fn verify(&self, token: &str) -> ServiceResult<TokenPayload>;
}

/// HS256 tokens signed with a shared secret.
pub struct JwtTokenService {
    secret: String,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            secret: secret.to_string(),
            ttl: Duration::hours(ttl_hours),
        }
    }
}

impl TokenService for JwtTokenService {
    fn generate(&self, payload: &TokenPayload) -> ServiceResult<(String, DateTime<Utc>)> {
        let now = Utc::now();
        let expiry = now + self.ttl;

        let claims = Claims {
            sub: payload.user_id.to_string(),
            email: payload.email.clone(),
            role: payload.role.clone(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ServiceError::Domain(DomainError::Internal(format!("JWT encoding error: {}", e))))?;

        Ok((token, expiry))
    }

    fn verify(&self, token: &str) -> ServiceResult<TokenPayload> {
        let token_data = jsonwebtoken::decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => ServiceError::SessionExpired,
            _ => ServiceError::Authentication(format!("Invalid token: {}", e)),
        })?;

        let claims = token_data.claims;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ServiceError::Authentication("Invalid user ID in token".to_string()))?;

        Ok(TokenPayload {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> TokenPayload {
        TokenPayload {
            user_id: Uuid::new_v4(),
            email: "ana@example.com".to_string(),
            role: Some("coordinator".to_string()),
        }
    }

    #[test]
    fn issued_token_verifies() {
        let service = JwtTokenService::new("test-secret", 24);
        let payload = payload();

        let (token, expiry) = service.generate(&payload).unwrap();
        assert!(expiry > Utc::now());
        assert_eq!(service.verify(&token).unwrap(), payload);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let issuer = JwtTokenService::new("one-secret", 24);
        let checker = JwtTokenService::new("another-secret", 24);

        let (token, _) = issuer.generate(&payload()).unwrap();
        assert!(matches!(checker.verify(&token), Err(ServiceError::Authentication(_))));
    }

    #[test]
    fn expired_token_reports_session_expired() {
        // Past the default 60s leeway
        let service = JwtTokenService::new("test-secret", -1);
        let (token, _) = service.generate(&payload()).unwrap();
        assert!(matches!(service.verify(&token), Err(ServiceError::SessionExpired)));
    }
}
