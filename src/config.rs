use crate::errors::{ServiceError, ServiceResult};
use std::collections::HashMap;
use std::env;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://intern_registry.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_JWT_SECRET: &str = "default-secret-key";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEFAULT_ENVIRONMENT: &str = "development";

/// Runtime settings read from the process environment (and `.env`, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> ServiceResult<Self> {
        // A missing .env file is fine; the process environment still applies.
        let _ = dotenv::dotenv();

        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Build a config from an explicit variable map. Unset keys fall back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> ServiceResult<Self> {
        let defaults = Self::default();
        let text = |key: &str, fallback: String| -> String {
            vars.get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        Ok(Self {
            database_url: text("DATABASE_URL", defaults.database_url),
            max_connections: parse_var(vars, "DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            jwt_secret: text("JWT_SECRET", defaults.jwt_secret),
            token_ttl_hours: parse_var(vars, "JWT_EXPIRES_IN_HOURS", defaults.token_ttl_hours)?,
            environment: text("APP_ENV", defaults.environment),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

fn parse_var<T: FromStr>(vars: &HashMap<String, String>, key: &str, default: T) -> ServiceResult<T> {
    match vars.get(key).map(|value| value.trim()) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|_| {
            ServiceError::Configuration(format!("{} must be a number, got '{}'", key, raw))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_vars(&HashMap::new()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.token_ttl_hours, 24);
        assert!(!config.is_production());
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_vars(&vars(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_EXPIRES_IN_HOURS", "1"),
            ("APP_ENV", "Production"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.token_ttl_hours, 1);
        assert!(config.is_production());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = AppConfig::from_vars(&vars(&[("JWT_SECRET", "  "), ("DATABASE_MAX_CONNECTIONS", "")])).unwrap();
        assert_eq!(config.jwt_secret, DEFAULT_JWT_SECRET);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn unparsable_number_is_a_configuration_error() {
        let err = AppConfig::from_vars(&vars(&[("JWT_EXPIRES_IN_HOURS", "soon")])).unwrap_err();
        match err {
            ServiceError::Configuration(msg) => assert!(msg.contains("JWT_EXPIRES_IN_HOURS")),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }
}
