#![allow(dead_code)]

use intern_registry_core::config::AppConfig;
use intern_registry_core::db_migration::run_migrations;
use intern_registry_core::domains::region::types::NewRegion;
use intern_registry_core::domains::region::Region;
use intern_registry_core::domains::user::types::NewUser;
use intern_registry_core::domains::user::User;
use intern_registry_core::globals::ServiceRegistry;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Fresh in-memory database with every migration applied.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    run_migrations(&pool).await.expect("migrations");
    pool
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        jwt_secret: "test-secret".to_string(),
        token_ttl_hours: 1,
        environment: "test".to_string(),
    }
}

pub async fn registry() -> (SqlitePool, ServiceRegistry) {
    let pool = test_pool().await;
    let services = ServiceRegistry::new(pool.clone(), &test_config());
    (pool, services)
}

pub fn new_user(email: &str) -> NewUser {
    NewUser {
        first_name: "Ana".to_string(),
        last_name: "Lopez".to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
        birth_date: None,
        sex: None,
        phone: None,
        role: None,
        profile_photo_id: None,
        status_id: None,
    }
}

pub async fn create_user(services: &ServiceRegistry, email: &str) -> User {
    services.users.create_user(new_user(email)).await.expect("user created")
}

pub async fn create_region(services: &ServiceRegistry, name: &str) -> Region {
    services
        .regions
        .create_region(NewRegion {
            name_region: name.to_string(),
            status_id: None,
        })
        .await
        .expect("region created")
}
