use crate::auth::{Argon2PasswordService, AuthService, JwtTokenService, PasswordService, TokenService};
use crate::config::AppConfig;
use crate::domains::archive::{ArchiveRepository, ArchiveService, SqliteArchiveRepository};
use crate::domains::coordinator::{CoordinatorRepository, CoordinatorService, SqliteCoordinatorRepository};
use crate::domains::core::status::{SqliteStatusRepository, StatusRepository};
use crate::domains::core::StatusRegistry;
use crate::domains::document::{DocumentRepository, DocumentService, SqliteDocumentRepository};
use crate::domains::event::{EventRepository, EventService, SqliteEventRepository};
use crate::domains::event_photo::{EventPhotoRepository, EventPhotoService, SqliteEventPhotoRepository};
use crate::domains::format::{FormatRepository, FormatService, SqliteFormatRepository};
use crate::domains::intern::{InternRepository, InternService, SqliteInternRepository};
use crate::domains::photo::{PhotoRepository, PhotoService, SqlitePhotoRepository};
use crate::domains::region::{RegionRepository, RegionService, SqliteRegionRepository};
use crate::domains::report::{ReportRepository, ReportService, SqliteReportRepository};
use crate::domains::school_year::{SchoolYearRepository, SchoolYearService, SqliteSchoolYearRepository};
use crate::domains::social_facilitator::{
    SocialFacilitatorRepository, SocialFacilitatorService, SqliteSocialFacilitatorRepository,
};
use crate::domains::subproject::{SqliteSubprojectRepository, SubprojectRepository, SubprojectService};
use crate::domains::success_story::{SqliteSuccessStoryRepository, SuccessStoryRepository, SuccessStoryService};
use crate::domains::training::{SqliteTrainingRepository, TrainingRepository, TrainingService};
use crate::domains::user::{SqliteUserRepository, UserRepository, UserService};
use crate::errors::{ServiceError, ServiceResult};
use lazy_static::lazy_static;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

lazy_static! {
    static ref INIT_MUTEX: tokio::sync::Mutex<()> = tokio::sync::Mutex::new(());
    static ref INITIALIZED: AtomicBool = AtomicBool::new(false);

    static ref DB_POOL: Mutex<Option<SqlitePool>> = Mutex::new(None);
    static ref SERVICES: Mutex<Option<Arc<ServiceRegistry>>> = Mutex::new(None);
}

/// Every use-case service, wired over one pool.
pub struct ServiceRegistry {
    pub statuses: StatusRegistry,
    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub school_years: Arc<SchoolYearService>,
    pub regions: Arc<RegionService>,
    pub coordinators: Arc<CoordinatorService>,
    pub social_facilitators: Arc<SocialFacilitatorService>,
    pub interns: Arc<InternService>,
    pub subprojects: Arc<SubprojectService>,
    pub archives: Arc<ArchiveService>,
    pub documents: Arc<DocumentService>,
    pub events: Arc<EventService>,
    pub photos: Arc<PhotoService>,
    pub event_photos: Arc<EventPhotoService>,
    pub reports: Arc<ReportService>,
    pub formats: Arc<FormatService>,
    pub trainings: Arc<TrainingService>,
    pub success_stories: Arc<SuccessStoryService>,
}

impl ServiceRegistry {
    pub fn new(pool: SqlitePool, config: &AppConfig) -> Self {
        let status_repo: Arc<dyn StatusRepository> = Arc::new(SqliteStatusRepository::new(pool.clone()));
        let statuses = StatusRegistry::new(status_repo);

        let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        let token_service: Arc<dyn TokenService> =
            Arc::new(JwtTokenService::new(&config.jwt_secret, config.token_ttl_hours));

        let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
        let school_year_repo: Arc<dyn SchoolYearRepository> =
            Arc::new(SqliteSchoolYearRepository::new(pool.clone()));
        let region_repo: Arc<dyn RegionRepository> = Arc::new(SqliteRegionRepository::new(pool.clone()));
        let coordinator_repo: Arc<dyn CoordinatorRepository> =
            Arc::new(SqliteCoordinatorRepository::new(pool.clone()));
        let facilitator_repo: Arc<dyn SocialFacilitatorRepository> =
            Arc::new(SqliteSocialFacilitatorRepository::new(pool.clone()));
        let intern_repo: Arc<dyn InternRepository> = Arc::new(SqliteInternRepository::new(pool.clone()));
        let subproject_repo: Arc<dyn SubprojectRepository> =
            Arc::new(SqliteSubprojectRepository::new(pool.clone()));
        let archive_repo: Arc<dyn ArchiveRepository> = Arc::new(SqliteArchiveRepository::new(pool.clone()));
        let document_repo: Arc<dyn DocumentRepository> =
            Arc::new(SqliteDocumentRepository::new(pool.clone()));
        let event_repo: Arc<dyn EventRepository> = Arc::new(SqliteEventRepository::new(pool.clone()));
        let photo_repo: Arc<dyn PhotoRepository> = Arc::new(SqlitePhotoRepository::new(pool.clone()));
        let event_photo_repo: Arc<dyn EventPhotoRepository> =
            Arc::new(SqliteEventPhotoRepository::new(pool.clone()));
        let report_repo: Arc<dyn ReportRepository> = Arc::new(SqliteReportRepository::new(pool.clone()));
        let format_repo: Arc<dyn FormatRepository> = Arc::new(SqliteFormatRepository::new(pool.clone()));
        let training_repo: Arc<dyn TrainingRepository> =
            Arc::new(SqliteTrainingRepository::new(pool.clone()));
        let story_repo: Arc<dyn SuccessStoryRepository> = Arc::new(SqliteSuccessStoryRepository::new(pool));

        Self {
            auth: Arc::new(AuthService::new(
                user_repo.clone(),
                statuses.clone(),
                password_service.clone(),
                token_service,
            )),
            users: Arc::new(UserService::new(user_repo.clone(), statuses.clone(), password_service)),
            school_years: Arc::new(SchoolYearService::new(school_year_repo)),
            regions: Arc::new(RegionService::new(region_repo.clone(), statuses.clone())),
            coordinators: Arc::new(CoordinatorService::new(
                coordinator_repo.clone(),
                user_repo.clone(),
                region_repo.clone(),
                statuses.clone(),
            )),
            social_facilitators: Arc::new(SocialFacilitatorService::new(
                facilitator_repo.clone(),
                user_repo.clone(),
                region_repo.clone(),
                statuses.clone(),
            )),
            interns: Arc::new(InternService::new(intern_repo, user_repo.clone(), statuses.clone())),
            subprojects: Arc::new(SubprojectService::new(
                subproject_repo,
                region_repo,
                facilitator_repo,
                coordinator_repo,
                statuses.clone(),
            )),
            archives: Arc::new(ArchiveService::new(archive_repo.clone(), user_repo.clone(), statuses.clone())),
            documents: Arc::new(DocumentService::new(document_repo, statuses.clone())),
            events: Arc::new(EventService::new(event_repo.clone(), user_repo.clone(), statuses.clone())),
            photos: Arc::new(PhotoService::new(
                photo_repo.clone(),
                user_repo.clone(),
                archive_repo.clone(),
                statuses.clone(),
            )),
            event_photos: Arc::new(EventPhotoService::new(
                event_photo_repo,
                event_repo,
                photo_repo.clone(),
                statuses.clone(),
            )),
            reports: Arc::new(ReportService::new(
                report_repo,
                user_repo.clone(),
                archive_repo.clone(),
                statuses.clone(),
            )),
            formats: Arc::new(FormatService::new(
                format_repo,
                user_repo.clone(),
                archive_repo.clone(),
                statuses.clone(),
            )),
            trainings: Arc::new(TrainingService::new(
                training_repo,
                user_repo.clone(),
                archive_repo,
                statuses.clone(),
            )),
            success_stories: Arc::new(SuccessStoryService::new(
                story_repo,
                user_repo,
                photo_repo,
                statuses.clone(),
            )),
            statuses,
        }
    }
}

/// Open the database, apply migrations and build the service registry.
///
/// Safe to call more than once; later calls return immediately.
pub async fn initialize(config: AppConfig) -> ServiceResult<()> {
    let _guard = INIT_MUTEX.lock().await;

    if INITIALIZED.load(Ordering::Acquire) {
        return Ok(());
    }

    let result = initialize_internal(config).await;

    if result.is_ok() {
        INITIALIZED.store(true, Ordering::Release);
    }

    result
}

async fn initialize_internal(config: AppConfig) -> ServiceResult<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    let _ = env_logger::try_init();

    log::info!("Starting initialization ({})", config.environment);
    log::debug!("Database URL: {}", config.database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| {
            log::error!("Database connection failed: {}", e);
            ServiceError::Configuration(format!("Database connection failed: {}", e))
        })?;

    crate::db_migration::run_migrations(&pool).await.map_err(|e| {
        log::error!("Database migration failed: {}", e);
        ServiceError::Configuration(format!("Database migration failed: {}", e))
    })?;

    let registry = Arc::new(ServiceRegistry::new(pool.clone(), &config));

    *DB_POOL
        .lock()
        .map_err(|_| ServiceError::Configuration("DB_POOL lock poisoned".to_string()))? = Some(pool);
    *SERVICES
        .lock()
        .map_err(|_| ServiceError::Configuration("SERVICES lock poisoned".to_string()))? = Some(registry);

    log::info!("Initialization complete");
    Ok(())
}

pub fn get_db_pool() -> ServiceResult<SqlitePool> {
    DB_POOL
        .lock()
        .map_err(|_| ServiceError::Configuration("DB_POOL lock poisoned".to_string()))?
        .clone()
        .ok_or_else(|| ServiceError::Configuration("Database pool not initialized".to_string()))
}

pub fn get_services() -> ServiceResult<Arc<ServiceRegistry>> {
    SERVICES
        .lock()
        .map_err(|_| ServiceError::Configuration("SERVICES lock poisoned".to_string()))?
        .clone()
        .ok_or_else(|| ServiceError::Configuration("Services not initialized".to_string()))
}
