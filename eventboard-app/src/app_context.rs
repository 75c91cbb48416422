use crate::application::EventCommands;
use crate::infrastructure::db::{create_connection, run_migrations, UserRepository};
use crate::infrastructure::security::RateLimiter;
use eventboard_errors::AppError;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppContext {
    pub events: EventCommands,
    pub user_repo: UserRepository,
    pub rate_limiter: RateLimiter,
}

impl AppContext {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            events: EventCommands::new(db.clone()),
            user_repo: UserRepository::new(db),
            rate_limiter: RateLimiter::new(),
        }
    }

    /// Connects to `DATABASE_URL` and brings the schema up to date.
    pub async fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::Internal("DATABASE_URL must be set".to_string()))?;

        let db = create_connection(&database_url)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        tracing::info!("Connected to database");

        run_migrations(&db)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(Self::new(db))
    }
}
