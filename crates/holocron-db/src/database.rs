use holocron_core::AppError;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;
use crate::favorite_repository::FavoriteRepository;
use crate::person_repository::PersonRepository;
use crate::planet_repository::PlanetRepository;
use crate::user_repository::UserRepository;

/// Central database facade. Owns the connection pool, runs migrations
/// and vends repository instances.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL with the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Failed to connect: {e}")))?;

        Ok(Self { pool })
    }

    /// Create a `Database` from an existing pool (useful for testing).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run all pending migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Migration failed: {e}")))?;
        Ok(())
    }

    pub fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn planet_repo(&self) -> PlanetRepository {
        PlanetRepository::new(self.pool.clone())
    }

    pub fn person_repo(&self) -> PersonRepository {
        PersonRepository::new(self.pool.clone())
    }

    pub fn favorite_repo(&self) -> FavoriteRepository {
        FavoriteRepository::new(self.pool.clone())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

/// SQLSTATE for `string_data_right_truncation` (value too long for VARCHAR(n)).
const STRING_TOO_LONG: &str = "22001";

/// Map an insert failure to the caller-facing error.
///
/// The schema constraints are authoritative; the services' pre-insert
/// lookups only exist to produce friendlier messages. `conflict_message`
/// picks the message from the violated constraint name.
pub(crate) fn insert_error(
    err: sqlx::Error,
    conflict_message: impl Fn(Option<&str>) -> String,
) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            tracing::warn!(constraint = ?db.constraint(), "Unique constraint violated on insert");
            AppError::Conflict(conflict_message(db.constraint()))
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::NotFound(format!("Referenced record does not exist: {}", db.message()))
        }
        sqlx::Error::Database(db) if db.code().as_deref() == Some(STRING_TOO_LONG) => {
            AppError::Validation(db.message().to_string())
        }
        _ => AppError::DatabaseError(err.to_string()),
    }
}
