use holocron_core::error::AppError;
use holocron_core::models::{Favorite, NewFavorite};
use holocron_core::traits::FavoriteStore;
use sqlx::{PgPool, Pool, Postgres};

use crate::database::insert_error;

/// Repository for per-user favorites in PostgreSQL.
///
/// Every query filters on `username`, so one user can never read or delete
/// another user's rows through this type.
#[derive(Clone)]
pub struct FavoriteRepository {
    pool: Pool<Postgres>,
}

impl FavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct FavoriteRow {
    id: i32,
    username: String,
    planet_name: Option<String>,
    person_name: Option<String>,
}

impl From<FavoriteRow> for Favorite {
    fn from(row: FavoriteRow) -> Self {
        Favorite {
            id: row.id,
            username: row.username,
            planet_name: row.planet_name,
            person_name: row.person_name,
        }
    }
}

impl FavoriteStore for FavoriteRepository {
    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, AppError> {
        let row = sqlx::query_as::<_, FavoriteRow>(
            r#"
            INSERT INTO favorites (username, planet_name, person_name)
            VALUES ($1, $2, $3)
            RETURNING id, username, planet_name, person_name
            "#,
        )
        .bind(&favorite.username)
        .bind(&favorite.planet_name)
        .bind(&favorite.person_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, |_| "Favorite already exists".into()))?;

        Ok(row.into())
    }

    async fn list_for_user(&self, username: &str) -> Result<Vec<Favorite>, AppError> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT id, username, planet_name, person_name
            FROM favorites
            WHERE username = $1
            ORDER BY id ASC
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_for_user(&self, username: &str, id: i32) -> Result<Option<Favorite>, AppError> {
        let row = sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT id, username, planet_name, person_name
            FROM favorites
            WHERE id = $1 AND username = $2
            "#,
        )
        .bind(id)
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, favorite: &Favorite) -> Result<(), AppError> {
        let result = sqlx::query(r#"DELETE FROM favorites WHERE id = $1 AND username = $2"#)
            .bind(favorite.id)
            .bind(&favorite.username)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Favorite does not exist".into()));
        }
        Ok(())
    }
}
