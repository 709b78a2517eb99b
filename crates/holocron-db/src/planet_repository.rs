use holocron_core::error::AppError;
use holocron_core::models::{NewPlanet, Planet};
use holocron_core::traits::PlanetStore;
use sqlx::{PgPool, Pool, Postgres};

use crate::database::insert_error;

const PLANET_COLUMNS: &str = "id, name, population, gravity, climate, terrain, surface_water, \
     diameter, orbital_period, rotation_period, pic, url";

/// Repository for planets in PostgreSQL.
#[derive(Clone)]
pub struct PlanetRepository {
    pool: Pool<Postgres>,
}

impl PlanetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct PlanetRow {
    id: i32,
    name: String,
    population: Option<i64>,
    gravity: Option<String>,
    climate: Option<String>,
    terrain: Option<String>,
    surface_water: Option<i32>,
    diameter: Option<i32>,
    orbital_period: Option<i32>,
    rotation_period: Option<i32>,
    pic: Option<String>,
    url: Option<String>,
}

impl From<PlanetRow> for Planet {
    fn from(row: PlanetRow) -> Self {
        Planet {
            id: row.id,
            name: row.name,
            population: row.population,
            gravity: row.gravity,
            climate: row.climate,
            terrain: row.terrain,
            surface_water: row.surface_water,
            diameter: row.diameter,
            orbital_period: row.orbital_period,
            rotation_period: row.rotation_period,
            pic: row.pic,
            url: row.url,
        }
    }
}

impl PlanetStore for PlanetRepository {
    async fn create(&self, planet: &NewPlanet) -> Result<Planet, AppError> {
        let row = sqlx::query_as::<_, PlanetRow>(&format!(
            r#"
            INSERT INTO planets (name, population, gravity, climate, terrain, surface_water,
                                 diameter, orbital_period, rotation_period, pic, url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PLANET_COLUMNS}
            "#
        ))
        .bind(&planet.name)
        .bind(planet.population)
        .bind(&planet.gravity)
        .bind(&planet.climate)
        .bind(&planet.terrain)
        .bind(planet.surface_water)
        .bind(planet.diameter)
        .bind(planet.orbital_period)
        .bind(planet.rotation_period)
        .bind(&planet.pic)
        .bind(&planet.url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, |_| "Planet already exists".into()))?;

        Ok(row.into())
    }

    async fn get(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let row = sqlx::query_as::<_, PlanetRow>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, AppError> {
        let row = sqlx::query_as::<_, PlanetRow>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planets WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Planet>, AppError> {
        let rows = sqlx::query_as::<_, PlanetRow>(&format!(
            "SELECT {PLANET_COLUMNS} FROM planets ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
