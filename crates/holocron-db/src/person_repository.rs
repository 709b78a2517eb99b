use holocron_core::error::AppError;
use holocron_core::models::{NewPerson, Person};
use holocron_core::traits::PersonStore;
use sqlx::{PgPool, Pool, Postgres};

use crate::database::insert_error;

const PERSON_COLUMNS: &str = "id, name, birth_year, homeworld, eye_color, gender, hair_color, \
     height, mass, skin_color, pic, url";

/// Repository for people (characters) in PostgreSQL.
#[derive(Clone)]
pub struct PersonRepository {
    pool: Pool<Postgres>,
}

impl PersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: i32,
    name: String,
    birth_year: Option<String>,
    homeworld: Option<String>,
    eye_color: Option<String>,
    gender: Option<String>,
    hair_color: Option<String>,
    height: Option<i32>,
    mass: Option<i32>,
    skin_color: Option<String>,
    pic: Option<String>,
    url: Option<String>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            name: row.name,
            birth_year: row.birth_year,
            homeworld: row.homeworld,
            eye_color: row.eye_color,
            gender: row.gender,
            hair_color: row.hair_color,
            height: row.height,
            mass: row.mass,
            skin_color: row.skin_color,
            pic: row.pic,
            url: row.url,
        }
    }
}

impl PersonStore for PersonRepository {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            r#"
            INSERT INTO people (name, birth_year, homeworld, eye_color, gender, hair_color,
                                height, mass, skin_color, pic, url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PERSON_COLUMNS}
            "#
        ))
        .bind(&person.name)
        .bind(&person.birth_year)
        .bind(&person.homeworld)
        .bind(&person.eye_color)
        .bind(&person.gender)
        .bind(&person.hair_color)
        .bind(person.height)
        .bind(person.mass)
        .bind(&person.skin_color)
        .bind(&person.pic)
        .bind(&person.url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, |_| "Person already exists".into()))?;

        Ok(row.into())
    }

    async fn get(&self, id: i32) -> Result<Option<Person>, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM people WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        let row = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM people WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Person>, AppError> {
        let rows = sqlx::query_as::<_, PersonRow>(&format!(
            "SELECT {PERSON_COLUMNS} FROM people ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
