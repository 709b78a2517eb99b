use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use holocron_core::error::AppError;
use holocron_core::models::{Favorite, NewPerson, NewPlanet, Registration, User};
use holocron_core::util::{optional, required};

// Request bodies keep every field optional so that a missing field becomes a
// `validation_error` naming it, rather than a generic deserialization failure.

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    pub fn validate(self) -> Result<Registration, AppError> {
        Ok(Registration {
            username: required("username", self.username)?,
            email: required("email", self.email)?,
            // Passwords are taken verbatim; only emptiness is rejected.
            password: self
                .password
                .filter(|p| !p.is_empty())
                .ok_or_else(|| AppError::Validation("Missing required field: password".into()))?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> Result<(String, String), AppError> {
        let username = required("username", self.username)?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::Validation("Missing required field: password".into()))?;
        Ok((username, password))
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: Option<String>,
    pub population: Option<i64>,
    pub gravity: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    pub pic: Option<String>,
    pub url: Option<String>,
}

impl CreatePlanetRequest {
    pub fn validate(self) -> Result<NewPlanet, AppError> {
        Ok(NewPlanet {
            name: required("name", self.name)?,
            population: self.population,
            gravity: optional(self.gravity),
            climate: optional(self.climate),
            terrain: optional(self.terrain),
            surface_water: self.surface_water,
            diameter: self.diameter,
            orbital_period: self.orbital_period,
            rotation_period: self.rotation_period,
            pic: optional(self.pic),
            url: optional(self.url),
        })
    }
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub birth_year: Option<String>,
    pub homeworld: Option<String>,
    pub eye_color: Option<String>,
    pub gender: Option<String>,
    pub hair_color: Option<String>,
    pub height: Option<i32>,
    pub mass: Option<i32>,
    pub skin_color: Option<String>,
    pub pic: Option<String>,
    pub url: Option<String>,
}

impl CreatePersonRequest {
    pub fn validate(self) -> Result<NewPerson, AppError> {
        Ok(NewPerson {
            name: required("name", self.name)?,
            birth_year: optional(self.birth_year),
            homeworld: optional(self.homeworld),
            eye_color: optional(self.eye_color),
            gender: optional(self.gender),
            hair_color: optional(self.hair_color),
            height: self.height,
            mass: self.mass,
            skin_color: optional(self.skin_color),
            pic: optional(self.pic),
            url: optional(self.url),
        })
    }
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub planet_name: Option<String>,
    pub person_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFavoriteRequest {
    pub id: Option<i32>,
}

impl RemoveFavoriteRequest {
    pub fn validate(self) -> Result<i32, AppError> {
        self.id
            .ok_or_else(|| AppError::Validation("Missing required field: id".into()))
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedFavoriteResponse {
    pub deleted: Favorite,
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
