use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The password hash never leaves the server: it is skipped on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// DTO for inserting a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Validated registration input (plain-text password).
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// A planet in the catalog. Everything except `name` is descriptive and optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub population: Option<i64>,
    pub gravity: Option<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    /// Picture URL
    pub pic: Option<String>,
    /// External reference URL
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPlanet {
    pub name: String,
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

impl NewPlanet {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attach the surrogate id assigned by the store.
    pub fn into_planet(self, id: i32) -> Planet {
        Planet {
            id,
            name: self.name,
            population: self.population,
            gravity: self.gravity,
            climate: self.climate,
            terrain: self.terrain,
            surface_water: self.surface_water,
            diameter: self.diameter,
            orbital_period: self.orbital_period,
            rotation_period: self.rotation_period,
            pic: self.pic,
            url: self.url,
        }
    }
}

/// A character in the catalog.
///
/// `homeworld` holds a planet name; it is not required to exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: i32,
    pub name: String,
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

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
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

impl NewPerson {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn into_person(self, id: i32) -> Person {
        Person {
            id,
            name: self.name,
            birth_year: self.birth_year,
            homeworld: self.homeworld,
            eye_color: self.eye_color,
            gender: self.gender,
            hair_color: self.hair_color,
            height: self.height,
            mass: self.mass,
            skin_color: self.skin_color,
            pic: self.pic,
            url: self.url,
        }
    }
}

/// A user's bookmarked planet and/or person, stored by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub id: i32,
    pub username: String,
    pub planet_name: Option<String>,
    pub person_name: Option<String>,
}

impl Favorite {
    /// Two favorites collide only when both the planet and the person match.
    pub fn same_pair(&self, planet_name: Option<&str>, person_name: Option<&str>) -> bool {
        self.planet_name.as_deref() == planet_name && self.person_name.as_deref() == person_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFavorite {
    pub username: String,
    pub planet_name: Option<String>,
    pub person_name: Option<String>,
}
