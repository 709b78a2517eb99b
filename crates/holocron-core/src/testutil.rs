//! Test utilities: in-memory implementations of the store traits.
//!
//! Handwritten fakes for dependency injection in unit tests. They use
//! `Arc<Mutex<_>>` for interior mutability and enforce the same uniqueness
//! rules as the database schema, so the services' "storage is the source of
//! truth" path can be exercised without PostgreSQL.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::{Favorite, NewFavorite, NewPerson, NewPlanet, NewUser, Person, Planet, User};
use crate::traits::{FavoriteStore, PersonStore, PlanetStore, UserStore};

// ---------------------------------------------------------------------------
// MemoryUsers
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MemoryUsers {
    pub users: Arc<Mutex<Vec<User>>>,
    /// When set, lookups report nothing so only the insert-time check can catch duplicates.
    pub blind_lookups: bool,
}

impl MemoryUsers {
    pub fn blind() -> Self {
        Self {
            blind_lookups: true,
            ..Default::default()
        }
    }
}

impl UserStore for MemoryUsers {
    async fn create(&self, user: &NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::Conflict("unique constraint violated".into()));
        }
        let created = User {
            id: users.len() as i32 + 1,
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        if self.blind_lookups {
            return Ok(None);
        }
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        if self.blind_lookups {
            return Ok(None);
        }
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

// ---------------------------------------------------------------------------
// MemoryPlanets / MemoryPeople
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MemoryPlanets {
    pub planets: Arc<Mutex<Vec<Planet>>>,
}

impl PlanetStore for MemoryPlanets {
    async fn create(&self, planet: &NewPlanet) -> Result<Planet, AppError> {
        let mut planets = self.planets.lock().unwrap();
        if planets.iter().any(|p| p.name == planet.name) {
            return Err(AppError::Conflict("unique constraint violated".into()));
        }
        let created = planet.clone().into_planet(planets.len() as i32 + 1);
        planets.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<Planet>, AppError> {
        let planets = self.planets.lock().unwrap();
        Ok(planets.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Planet>, AppError> {
        let planets = self.planets.lock().unwrap();
        Ok(planets.iter().find(|p| p.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Planet>, AppError> {
        Ok(self.planets.lock().unwrap().clone())
    }
}

#[derive(Clone, Default)]
pub struct MemoryPeople {
    pub people: Arc<Mutex<Vec<Person>>>,
}

impl PersonStore for MemoryPeople {
    async fn create(&self, person: &NewPerson) -> Result<Person, AppError> {
        let mut people = self.people.lock().unwrap();
        if people.iter().any(|p| p.name == person.name) {
            return Err(AppError::Conflict("unique constraint violated".into()));
        }
        let created = person.clone().into_person(people.len() as i32 + 1);
        people.push(created.clone());
        Ok(created)
    }

    async fn get(&self, id: i32) -> Result<Option<Person>, AppError> {
        let people = self.people.lock().unwrap();
        Ok(people.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Person>, AppError> {
        let people = self.people.lock().unwrap();
        Ok(people.iter().find(|p| p.name == name).cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, AppError> {
        Ok(self.people.lock().unwrap().clone())
    }
}

// ---------------------------------------------------------------------------
// MemoryFavorites
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct MemoryFavorites {
    pub favorites: Arc<Mutex<Vec<Favorite>>>,
    next_id: Arc<Mutex<i32>>,
    /// Error returned by the next `delete` call, if any.
    pub delete_error: Arc<Mutex<Option<AppError>>>,
}

impl MemoryFavorites {
    pub fn with_delete_error(error: AppError) -> Self {
        Self {
            delete_error: Arc::new(Mutex::new(Some(error))),
            ..Default::default()
        }
    }
}

impl FavoriteStore for MemoryFavorites {
    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, AppError> {
        let mut favorites = self.favorites.lock().unwrap();
        if favorites.iter().any(|f| {
            f.username == favorite.username
                && f.same_pair(
                    favorite.planet_name.as_deref(),
                    favorite.person_name.as_deref(),
                )
        }) {
            return Err(AppError::Conflict("unique constraint violated".into()));
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Favorite {
            id: *next_id,
            username: favorite.username.clone(),
            planet_name: favorite.planet_name.clone(),
            person_name: favorite.person_name.clone(),
        };
        favorites.push(created.clone());
        Ok(created)
    }

    async fn list_for_user(&self, username: &str) -> Result<Vec<Favorite>, AppError> {
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites
            .iter()
            .filter(|f| f.username == username)
            .cloned()
            .collect())
    }

    async fn find_for_user(&self, username: &str, id: i32) -> Result<Option<Favorite>, AppError> {
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites
            .iter()
            .find(|f| f.id == id && f.username == username)
            .cloned())
    }

    async fn delete(&self, favorite: &Favorite) -> Result<(), AppError> {
        if let Some(err) = self.delete_error.lock().unwrap().take() {
            return Err(err);
        }
        self.favorites
            .lock()
            .unwrap()
            .retain(|f| f.id != favorite.id);
        Ok(())
    }
}
