use crate::auth::{IssuedToken, TokenService, hash_password_blocking, verify_password_blocking};
use crate::error::AppError;
use crate::models::{
    Favorite, NewFavorite, NewPerson, NewPlanet, NewUser, Person, Planet, Registration, User,
};
use crate::traits::{FavoriteStore, PersonStore, PlanetStore, UserStore};

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Registration, login, and profile lookup.
pub struct AccountService<U: UserStore> {
    users: U,
    tokens: TokenService,
}

impl<U: UserStore> AccountService<U> {
    pub fn new(users: U, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new user. Username is checked before email, so a request
    /// that collides on both reports the username.
    pub async fn register(&self, registration: Registration) -> Result<User, AppError> {
        if self
            .users
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            tracing::warn!(username = %registration.username, "Registration rejected: username taken");
            return Err(AppError::Conflict("Username already exists".into()));
        }

        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            tracing::warn!(username = %registration.username, "Registration rejected: email taken");
            return Err(AppError::Conflict("Email already exists".into()));
        }

        let new_user = NewUser {
            username: registration.username,
            email: registration.email,
            password_hash: hash_password_blocking(registration.password).await?,
        };

        let user = self.users.create(&new_user).await?;
        tracing::info!(id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Check credentials and issue a bearer token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(User, IssuedToken), AppError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::warn!(%username, "Login rejected: unknown user");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password_blocking(password.to_string(), user.password_hash.clone()).await? {
            tracing::warn!(%username, "Login rejected: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.username)?;
        tracing::info!(%username, expires_at = %token.expires_at, "Token issued");
        Ok((user, token))
    }

    pub async fn get_user(&self, username: &str) -> Result<User, AppError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User not found: {username}")))
    }
}

// ---------------------------------------------------------------------------
// Planets & people
// ---------------------------------------------------------------------------

/// Create-if-absent and read access for planets and people.
pub struct CatalogService<P: PlanetStore, C: PersonStore> {
    planets: P,
    people: C,
}

impl<P: PlanetStore, C: PersonStore> CatalogService<P, C> {
    pub fn new(planets: P, people: C) -> Self {
        Self { planets, people }
    }

    pub async fn create_planet(&self, planet: NewPlanet) -> Result<Planet, AppError> {
        if self.planets.find_by_name(&planet.name).await?.is_some() {
            tracing::warn!(name = %planet.name, "Planet rejected: name taken");
            return Err(AppError::Conflict("Planet already exists".into()));
        }

        let planet = self.planets.create(&planet).await?;
        tracing::info!(id = planet.id, name = %planet.name, "Planet created");
        Ok(planet)
    }

    pub async fn get_planet(&self, id: i32) -> Result<Planet, AppError> {
        self.planets
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Planet not found: {id}")))
    }

    pub async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        self.planets.list().await
    }

    pub async fn create_person(&self, person: NewPerson) -> Result<Person, AppError> {
        if self.people.find_by_name(&person.name).await?.is_some() {
            tracing::warn!(name = %person.name, "Person rejected: name taken");
            return Err(AppError::Conflict("Person already exists".into()));
        }

        let person = self.people.create(&person).await?;
        tracing::info!(id = person.id, name = %person.name, "Person created");
        Ok(person)
    }

    pub async fn get_person(&self, id: i32) -> Result<Person, AppError> {
        self.people
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Person not found: {id}")))
    }

    pub async fn list_people(&self) -> Result<Vec<Person>, AppError> {
        self.people.list().await
    }
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

/// Per-user favorites. `username` always comes from a resolved token.
pub struct FavoriteService<F: FavoriteStore> {
    favorites: F,
}

impl<F: FavoriteStore> FavoriteService<F> {
    pub fn new(favorites: F) -> Self {
        Self { favorites }
    }

    /// Add a favorite unless the user already has one with the same planet
    /// *and* the same person.
    pub async fn add(
        &self,
        username: &str,
        planet_name: Option<String>,
        person_name: Option<String>,
    ) -> Result<Favorite, AppError> {
        if planet_name.is_none() && person_name.is_none() {
            return Err(AppError::Validation(
                "At least one of planet_name or person_name is required".into(),
            ));
        }

        let existing = self.favorites.list_for_user(username).await?;
        if existing
            .iter()
            .any(|f| f.same_pair(planet_name.as_deref(), person_name.as_deref()))
        {
            tracing::warn!(%username, "Favorite rejected: duplicate");
            return Err(AppError::Conflict("Favorite already exists".into()));
        }

        let favorite = self
            .favorites
            .create(&NewFavorite {
                username: username.to_string(),
                planet_name,
                person_name,
            })
            .await?;
        tracing::info!(id = favorite.id, %username, "Favorite added");
        Ok(favorite)
    }

    pub async fn list(&self, username: &str) -> Result<Vec<Favorite>, AppError> {
        self.favorites.list_for_user(username).await
    }

    /// Remove one of the user's favorites and return it.
    ///
    /// Another user's favorite is reported as not found.
    pub async fn remove(&self, username: &str, id: i32) -> Result<Favorite, AppError> {
        let favorite = self
            .favorites
            .find_for_user(username, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Favorite does not exist".into()))?;

        self.favorites.delete(&favorite).await?;
        tracing::info!(id, %username, "Favorite removed");
        Ok(favorite)
    }
}
