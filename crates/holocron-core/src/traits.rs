use std::future::Future;

use crate::error::AppError;
use crate::models::{Favorite, NewFavorite, NewPerson, NewPlanet, NewUser, Person, Planet, User};

/// Persists and looks up user accounts.
///
/// `create` must fail with [`AppError::Conflict`] when the username or email
/// is already taken, even if the caller checked beforehand.
pub trait UserStore: Send + Sync + Clone {
    fn create(&self, user: &NewUser) -> impl Future<Output = Result<User, AppError>> + Send;

    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;

    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AppError>> + Send;
}

/// Persists and looks up planets.
pub trait PlanetStore: Send + Sync + Clone {
    fn create(&self, planet: &NewPlanet) -> impl Future<Output = Result<Planet, AppError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<Planet>, AppError>> + Send;

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Planet>, AppError>> + Send;

    /// All planets in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<Planet>, AppError>> + Send;
}

/// Persists and looks up people.
pub trait PersonStore: Send + Sync + Clone {
    fn create(&self, person: &NewPerson) -> impl Future<Output = Result<Person, AppError>> + Send;

    fn get(&self, id: i32) -> impl Future<Output = Result<Option<Person>, AppError>> + Send;

    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Person>, AppError>> + Send;

    /// All people in insertion order.
    fn list(&self) -> impl Future<Output = Result<Vec<Person>, AppError>> + Send;
}

/// Persists a user's favorites. Every read is scoped to one username.
pub trait FavoriteStore: Send + Sync + Clone {
    fn create(
        &self,
        favorite: &NewFavorite,
    ) -> impl Future<Output = Result<Favorite, AppError>> + Send;

    fn list_for_user(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<Favorite>, AppError>> + Send;

    /// Look up a favorite by id, but only if it belongs to `username`.
    fn find_for_user(
        &self,
        username: &str,
        id: i32,
    ) -> impl Future<Output = Result<Option<Favorite>, AppError>> + Send;

    fn delete(&self, favorite: &Favorite) -> impl Future<Output = Result<(), AppError>> + Send;
}
