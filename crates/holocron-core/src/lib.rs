pub mod auth;
pub mod catalog;
pub mod error;
pub mod models;
pub mod traits;
pub mod util;

#[cfg(test)]
mod testutil;

pub use auth::{IssuedToken, TokenService};
pub use catalog::{AccountService, CatalogService, FavoriteService};
pub use error::AppError;
pub use models::{Favorite, NewFavorite, NewPerson, NewPlanet, NewUser, Person, Planet, User};
pub use traits::{FavoriteStore, PersonStore, PlanetStore, UserStore};
