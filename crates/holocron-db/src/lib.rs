pub mod config;
pub mod database;
pub mod favorite_repository;
pub mod person_repository;
pub mod planet_repository;
pub mod user_repository;

pub use config::DatabaseConfig;
pub use database::Database;
pub use favorite_repository::FavoriteRepository;
pub use person_repository::PersonRepository;
pub use planet_repository::PlanetRepository;
pub use user_repository::UserRepository;
