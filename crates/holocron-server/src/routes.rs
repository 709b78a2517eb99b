use std::sync::Arc;

use axum::extract::{Extension, State};
use axum::http::{Method, StatusCode, Uri};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use holocron_core::util::optional;
use holocron_core::{AccountService, AppError, CatalogService, FavoriteService};
use holocron_db::{FavoriteRepository, PersonRepository, PlanetRepository, UserRepository};

use crate::auth::{AuthUser, require_token};
use crate::dto::{
    AddFavoriteRequest, CreatePersonRequest, CreatePlanetRequest, DeletedFavoriteResponse,
    ErrorResponse, HealthResponse, LoginRequest, LoginResponse, RegisterRequest,
    RemoveFavoriteRequest,
};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Build the full router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let protected = Router::new()
        .route(
            "/favorite",
            post(add_favorite).get(list_favorites).delete(remove_favorite),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_token));

    let public = Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/user/{username}", get(get_user))
        .route("/planet", post(create_planet).get(list_planets))
        .route("/planet/{id}", get(get_planet))
        .route("/person", post(create_person).get(list_people))
        .route("/person/{id}", get(get_person))
        .route("/health", get(health));

    public
        .merge(protected)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

fn accounts(state: &AppState) -> AccountService<UserRepository> {
    AccountService::new(state.db.user_repo(), state.tokens.clone())
}

fn catalog(state: &AppState) -> CatalogService<PlanetRepository, PersonRepository> {
    CatalogService::new(state.db.planet_repo(), state.db.person_repo())
}

fn favorites(state: &AppState) -> FavoriteService<FavoriteRepository> {
    FavoriteService::new(state.db.favorite_repo())
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = accounts(&state).register(body.validate()?).await?;
    Ok(Json(user))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (username, password) = body.validate()?;
    let (user, issued) = accounts(&state).login(&username, &password).await?;

    Ok(Json(LoginResponse {
        user,
        token: issued.token,
        expires_at: issued.expires_at,
    }))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    ApiPath(username): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = accounts(&state).get_user(&username).await?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// Planets
// ---------------------------------------------------------------------------

pub async fn create_planet(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreatePlanetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let planet = catalog(&state).create_planet(body.validate()?).await?;
    Ok(Json(planet))
}

pub async fn get_planet(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let planet = catalog(&state).get_planet(id).await?;
    Ok(Json(planet))
}

pub async fn list_planets(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let planets = catalog(&state).list_planets().await?;
    Ok(Json(planets))
}

// ---------------------------------------------------------------------------
// People
// ---------------------------------------------------------------------------

pub async fn create_person(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<CreatePersonRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let person = catalog(&state).create_person(body.validate()?).await?;
    Ok(Json(person))
}

pub async fn get_person(
    State(state): State<Arc<AppState>>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let person = catalog(&state).get_person(id).await?;
    Ok(Json(person))
}

pub async fn list_people(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let people = catalog(&state).list_people().await?;
    Ok(Json(people))
}

// ---------------------------------------------------------------------------
// Favorites
// ---------------------------------------------------------------------------

pub async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(username)): Extension<AuthUser>,
    ApiJson(body): ApiJson<AddFavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let favorite = favorites(&state)
        .add(&username, optional(body.planet_name), optional(body.person_name))
        .await?;
    Ok(Json(favorite))
}

pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(username)): Extension<AuthUser>,
) -> Result<impl IntoResponse, ApiError> {
    let list = favorites(&state).list(&username).await?;
    Ok(Json(list))
}

pub async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Extension(AuthUser(username)): Extension<AuthUser>,
    ApiJson(body): ApiJson<RemoveFavoriteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = favorites(&state)
        .remove(&username, body.validate()?)
        .await?;
    Ok(Json(DeletedFavoriteResponse { deleted }))
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_status = match state.db.health_check().await {
        Ok(()) => "ok",
        Err(_) => "error",
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, Json(response))
}

async fn not_found() -> ApiError {
    ApiError(AppError::NotFound("No such route".into()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> impl IntoResponse {
    let body = ErrorResponse {
        error: "method_not_allowed".to_string(),
        message: format!("Method {method} is not allowed on {}", uri.path()),
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}
