use holocron_core::TokenService;
use holocron_db::Database;

/// Shared application state, available to all route handlers via `State<Arc<AppState>>`.
pub struct AppState {
    pub db: Database,
    /// Signs tokens on login and resolves them on protected routes.
    pub tokens: TokenService,
}
