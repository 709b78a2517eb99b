use thiserror::Error;

/// Application-wide error types for Holocron.
///
/// Every variant is a caller-facing failure; nothing here is retried.
#[derive(Error, Debug)]
pub enum AppError {
    /// A required field is missing, blank, or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness rule (username, email, name, favorite pair) was violated.
    #[error("{0}")]
    Conflict(String),

    /// A referenced record does not exist (or is not visible to the caller).
    #[error("{0}")]
    NotFound(String),

    /// Username/password pair did not match a registered user.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Bearer token missing, malformed, forged, or expired.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Anything else that is the server's fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true if the failure was caused by the request rather than the server.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::Conflict(_)
                | AppError::NotFound(_)
                | AppError::InvalidCredentials
                | AppError::Unauthorized(_)
        )
    }
}
