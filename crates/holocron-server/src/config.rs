use holocron_core::AppError;

const DEFAULT_PORT: u16 = 3000;

/// HTTP server settings read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
}

impl ServerConfig {
    /// - `HOLOCRON_JWT_SECRET` (required, non-empty)
    /// - `HOLOCRON_SERVER_PORT` (optional, defaults to 3000)
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            port: parse_port(std::env::var("HOLOCRON_SERVER_PORT").ok())?,
            jwt_secret: parse_secret(std::env::var("HOLOCRON_JWT_SECRET").ok())?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, AppError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(raw) => raw.parse().map_err(|_| {
            AppError::ConfigError(format!("Invalid HOLOCRON_SERVER_PORT '{raw}'"))
        }),
    }
}

fn parse_secret(raw: Option<String>) -> Result<String, AppError> {
    raw.filter(|s| !s.is_empty()).ok_or_else(|| {
        AppError::ConfigError("HOLOCRON_JWT_SECRET must be set to a non-empty value".into())
    })
}
