//! Server configuration read from the environment.

use crate::error::AppError;

/// Default listen address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind (`HOST`).
    pub host: String,
    /// Port to bind (`PORT`).
    pub port: u16,
    /// Tokio worker threads (`TRACKER_WORKERS`); `None` uses one per CPU.
    pub workers: Option<usize>,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is not a valid `u16` or
    /// `TRACKER_WORKERS` is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let workers = match lookup("TRACKER_WORKERS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(0) => {
                    return Err(AppError::Config(
                        "TRACKER_WORKERS must be at least 1".to_owned(),
                    ));
                }
                Ok(n) => Some(n),
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "TRACKER_WORKERS must be a positive integer: {e}"
                    )));
                }
            },
            None => None,
        };

        Ok(Self {
            host,
            port,
            workers,
        })
    }

    /// The `host:port` string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
