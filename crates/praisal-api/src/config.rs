//! Server configuration.
//!
//! The environment is read exactly once, before any other initialization
//! step, into an immutable [`ServerConfig`] that lives for the process
//! lifetime.

use std::env;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

/// Browser origin allowed by default, the local web client.
pub const DEFAULT_WEB_ORIGIN: &str = "http://localhost:3000";

/// Request-body ceiling for JSON and URL-encoded payloads.
///
/// Raised well above the framework default so template forms can embed
/// image data inline.
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Process-wide server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP listener binds.
    pub port: u16,
    /// Connection string handed to the application layer.
    pub database_url: Option<String>,
    /// The single browser origin the CORS policy accepts.
    pub web_origin: String,
    /// Request-body ceiling in bytes.
    pub body_limit: usize,
}

impl ServerConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|raw| match raw.parse() {
                Ok(port) => Some(port),
                Err(_) => {
                    log::warn!("Ignoring unparseable PORT value '{raw}'");
                    None
                }
            })
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            database_url: lookup("DATABASE_URL"),
            web_origin: lookup("WEB_ORIGIN").unwrap_or_else(|| DEFAULT_WEB_ORIGIN.to_string()),
            body_limit: BODY_LIMIT_BYTES,
        }
    }

    /// The socket address the listener binds.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
