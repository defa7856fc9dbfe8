use std::env;

/// Runtime settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    pub address: String,
    /// Port the HTTP server binds to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "app.db".to_string(),
            address: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Read `DATABASE_URL`, `ADDRESS` and `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    log::warn!("Ignoring invalid PORT value `{raw}`, using {}", defaults.port);
                    defaults.port
                }
            },
            None => defaults.port,
        };

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            address: lookup("ADDRESS").unwrap_or(defaults.address),
            port,
        }
    }
}
