//! Server configuration loaded from environment variables.

use thiserror::Error;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was set to a value that could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// SQLite database file. `None` runs against an in-memory store.
    pub db_path: Option<String>,
    /// Host to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            db_path: None,
            host: "0.0.0.0".to_string(),
            port: 4000,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = ServerConfig::default();

        let port = match get("POSTS_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "POSTS_PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(ServerConfig {
            db_path: get("POSTS_DB_PATH"),
            host: get("POSTS_HOST").unwrap_or(defaults.host),
            port,
        })
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:4000");
    }

    #[test]
    fn reads_every_variable() {
        let config = load(&[
            ("POSTS_DB_PATH", "posts.db"),
            ("POSTS_HOST", "127.0.0.1"),
            ("POSTS_PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.db_path.as_deref(), Some("posts.db"));
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn empty_db_path_means_in_memory() {
        let config = load(&[("POSTS_DB_PATH", "")]).unwrap();
        assert!(config.db_path.is_none());
    }

    #[test]
    fn rejects_unparsable_port() {
        let err = load(&[("POSTS_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "POSTS_PORT", .. }));
    }
}
