use std::str::FromStr;

/// A configuration variable held a value that could not be used.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Which document-store backend the server runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{other}' (expected postgres or memory)")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub store_backend: StoreBackend,
    /// Only read when `store_backend` is [`StoreBackend::Postgres`].
    pub database_url: String,
    /// Report 404 for update/delete of ids that match nothing.
    pub strict_mutations: bool,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `8080`                               |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `STORE_BACKEND`        | `postgres`                           |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/musicadb` |
    /// | `STRICT_MUTATIONS`     | `false`                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");
        let port = parse("PORT", var("PORT", "8080"))?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS", "30"))?;
        let store_backend = parse("STORE_BACKEND", var("STORE_BACKEND", "postgres"))?;
        let database_url = var("DATABASE_URL", "postgres://localhost:5432/musicadb");
        let strict_mutations = parse_bool("STRICT_MUTATIONS", var("STRICT_MUTATIONS", "false"))?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            database_url,
            strict_mutations,
        })
    }
}

fn parse<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError {
            var,
            value,
            reason: "expected a boolean".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert!(!config.strict_mutations);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("PORT", "9000"),
            ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
            ("STORE_BACKEND", "Memory"),
            ("STRICT_MUTATIONS", "true"),
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.strict_mutations);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.value, "eighty");

        let err = load(&[("STORE_BACKEND", "mongo")]).unwrap_err();
        assert_eq!(err.var, "STORE_BACKEND");

        let err = load(&[("STRICT_MUTATIONS", "maybe")]).unwrap_err();
        assert_eq!(err.var, "STRICT_MUTATIONS");
    }
}
