//! Configuration loading from the process environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

use crate::config::schema::{AppConfig, DatabaseConfig, ListenerConfig};

impl AppConfig {
    /// Build a configuration from environment variables, falling back to the
    /// hardcoded defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            listener: ListenerConfig {
                bind_address: env_or("BIND_ADDRESS", "0.0.0.0:3000"),
            },
            database: DatabaseConfig {
                host: env_or("DB_HOST", "localhost"),
                port: env_parse("DB_PORT", 5432),
                name: env_or("DB_NAME", "items"),
                user: env_or("DB_USER", "postgres"),
                password: env_or("DB_PASSWORD", "postgres"),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!(key, error = %e, "Invalid value, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_variables_fall_back() {
        // Deliberately improbable names so the test is hermetic.
        assert_eq!(env_or("ITEM_SERVICE_TEST_UNSET", "fallback"), "fallback");
        assert_eq!(env_parse::<u16>("ITEM_SERVICE_TEST_UNSET_PORT", 5432), 5432);
    }
}
