// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;

/// Special database path that keeps everything in memory.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// SQLite database file (or `:memory:`)
    pub database_path: String,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 5000,
        };

        let database_path = env::var("DATABASE_PATH")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| "reactivities.db".to_string());
        if database_path.is_empty() {
            return Err(ConfigError::Invalid("DATABASE_PATH", database_path));
        }

        Ok(Self {
            port,
            database_path,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        })
    }

    /// Config for tests: in-memory database, fixed port.
    pub fn test_default() -> Self {
        Self {
            port: 5000,
            database_path: IN_MEMORY_DATABASE.to_string(),
            frontend_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1:?}")]
    Invalid(&'static str, String),
}
