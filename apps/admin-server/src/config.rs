//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use inkpost_core::resource::SlugMode;
use inkpost_infra::DatabaseConfig;
use inkpost_infra::auth::{DEFAULT_ISSUER, JwtConfig};

const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Where uploaded files go and how they are served.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub root: PathBuf,
    pub public_url: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub storage: StorageConfig,
    pub slug_mode: SlugMode,
    pub jwt: JwtConfig,
}

fn parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parsed("DB_MAX_CONNECTIONS", 100),
            min_connections: parsed("DB_MIN_CONNECTIONS", 10),
        });

        let storage = StorageConfig {
            root: env::var("STORAGE_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/app/public")),
            public_url: env::var("STORAGE_PUBLIC_URL").unwrap_or_else(|_| "/storage".to_string()),
        };

        let slug_mode = match env::var("SLUG_MODE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Unknown SLUG_MODE, falling back to always");
                SlugMode::default()
            }),
            Err(_) => SlugMode::default(),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parsed("PORT", 8080),
            database,
            storage,
            slug_mode,
            jwt: Self::jwt_from_env(),
        }
    }

    fn jwt_from_env() -> JwtConfig {
        let secret = env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        if secret == DEFAULT_JWT_SECRET {
            let is_production = env::var("RUST_ENV")
                .map(|v| v == "production" || v == "prod")
                .unwrap_or(false);

            if is_production {
                tracing::error!(
                    "SECURITY: Using default JWT secret in production! Set JWT_SECRET environment variable."
                );
            } else {
                tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
            }
        }

        JwtConfig {
            secret,
            expiration_hours: parsed("JWT_EXPIRATION_HOURS", 24),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| DEFAULT_ISSUER.to_string()),
        }
    }
}
