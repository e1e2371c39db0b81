//! # Inkpost Infrastructure
//!
//! Concrete implementations of the ports defined in `inkpost-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory repositories only
//! - `postgres` - PostgreSQL repositories via SeaORM
//! - `auth` - JWT + Argon2 authentication

pub mod database;
pub mod memory;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

pub use database::DatabaseConfig;
pub use memory::{
    InMemoryCategoryRepository, InMemoryPermissionChecker, InMemoryPermissionRepository,
    InMemoryPostRepository, InMemoryUserRepository,
};
pub use storage::PublicDiskStorage;

#[cfg(feature = "postgres")]
pub use database::{
    PostgresCategoryRepository, PostgresPermissionChecker, PostgresPermissionRepository,
    PostgresPostRepository, PostgresUserRepository, connect,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
