//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod permission;
mod repository;
mod storage;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use permission::PermissionChecker;
pub use repository::{
    BaseRepository, CategoryRepository, PageRequest, Paginated, PermissionRepository, PostFilter,
    PostRepository, UserRepository,
};
pub use storage::FileStorage;
