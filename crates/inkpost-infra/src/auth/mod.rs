//! Token and password services backing `/api/auth`.

mod jwt;
mod password;

pub use jwt::{DEFAULT_ISSUER, JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
