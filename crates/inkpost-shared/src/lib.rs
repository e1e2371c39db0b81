//! # Inkpost Shared
//!
//! Wire types of the admin API, kept free of server dependencies so clients
//! can reuse them.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
