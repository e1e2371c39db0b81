//! SeaORM entities.

pub mod category;
pub mod permission;
pub mod post;
pub mod user;
pub mod user_permission;
