//! # Inkpost Core
//!
//! The domain layer of the Inkpost blog back-office: entities, the post
//! resource (form, table, validation), authorization policies and the
//! dashboard widget. Infrastructure is reached only through `ports`.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod resource;
pub mod slug;
pub mod widget;

pub use error::{DomainError, FieldErrors};
