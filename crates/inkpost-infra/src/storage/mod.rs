//! Public upload disk and image preparation.

mod cover;
mod disk;

pub use cover::{PreparedImage, detect_mime, prepare_cover};
pub use disk::PublicDiskStorage;
