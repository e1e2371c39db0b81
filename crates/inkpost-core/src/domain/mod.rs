//! Domain entities - the core business objects.

mod category;
mod permission;
mod post;
mod user;

use chrono::{DateTime, Utc};

pub use category::Category;
pub use permission::Permission;
pub use post::{Attachment, Post, PostStatus, UnknownStatus};
pub use user::User;

/// Tombstone-based deletion shared by every admin-managed entity.
pub trait SoftDeletes {
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>);

    fn is_trashed(&self) -> bool {
        self.deleted_at().is_some()
    }

    fn trash(&mut self) {
        self.set_deleted_at(Some(Utc::now()));
    }

    fn restore(&mut self) {
        self.set_deleted_at(None);
    }
}
