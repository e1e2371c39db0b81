use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SoftDeletes;

/// Publishing state of a post. Any state may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Reviewing,
    Published,
}

impl PostStatus {
    pub const ALL: [PostStatus; 3] = [
        PostStatus::Draft,
        PostStatus::Reviewing,
        PostStatus::Published,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Reviewing => "reviewing",
            PostStatus::Published => "published",
        }
    }

    /// Human label shown in selects and filters.
    pub fn label(self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Reviewing => "Reviewing",
            PostStatus::Published => "Published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown post status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PostStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(PostStatus::Draft),
            "reviewing" => Ok(PostStatus::Reviewing),
            "published" => Ok(PostStatus::Published),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A stored image attached to a post, with the filename it was uploaded as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Path on the public disk, e.g. `post/3f1c….jpg`.
    pub path: String,
    pub original_name: String,
}

/// Post entity - a blog post managed through the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub status: PostStatus,
    pub published_at: Option<NaiveDate>,
    pub bring_to_light: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Create a new draft post.
    pub fn new(
        title: String,
        slug: String,
        category_id: Uuid,
        author_id: Uuid,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            category_id,
            author_id,
            content,
            tags: Vec::new(),
            attachments: Vec::new(),
            status: PostStatus::Draft,
            published_at: None,
            bring_to_light: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Record an edit.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl SoftDeletes for Post {
    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn set_deleted_at(&mut self, at: Option<DateTime<Utc>>) {
        self.deleted_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_known_values_only() {
        for status in PostStatus::ALL {
            assert_eq!(status.as_str().parse::<PostStatus>(), Ok(status));
        }
        assert!("archived".parse::<PostStatus>().is_err());
        assert!("Published".parse::<PostStatus>().is_err());
    }

    #[test]
    fn test_new_post_is_live_draft() {
        let post = Post::new(
            "Hello".into(),
            "hello".into(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Body".into(),
        );
        assert_eq!(post.status, PostStatus::Draft);
        assert!(!post.bring_to_light);
        assert!(!post.is_trashed());
    }

    #[test]
    fn test_trash_and_restore() {
        let mut post = Post::new(
            "Hello".into(),
            "hello".into(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Body".into(),
        );
        post.trash();
        assert!(post.is_trashed());
        post.restore();
        assert!(!post.is_trashed());
    }
}
