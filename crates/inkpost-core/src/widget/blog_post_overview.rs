use std::sync::Arc;

use super::{Stat, StatColor};
use crate::domain::PostStatus;
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Post counts per publishing status. Recomputed on every render.
#[derive(Clone)]
pub struct BlogPostOverview {
    posts: Arc<dyn PostRepository>,
}

impl BlogPostOverview {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    fn presentation(status: PostStatus) -> (&'static str, StatColor) {
        match status {
            PostStatus::Draft => ("Number of draft posts", StatColor::Gray),
            PostStatus::Reviewing => ("Number of posts under review", StatColor::Info),
            PostStatus::Published => ("Number of posts published", StatColor::Success),
        }
    }

    /// Draft, reviewing and published counts, in that order.
    pub async fn stats(&self) -> Result<Vec<Stat>, RepoError> {
        let mut stats = Vec::with_capacity(PostStatus::ALL.len());
        for status in PostStatus::ALL {
            let value = self.posts.count_by_status(status).await?;
            let (description, color) = Self::presentation(status);
            stats.push(Stat {
                label: status.label().to_string(),
                value,
                description: description.to_string(),
                color,
            });
        }
        tracing::debug!(?stats, "Blog post overview computed");
        Ok(stats)
    }
}
