//! The post admin resource: form and table configuration, reactive form
//! rules, upload constraints and the create/edit/list/delete operations.

mod form;
mod reactive;
pub mod schema;
mod upload;

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, SoftDeletes};
use crate::error::{DomainError, FieldErrors};
use crate::ports::{
    BaseRepository, CategoryRepository, PageRequest, Paginated, PostFilter, PostRepository,
    UserRepository,
};

pub use form::{
    CategoryForm, FormEvaluation, PUBLISHING_FIELDS, PermissionForm, PostForm, PostInput,
    UserForm, UserInput, evaluate, evaluate_category,
};
pub use reactive::{Debouncer, LIVE_DEBOUNCE, SlugMode, SlugSync};
pub use upload::{UploadCandidate, UploadRules};

/// Operations behind the post list, create and edit pages.
#[derive(Clone)]
pub struct PostResource {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostResource {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            users,
        }
    }

    pub async fn list(
        &self,
        filter: &PostFilter,
        page: PageRequest,
    ) -> Result<Paginated<Post>, DomainError> {
        Ok(self.posts.list(filter, page).await?)
    }

    /// A live (not trashed) post.
    pub async fn find(&self, id: Uuid) -> Result<Post, DomainError> {
        match self.posts.find_by_id(id).await? {
            Some(post) if !post.is_trashed() => Ok(post),
            _ => Err(not_found(id)),
        }
    }

    pub async fn create(&self, form: PostForm) -> Result<Post, DomainError> {
        let input = form.validate_input()?;
        self.check_references(&input).await?;

        let post = self.posts.create(input.into_post()).await?;
        tracing::info!(post_id = %post.id, status = %post.status, "Post created");
        Ok(post)
    }

    pub async fn update(&self, id: Uuid, form: PostForm) -> Result<Post, DomainError> {
        let mut post = self.find(id).await?;
        let input = form.validate_input()?;
        self.check_references(&input).await?;

        input.apply_to(&mut post);
        let post = self.posts.update(post).await?;
        tracing::info!(post_id = %post.id, status = %post.status, "Post updated");
        Ok(post)
    }

    /// Toggle column of the table.
    pub async fn set_bring_to_light(&self, id: Uuid, value: bool) -> Result<(), DomainError> {
        self.find(id).await?;
        self.posts.set_bring_to_light(id, value).await?;
        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.find(id).await?;
        self.posts.trash(id).await?;
        tracing::info!(post_id = %id, "Post moved to trash");
        Ok(())
    }

    /// Bulk delete action. Unknown or already trashed ids are skipped.
    pub async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, DomainError> {
        let affected = self.posts.trash_many(ids).await?;
        tracing::info!(requested = ids.len(), affected, "Posts moved to trash");
        Ok(affected)
    }

    pub async fn restore(&self, id: Uuid) -> Result<Post, DomainError> {
        if self.posts.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }
        self.posts.restore(id).await?;
        self.find(id).await
    }

    /// Category and author must exist and not be trashed.
    async fn check_references(&self, input: &PostInput) -> Result<(), DomainError> {
        let mut errors = FieldErrors::new();

        let category = self.categories.find_by_id(input.category_id).await?;
        if !category.is_some_and(|c| !c.is_trashed()) {
            errors.add("category_id", "The selected category is invalid.");
        }

        let author = self.users.find_by_id(input.author_id).await?;
        if !author.is_some_and(|u| !u.is_trashed()) {
            errors.add("author_id", "The selected author is invalid.");
        }

        Ok(errors.into_result()?)
    }
}

fn not_found(id: Uuid) -> DomainError {
    DomainError::NotFound {
        entity_type: "post",
        id,
    }
}
